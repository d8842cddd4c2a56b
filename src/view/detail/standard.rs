use std::borrow::Cow;

use super::{
    overrides::{
        BucketLabels,
        DemoVideo,
        FigureRow,
        ImplementationVariant,
        LayoutOverrides,
        ResultsVariant,
        VideosVariant,
    },
    section::{
        Card,
        Figure,
        MetricGrid,
        MetricLine,
        ResultBlock,
        Section,
        Span,
    },
};
use crate::{
    core::{
        models::ResultsSummary,
        MediaImage,
        ProjectRecord,
    },
    view::image_state::ImageKey,
};

/// Section plan of the rule-driven layout. Each section is decided on its own
/// from field presence and the slug's overrides.
pub fn sections<'a>(project: &'a ProjectRecord, overrides: &LayoutOverrides) -> Vec<Section<'a>> {
    let images = project.images();
    let mut sections = Vec::new();

    if overrides.introduction {
        if let Some(text) = project.page_description.as_deref() {
            sections.push(Section::Introduction { text });
        }
    }

    if overrides.objectives {
        if let Some(text) = project.objective.as_deref() {
            let objective_figure = if overrides.objective_figure {
                images.first().map(|image| figure(ImageKey::new("objective-img"), image, Span::Full))
            } else {
                None
            };
            sections.push(Section::Objectives { text, figure: objective_figure });
        }
    }

    if let Some(groups) = project.key_features_and_functionalities.as_deref() {
        sections.push(Section::Groups {
            title: "Key Features & Functionalities",
            groups,
            media: Vec::new(),
        });
    }

    if let Some(groups) = project.system_design.as_deref() {
        let media = if overrides.system_design_media { photo_and_cad(project) } else { Vec::new() };
        sections.push(Section::Groups { title: "System Design", groups, media });
    }

    if let Some(performance) = &project.performance_and_results {
        sections.push(Section::PerformanceAndResults {
            videos: performance.videos.as_deref().unwrap_or_default(),
            metrics: performance.metrics.as_deref().unwrap_or_default(),
        });
    }

    if let Some(dataset) = &project.dataset {
        let figures = match images {
            [first, second, ..] => vec![
                figure(ImageKey::indexed("image", 0), first, Span::Half),
                figure(ImageKey::indexed("image", 1), second, Span::Half),
            ],
            _ => Vec::new(),
        };
        sections.push(Section::Dataset {
            dataset,
            figures,
            emphasize_name: overrides.emphasize_dataset_name,
        });
    }

    if let Some(architectures) = project.architectures.as_deref() {
        sections.push(Section::Architectures { architectures });
    }

    if let (Some(labels), Some(methodology)) =
        (overrides.methodology, &project.design_and_analysis_methodology)
    {
        sections.push(Section::Cards {
            title: labels.title,
            cards: labelled_cards(&labels, methodology.buckets()),
            columns: 1,
        });
    }

    if let (Some(row), [first, second, ..]) = (overrides.figure_row, images) {
        let figures = match row {
            FigureRow::Fea => vec![
                figure(ImageKey::indexed("mie320", 0), first, Span::TwoThirds),
                figure(ImageKey::indexed("mie320", 1), second, Span::OneThird),
            ],
            FigureRow::Circuit => vec![
                figure(ImageKey::indexed("circuit", 0), first, Span::Half),
                figure(ImageKey::indexed("circuit", 1), second, Span::Half),
            ],
        };
        sections.push(Section::FigureRow { figures });
    }

    if let Some(implementation) = &project.technical_implementation {
        match overrides.implementation {
            ImplementationVariant::DesignProcess => {
                if let Some(details) = implementation.training_details.as_deref() {
                    sections.push(Section::Cards {
                        title: "Design Process",
                        cards: vec![Card { title: None, items: details.iter().map(String::as_str).collect() }],
                        columns: 1,
                    });
                }
            }
            ImplementationVariant::Buckets { labels, columns } => {
                sections.push(Section::Cards {
                    title: labels.title,
                    cards: labelled_cards(&labels, implementation.buckets()),
                    columns,
                });
            }
        }
    }

    if let (Some(demo), Some(video)) = (overrides.demo_video, project.videos().first()) {
        let metrics = match demo {
            DemoVideo::Plain => None,
            DemoVideo::WithMetrics => project.results.as_ref().map(|_| MetricGrid {
                title: "Performance Metrics",
                metrics: other_metric_lines(project),
                columns: 3,
            }),
        };
        sections.push(Section::VideoDemonstration { title: "Video Demonstration", video, metrics });
    }

    if let Some(results) = results_section(project, overrides.results) {
        sections.push(results);
    }

    if overrides.standalone_media {
        let photos = project.photos();
        if !photos.is_empty() {
            sections.push(Section::Gallery {
                title: "Robot Photos",
                figures: indexed_figures("photo", photos, Span::OneThird),
                columns: 3,
            });
        }

        let cad_models = project.cad_models();
        if !cad_models.is_empty() {
            let (span, columns) = if overrides.cad_full_width { (Span::Full, 1) } else { (Span::Half, 2) };
            sections.push(Section::Gallery {
                title: "CAD Models",
                figures: cad_models
                    .iter()
                    .enumerate()
                    .map(|(idx, model)| Figure::cad(ImageKey::indexed("cad", idx), model, span))
                    .collect(),
                columns,
            });
        }
    }

    if overrides.engineering_drawings && !images.is_empty() {
        sections.push(Section::Gallery {
            title: "Engineering Drawings",
            figures: indexed_figures("eng-drawing", images, Span::Half),
            columns: 2,
        });
    }

    let videos = project.videos();
    if !videos.is_empty() {
        match overrides.videos {
            VideosVariant::Gallery => sections.push(Section::VideoGallery { title: "Videos", videos }),
            VideosVariant::Showcase => sections.push(Section::VideoShowcase { title: "Projects", videos }),
            VideosVariant::Hidden => {}
        }
    }

    sections
}

fn results_section<'a>(project: &'a ProjectRecord, variant: ResultsVariant) -> Option<Section<'a>> {
    let images = project.images();

    match variant {
        ResultsVariant::Suppressed => None,
        ResultsVariant::MaterialAnalysis => {
            let mut blocks = Vec::new();
            if let Some(grain) = images.get(1) {
                blocks.push(ResultBlock::Figures {
                    title: None,
                    figures: vec![figure(ImageKey::new("grain-microscopy"), grain, Span::Full)],
                });
            }
            if images.len() >= 3 {
                let pair: Vec<Figure<'a>> = [("tensile-strength", images.get(3)), ("yield-strength", images.get(2))]
                    .into_iter()
                    .filter_map(|(key, image)| image.map(|image| figure(ImageKey::new(key), image, Span::Half)))
                    .collect();
                blocks.push(ResultBlock::Figures { title: None, figures: pair });
            }
            Some(Section::Results { heading: None, blocks })
        }
        _ => {
            let results = project.results.as_ref()?;
            let section = match variant {
                ResultsVariant::Testing => {
                    let blocks = match project.videos().first() {
                        Some(video) => vec![ResultBlock::VideoWithMetrics {
                            video,
                            metrics_title: "Test Metrics",
                            metrics: other_metric_lines(project),
                        }],
                        None => vec![ResultBlock::Metrics {
                            title: "Test Metrics",
                            metrics: other_metric_lines(project),
                            columns: 1,
                        }],
                    };
                    Section::Results { heading: Some("Testing Results"), blocks }
                }
                ResultsVariant::KeyFeatures => Section::Results {
                    heading: None,
                    blocks: vec![ResultBlock::Metrics {
                        title: "Key Features",
                        metrics: other_metric_lines(project),
                        columns: 2,
                    }],
                },
                ResultsVariant::FeaPair => {
                    let mut blocks = Vec::new();
                    if let [shaft, gear, ..] = images {
                        blocks.push(ResultBlock::Figures {
                            title: None,
                            figures: vec![
                                figure(ImageKey::new("fea-shaft"), shaft, Span::Half),
                                figure(ImageKey::new("fea-gear"), gear, Span::Half),
                            ],
                        });
                    }
                    blocks.push(ResultBlock::Metrics {
                        title: "Performance Metrics",
                        metrics: other_metric_lines(project),
                        columns: 2,
                    });
                    Section::Results { heading: Some("Results"), blocks }
                }
                _ => {
                    let mut blocks = Vec::new();
                    if let Some(training) = images.get(2) {
                        blocks.push(ResultBlock::Figures {
                            title: Some("Training Results"),
                            figures: vec![figure(ImageKey::indexed("image", 2), training, Span::Half)],
                        });
                    }
                    blocks.push(ResultBlock::Metrics {
                        title: "Performance Metrics",
                        metrics: summary_metric_lines(results),
                        columns: 2,
                    });
                    Section::Results { heading: Some("Results"), blocks }
                }
            };
            Some(section)
        }
    }
}

fn figure<'a>(key: ImageKey, image: &'a MediaImage, span: Span) -> Figure<'a> {
    Figure::image(key, image, span)
}

fn indexed_figures<'a>(prefix: &str, images: &'a [MediaImage], span: Span) -> Vec<Figure<'a>> {
    images
        .iter()
        .enumerate()
        .map(|(idx, image)| figure(ImageKey::indexed(prefix, idx), image, span))
        .collect()
}

/// First photo and first CAD model side by side, only when both exist.
fn photo_and_cad(project: &ProjectRecord) -> Vec<Figure<'_>> {
    match (project.photos().first(), project.cad_models().first()) {
        (Some(photo), Some(model)) => vec![
            figure(ImageKey::new("photo-meam5100-0"), photo, Span::Half),
            Figure::cad(ImageKey::new("cad-meam5100-0"), model, Span::Half),
        ],
        _ => Vec::new(),
    }
}

fn labelled_cards<'a>(labels: &BucketLabels, buckets: [Option<&'a [String]>; 5]) -> Vec<Card<'a>> {
    labels
        .labels
        .iter()
        .zip(buckets)
        .filter_map(|(label, bucket)| Some(Card::new((*label)?, bucket?)))
        .collect()
}

fn other_metric_lines(project: &ProjectRecord) -> Vec<MetricLine<'_>> {
    project
        .results
        .as_ref()
        .map(|results| results.other_metrics().iter().map(MetricLine::from_metric).collect())
        .unwrap_or_default()
}

/// Named accuracy fields (each when present) followed by every other metric.
fn summary_metric_lines(results: &ResultsSummary) -> Vec<MetricLine<'_>> {
    let mut lines = Vec::new();
    if let Some(value) = &results.baseline_accuracy {
        lines.push(MetricLine::borrowed("Baseline Accuracy", value));
    }
    if let Some(value) = &results.validation_accuracy {
        lines.push(MetricLine::borrowed("Final Validation Accuracy", value));
    }
    if let Some(value) = &results.test_accuracy {
        lines.push(MetricLine::borrowed("Test Accuracy", value));
    }
    if let Some(epochs) = results.epochs {
        lines.push(MetricLine { label: "Training Epochs", value: Cow::Owned(epochs.to_string()) });
    }
    lines.extend(results.other_metrics().iter().map(MetricLine::from_metric));
    lines
}
