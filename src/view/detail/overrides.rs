/// Heading and per-bucket labels for a five-bucket block. A `None` label hides
/// that bucket even when the record has it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketLabels {
    pub title: &'static str,
    pub labels: [Option<&'static str>; 5],
}

pub const METHODOLOGY_LABELS: BucketLabels = BucketLabels {
    title: "Engineering Approach",
    labels: [
        Some("System Architecture & Hardware Design"),
        Some("Component Selection"),
        Some("Filtering & Protection Enhancements"),
        Some("Deflection and Slope"),
        Some("Testing & Optimization"),
    ],
};

pub const IMPLEMENTATION_LABELS: BucketLabels = BucketLabels {
    title: "Technical Implementation",
    labels: [
        Some("Data Preprocessing"),
        Some("Data Augmentation"),
        Some("Training Details"),
        Some("Model Evaluation"),
        Some("Additional Details"),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureRow {
    /// images[0] at two thirds, images[1] at one third
    Fea,
    /// images[0] and images[1] side by side
    Circuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImplementationVariant {
    Buckets { labels: BucketLabels, columns: u8 },
    /// Only trainingDetails, as a single "Design Process" list.
    DesignProcess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoVideo {
    Plain,
    /// results.otherMetrics in a three column grid under the video.
    WithMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsVariant {
    Standard,
    Suppressed,
    /// "Testing Results": first video beside "Test Metrics".
    Testing,
    /// No heading, otherMetrics as a two column "Key Features" grid.
    KeyFeatures,
    /// FEA figure pair, then "Performance Metrics".
    FeaPair,
    /// No heading, material figures. Rendered even without a results record.
    MaterialAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideosVariant {
    Gallery,
    Showcase,
    Hidden,
}

/// Per-slug layout choices for the standard detail layout. Every field is
/// consulted by exactly one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOverrides {
    pub introduction: bool,
    pub objectives: bool,
    pub objective_figure: bool,
    pub system_design_media: bool,
    pub emphasize_dataset_name: bool,
    pub methodology: Option<BucketLabels>,
    pub figure_row: Option<FigureRow>,
    pub implementation: ImplementationVariant,
    pub demo_video: Option<DemoVideo>,
    pub results: ResultsVariant,
    pub standalone_media: bool,
    pub cad_full_width: bool,
    pub engineering_drawings: bool,
    pub videos: VideosVariant,
}

impl LayoutOverrides {
    pub const DEFAULT: Self = Self {
        introduction: false,
        objectives: true,
        objective_figure: false,
        system_design_media: false,
        emphasize_dataset_name: false,
        methodology: Some(METHODOLOGY_LABELS),
        figure_row: None,
        implementation: ImplementationVariant::Buckets { labels: IMPLEMENTATION_LABELS, columns: 1 },
        demo_video: None,
        results: ResultsVariant::Standard,
        standalone_media: true,
        cad_full_width: false,
        engineering_drawings: false,
        videos: VideosVariant::Gallery,
    };
}

impl Default for LayoutOverrides {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static DEFAULT_OVERRIDES: LayoutOverrides = LayoutOverrides::DEFAULT;

pub static SPECIAL_CASES: &[(&str, LayoutOverrides)] = &[
    (
        "barcelona-logo-projection",
        LayoutOverrides {
            introduction: true,
            objectives: false,
            methodology: None,
            results: ResultsVariant::Suppressed,
            videos: VideosVariant::Showcase,
            ..LayoutOverrides::DEFAULT
        },
    ),
    (
        "additive-friction-stir-deposition",
        LayoutOverrides {
            objective_figure: true,
            implementation: ImplementationVariant::Buckets {
                labels: BucketLabels {
                    title: "Engineering Analysis",
                    labels: [
                        Some("Process Overview & Methodology"),
                        Some("Material Selection & Process Parameters"),
                        Some("Experimental Design & Comparative Analysis"),
                        Some("Microstructural & Mechanical Evaluation"),
                        Some("Post-Processing & Validation"),
                    ],
                },
                columns: 1,
            },
            results: ResultsVariant::MaterialAnalysis,
            ..LayoutOverrides::DEFAULT
        },
    ),
    (
        "meam5100-autonomous-robot",
        LayoutOverrides {
            system_design_media: true,
            standalone_media: false,
            ..LayoutOverrides::DEFAULT
        },
    ),
    (
        "mie320-tensile-test",
        LayoutOverrides {
            methodology: Some(BucketLabels {
                title: "Engineering Process",
                labels: [
                    Some("Design & Simulation Setup"),
                    Some("Design Iteration & FEA Analysis"),
                    Some("Experimental Testing & Validation"),
                    Some("Deflection and Slope"),
                    Some("Refinement & Final Design"),
                ],
            }),
            figure_row: Some(FigureRow::Fea),
            results: ResultsVariant::Testing,
            videos: VideosVariant::Hidden,
            ..LayoutOverrides::DEFAULT
        },
    ),
    (
        "mie346-design-assignments",
        LayoutOverrides {
            figure_row: Some(FigureRow::Circuit),
            results: ResultsVariant::KeyFeatures,
            ..LayoutOverrides::DEFAULT
        },
    ),
    (
        "two-stage-gearbox-shaft-design",
        LayoutOverrides {
            demo_video: Some(DemoVideo::Plain),
            results: ResultsVariant::FeaPair,
            videos: VideosVariant::Hidden,
            ..LayoutOverrides::DEFAULT
        },
    ),
    (
        "whac-a-mole-embedded-game",
        LayoutOverrides {
            methodology: Some(BucketLabels {
                title: METHODOLOGY_LABELS.title,
                labels: [
                    METHODOLOGY_LABELS.labels[0],
                    None,
                    Some("Embedded Software Design"),
                    METHODOLOGY_LABELS.labels[3],
                    METHODOLOGY_LABELS.labels[4],
                ],
            }),
            demo_video: Some(DemoVideo::WithMetrics),
            results: ResultsVariant::Suppressed,
            videos: VideosVariant::Hidden,
            ..LayoutOverrides::DEFAULT
        },
    ),
    (
        "dog-breed-classification-cnn",
        LayoutOverrides {
            emphasize_dataset_name: true,
            implementation: ImplementationVariant::Buckets { labels: IMPLEMENTATION_LABELS, columns: 2 },
            ..LayoutOverrides::DEFAULT
        },
    ),
    (
        "home-cnc-milling-machine",
        LayoutOverrides {
            implementation: ImplementationVariant::DesignProcess,
            results: ResultsVariant::Suppressed,
            cad_full_width: true,
            engineering_drawings: true,
            ..LayoutOverrides::DEFAULT
        },
    ),
];

/// Looks up the layout choices for `slug`, falling back to the defaults.
pub fn overrides_for(slug: &str) -> &'static LayoutOverrides {
    SPECIAL_CASES
        .iter()
        .find(|(special, _)| *special == slug)
        .map(|(_, overrides)| overrides)
        .unwrap_or(&DEFAULT_OVERRIDES)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_has_no_duplicate_slugs() {
        let mut seen = HashSet::new();
        for (slug, _) in SPECIAL_CASES {
            assert!(seen.insert(*slug), "{slug} listed twice");
        }
    }

    #[test]
    fn unlisted_slugs_get_the_defaults() {
        assert_eq!(*overrides_for("some-new-project"), LayoutOverrides::DEFAULT);
        assert_eq!(*overrides_for(""), LayoutOverrides::default());
    }

    #[test]
    fn three_slugs_suppress_results() {
        let suppressed: Vec<&str> = SPECIAL_CASES
            .iter()
            .filter(|(_, overrides)| overrides.results == ResultsVariant::Suppressed)
            .map(|(slug, _)| *slug)
            .collect();
        assert_eq!(
            suppressed,
            vec!["barcelona-logo-projection", "whac-a-mole-embedded-game", "home-cnc-milling-machine"]
        );
    }

    #[test]
    fn whac_a_mole_relabels_one_bucket_and_hides_another() {
        let labels = overrides_for("whac-a-mole-embedded-game").methodology.unwrap();
        assert_eq!(labels.labels[1], None);
        assert_eq!(labels.labels[2], Some("Embedded Software Design"));
        assert_eq!(labels.labels[0], METHODOLOGY_LABELS.labels[0]);
    }
}
