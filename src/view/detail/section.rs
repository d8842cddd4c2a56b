use std::borrow::Cow;

use crate::{
    core::{
        models::{
            Architecture,
            Dataset,
            FeatureGroup,
            PerformanceVideo,
        },
        CadModel,
        MediaImage,
        Metric,
        Video,
    },
    view::image_state::ImageKey,
};

/// Share of a grid row a figure takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Full,
    Half,
    TwoThirds,
    OneThird,
}

/// One enlargeable image (or 3D model) on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure<'a> {
    pub key: ImageKey,
    pub src: &'a str,
    pub alt: &'a str,
    pub caption: Option<&'a str>,
    pub span: Span,
    pub model3d: Option<&'a str>,
}

impl<'a> Figure<'a> {
    pub fn image(key: ImageKey, image: &'a MediaImage, span: Span) -> Self {
        Self {
            key,
            src: &image.src,
            alt: &image.alt,
            caption: image.caption.as_deref(),
            span,
            model3d: None,
        }
    }

    pub fn cad(key: ImageKey, model: &'a CadModel, span: Span) -> Self {
        Self {
            key,
            src: &model.src,
            alt: &model.alt,
            caption: model.caption.as_deref(),
            span,
            model3d: None,
        }
    }

    pub fn with_model3d(mut self, model: &'a CadModel) -> Self {
        self.model3d = model.model3d.as_deref();
        self
    }
}

/// A titled list inside a section. Cards may be empty when their source list
/// filtered down to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<'a> {
    pub title: Option<&'a str>,
    pub items: Vec<&'a str>,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, items: &'a [String]) -> Self {
        Self { title: Some(title), items: items.iter().map(String::as_str).collect() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLine<'a> {
    pub label: &'a str,
    pub value: Cow<'a, str>,
}

impl<'a> MetricLine<'a> {
    pub fn borrowed(label: &'a str, value: &'a str) -> Self {
        Self { label, value: Cow::Borrowed(value) }
    }

    pub fn from_metric(metric: &'a Metric) -> Self {
        Self::borrowed(&metric.label, &metric.value)
    }
}

/// A titled metric grid shown beneath a demonstration video.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricGrid<'a> {
    pub title: &'static str,
    pub metrics: Vec<MetricLine<'a>>,
    pub columns: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultBlock<'a> {
    Figures { title: Option<&'static str>, figures: Vec<Figure<'a>> },
    Metrics { title: &'static str, metrics: Vec<MetricLine<'a>>, columns: u8 },
    /// Video at three quarters with a metrics sidebar.
    VideoWithMetrics { video: &'a Video, metrics_title: &'static str, metrics: Vec<MetricLine<'a>> },
    Video { video: &'a Video },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a> {
    Introduction { text: &'a str },
    Objectives { text: &'a str, figure: Option<Figure<'a>> },
    /// Key Features & Functionalities, System Design.
    Groups { title: &'static str, groups: &'a [FeatureGroup], media: Vec<Figure<'a>> },
    PerformanceAndResults { videos: &'a [PerformanceVideo], metrics: &'a [String] },
    Dataset { dataset: &'a Dataset, figures: Vec<Figure<'a>>, emphasize_name: bool },
    Architectures { architectures: &'a [Architecture] },
    Cards { title: &'static str, cards: Vec<Card<'a>>, columns: u8 },
    FigureRow { figures: Vec<Figure<'a>> },
    VideoDemonstration { title: &'static str, video: &'a Video, metrics: Option<MetricGrid<'a>> },
    Results { heading: Option<&'static str>, blocks: Vec<ResultBlock<'a>> },
    Gallery { title: &'static str, figures: Vec<Figure<'a>>, columns: u8 },
    VideoShowcase { title: &'static str, videos: &'a [Video] },
    VideoGallery { title: &'static str, videos: &'a [Video] },
}

impl<'a> Section<'a> {
    /// The visible heading, if the section has one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Section::Introduction { .. } => Some("Introduction"),
            Section::Objectives { .. } => Some("Objectives"),
            Section::Groups { title, .. }
            | Section::Cards { title, .. }
            | Section::VideoDemonstration { title, .. }
            | Section::Gallery { title, .. }
            | Section::VideoShowcase { title, .. }
            | Section::VideoGallery { title, .. } => Some(*title),
            Section::PerformanceAndResults { .. } => Some("Performance & Results"),
            Section::Dataset { .. } => Some("Dataset"),
            Section::Architectures { .. } => Some("Model Architectures"),
            Section::FigureRow { .. } => None,
            Section::Results { heading, .. } => *heading,
        }
    }

    /// Every figure in the section, in display order.
    pub fn figures(&self) -> Vec<&Figure<'a>> {
        match self {
            Section::Objectives { figure, .. } => figure.iter().collect(),
            Section::Groups { media: figures, .. }
            | Section::Dataset { figures, .. }
            | Section::FigureRow { figures }
            | Section::Gallery { figures, .. } => figures.iter().collect(),
            Section::Results { blocks, .. } => blocks
                .iter()
                .flat_map(|block| match block {
                    ResultBlock::Figures { figures, .. } => figures.iter().collect::<Vec<_>>(),
                    _ => Vec::new(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
