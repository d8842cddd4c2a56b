use serde::{
    Deserialize,
    Serialize,
};

/// One portfolio project. Everything past `image` is optional and its presence
/// decides which detail sections get rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub image: String, // card thumbnail

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Dataset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architectures: Option<Vec<Architecture>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_implementation: Option<TechnicalImplementation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_and_analysis_methodology: Option<DesignMethodology>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_features_and_functionalities: Option<Vec<FeatureGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_design: Option<Vec<FeatureGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_and_results: Option<PerformanceAndResults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_achievements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<MediaImage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<MediaImage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cad_models: Option<Vec<CadModel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<Video>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalImplementation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_preprocessing: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_augmentation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_details: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_evaluation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_sections: Option<Vec<String>>,
}

impl TechnicalImplementation {
    /// Buckets in display order. Labels are decided by the layout, not here.
    pub fn buckets(&self) -> [Option<&[String]>; 5] {
        [
            self.data_preprocessing.as_deref(),
            self.data_augmentation.as_deref(),
            self.training_details.as_deref(),
            self.model_evaluation.as_deref(),
            self.other_sections.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignMethodology {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_approach: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_selection: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_and_fatigue_analysis: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deflection_and_slope: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation_and_validation: Option<Vec<String>>,
}

impl DesignMethodology {
    pub fn buckets(&self) -> [Option<&[String]>; 5] {
        [
            self.design_approach.as_deref(),
            self.component_selection.as_deref(),
            self.stress_and_fatigue_analysis.as_deref(),
            self.deflection_and_slope.as_deref(),
            self.simulation_and_validation.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAndResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<PerformanceVideo>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceVideo {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_accuracy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_accuracy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_accuracy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epochs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_metrics: Option<Vec<Metric>>,
}

impl ResultsSummary {
    pub fn other_metrics(&self) -> &[Metric] {
        self.other_metrics.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadModel {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// glTF/GLB file shown in a 3D viewer instead of the still image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model3d: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub src: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<VideoKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
}

impl Video {
    pub fn is_gif(&self) -> bool {
        self.src.to_lowercase().ends_with(".gif")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Simulation,
    Operation,
    Other,
}

impl VideoKind {
    pub fn label(&self) -> &'static str {
        match self {
            VideoKind::Simulation => "Simulation",
            VideoKind::Operation => "Operation",
            VideoKind::Other => "Other",
        }
    }
}

impl ProjectRecord {
    pub fn images(&self) -> &[MediaImage] {
        self.images.as_deref().unwrap_or_default()
    }

    pub fn photos(&self) -> &[MediaImage] {
        self.photos.as_deref().unwrap_or_default()
    }

    pub fn cad_models(&self) -> &[CadModel] {
        self.cad_models.as_deref().unwrap_or_default()
    }

    pub fn videos(&self) -> &[Video] {
        self.videos.as_deref().unwrap_or_default()
    }

    pub fn key_achievements(&self) -> &[String] {
        self.key_achievements.as_deref().unwrap_or_default()
    }

    pub fn first_video_of(&self, kind: VideoKind) -> Option<&Video> {
        self.videos().iter().find(|video| video.kind == Some(kind))
    }

    /// "course • institution • year", only when a course is set.
    pub fn course_line(&self) -> Option<String> {
        let course = self.course.as_deref()?;
        let mut line = course.to_string();
        if let Some(institution) = &self.institution {
            line.push_str(" • ");
            line.push_str(institution);
        }
        if let Some(year) = &self.year {
            line.push_str(" • ");
            line.push_str(year);
        }
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "slug": "demo",
        "title": "Demo",
        "shortDescription": "short",
        "fullDescription": "full",
        "technologies": ["Rust"],
        "image": "/images/demo.png"
    }"#;

    #[test]
    fn optional_fields_default_to_absent() {
        let record: ProjectRecord = serde_json::from_str(MINIMAL).unwrap();
        assert_eq!(record.slug, "demo");
        assert!(record.objective.is_none());
        assert!(record.results.is_none());
        assert!(record.images().is_empty());
        assert!(record.course_line().is_none());
    }

    #[test]
    fn video_type_is_read_from_the_type_key() {
        let video: Video = serde_json::from_str(
            r#"{"src": "/videos/a.mp4", "title": "A", "type": "simulation"}"#,
        )
        .unwrap();
        assert_eq!(video.kind, Some(VideoKind::Simulation));
        assert!(!video.is_gif());
    }

    #[test]
    fn course_line_joins_present_parts() {
        let mut record: ProjectRecord = serde_json::from_str(MINIMAL).unwrap();
        record.course = Some("MIE 444".to_string());
        record.year = Some("2022".to_string());
        assert_eq!(record.course_line().as_deref(), Some("MIE 444 • 2022"));
    }

    #[test]
    fn methodology_buckets_are_independent() {
        let methodology = DesignMethodology {
            deflection_and_slope: Some(vec!["slope".to_string()]),
            ..Default::default()
        };
        let buckets = methodology.buckets();
        assert!(buckets[0].is_none());
        assert_eq!(buckets[3].map(|items| items.len()), Some(1));
    }
}
