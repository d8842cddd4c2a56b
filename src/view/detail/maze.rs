use super::section::{
    Card,
    Figure,
    MetricLine,
    ResultBlock,
    Section,
    Span,
};
use crate::{
    core::{
        ProjectRecord,
        VideoKind,
    },
    view::image_state::ImageKey,
};

const OBSTACLE_KEYWORDS: &[&str] = &["obstacle", "angle", "sensor threshold", "simmer"];
const LOCALIZATION_KEYWORDS: &[&str] = &["localization", "probability", "path planning", "heading"];
const BLOCK_KEYWORDS: &[&str] = &["block", "gripper", "servo", "scanning"];

const HARDWARE_COMPONENTS: &[&str] = &[
    "Arduino Uno microcontrollers (sensors & motor control)",
    "7 ultrasonic sensors (HC-SR04)",
    "2 IR sensors (block detection & floor pattern)",
    "2 DC motors with H-bridge (L298N)",
    "2 SG90 servo motors (gripper & lift)",
    "HC-05 Bluetooth module",
    "Custom 3D-printed chassis",
];

const SOFTWARE_AND_CONTROL: &[&str] = &[
    "Arduino C/C++ firmware",
    "MATLAB control algorithms",
    "Bluetooth serial communication (9600 baud)",
    "Probability-based localization (Monte Carlo)",
    "Fixed path planning system",
    "Real-time obstacle avoidance",
    "SimMer simulation environment",
];

const PERFORMANCE_SUMMARY: &[(&str, &str)] = &[
    ("Obstacle Avoidance", "Perfect collision-free navigation achieved"),
    ("Localization", "Successfully navigated from block 30 to loading zone in demonstration"),
    ("Block Detection", "Functional - successfully identified load location using scanning sequence"),
    (
        "Block Manipulation",
        "Limited due to gripper design constraints (insufficient torque, weak connection)",
    ),
    (
        "Integration",
        "Code organization challenges prevented full integration of load detection/pickup",
    ),
];

/// Implementation notes grouped by theme. A note can sit in several buckets,
/// or in none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordBuckets<'a> {
    pub obstacle: Vec<&'a str>,
    pub localization: Vec<&'a str>,
    pub block: Vec<&'a str>,
}

fn matches_any(note: &str, keywords: &[&str]) -> bool {
    let note = note.to_lowercase();
    keywords.iter().any(|keyword| note.contains(keyword))
}

pub fn bucket_notes(notes: &[String]) -> KeywordBuckets<'_> {
    let mut buckets = KeywordBuckets::default();
    for note in notes {
        if matches_any(note, OBSTACLE_KEYWORDS) {
            buckets.obstacle.push(note);
        }
        if matches_any(note, LOCALIZATION_KEYWORDS) {
            buckets.localization.push(note);
        }
        if matches_any(note, BLOCK_KEYWORDS) {
            buckets.block.push(note);
        }
    }
    buckets
}

/// The bespoke robot layout. Replaces the whole standard sequence, nothing
/// from the rule-driven sections leaks in.
pub fn sections(project: &ProjectRecord) -> Vec<Section<'_>> {
    let mut sections = Vec::new();

    if let Some(text) = project.objective.as_deref() {
        sections.push(Section::Objectives { text, figure: None });
    }

    let mut design = Vec::new();
    if let Some(photo) = project.photos().first() {
        design.push(Figure::image(ImageKey::indexed("photo", 0), photo, Span::Half));
    }
    if let Some(model) = project.cad_models().first() {
        design.push(Figure::cad(ImageKey::indexed("cad", 0), model, Span::Half).with_model3d(model));
    }
    if !design.is_empty() {
        sections.push(Section::Gallery { title: "Robot Design", figures: design, columns: 2 });
    }

    if let Some(implementation) = &project.technical_implementation {
        let mut cards = Vec::new();
        if let Some(details) = implementation.training_details.as_deref() {
            let buckets = bucket_notes(details);
            cards.push(Card { title: Some("Obstacle Avoidance Strategy"), items: buckets.obstacle });
            cards.push(Card { title: Some("Localization & Navigation Strategy"), items: buckets.localization });
            cards.push(Card { title: Some("Block Delivery Strategy"), items: buckets.block });
        }
        if let Some(preprocessing) = implementation.data_preprocessing.as_deref() {
            cards.push(Card::new("Sensor Integration & Data Processing", preprocessing));
        }
        sections.push(Section::Cards { title: "Engineering Approach", cards, columns: 1 });
    }

    sections.push(Section::Cards {
        title: "System Architecture",
        cards: vec![
            Card { title: Some("Hardware Components"), items: HARDWARE_COMPONENTS.to_vec() },
            Card { title: Some("Software & Control"), items: SOFTWARE_AND_CONTROL.to_vec() },
        ],
        columns: 2,
    });

    if let Some(video) = project.first_video_of(VideoKind::Simulation) {
        sections.push(Section::VideoDemonstration {
            title: "Simulation Demonstration",
            video,
            metrics: None,
        });
    }

    if project.results.is_some() {
        let mut blocks = vec![ResultBlock::Metrics {
            title: "Performance Summary",
            metrics: PERFORMANCE_SUMMARY
                .iter()
                .map(|(label, value)| MetricLine::borrowed(label, value))
                .collect(),
            columns: 1,
        }];
        if let Some(video) = project.first_video_of(VideoKind::Operation) {
            blocks.push(ResultBlock::Video { video });
        }
        sections.push(Section::Results { heading: Some("Final Results & Performance"), blocks });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn each_note_lands_in_its_theme() {
        let details = notes(&[
            "obstacle angle correction",
            "localization probability update",
            "block gripper servo control",
            "unrelated note",
        ]);
        let buckets = bucket_notes(&details);

        assert_eq!(buckets.obstacle, vec!["obstacle angle correction"]);
        assert_eq!(buckets.localization, vec!["localization probability update"]);
        assert_eq!(buckets.block, vec!["block gripper servo control"]);
        for bucket in [&buckets.obstacle, &buckets.localization, &buckets.block] {
            assert!(!bucket.contains(&"unrelated note"));
        }
    }

    #[test]
    fn matching_ignores_case_and_allows_several_buckets() {
        let details = notes(&["Tuned SimMer HEADING estimate near each Block"]);
        let buckets = bucket_notes(&details);
        assert_eq!(buckets.obstacle.len(), 1);
        assert_eq!(buckets.localization.len(), 1);
        assert_eq!(buckets.block.len(), 1);
    }

    #[test]
    fn storage_order_is_kept_within_a_bucket() {
        let details = notes(&["second obstacle", "first obstacle"]);
        assert_eq!(bucket_notes(&details).obstacle, vec!["second obstacle", "first obstacle"]);
    }
}
