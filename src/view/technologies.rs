pub const VISIBLE_TECHNOLOGIES: usize = 5;

/// Technology chips for a summary card: the first five plus a "+N more"
/// indicator when there are more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologyChips<'a> {
    pub shown: &'a [String],
    pub hidden_count: usize,
}

impl<'a> TechnologyChips<'a> {
    pub fn truncated(technologies: &'a [String]) -> Self {
        let shown_len = technologies.len().min(VISIBLE_TECHNOLOGIES);
        Self {
            shown: &technologies[..shown_len],
            hidden_count: technologies.len() - shown_len,
        }
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden_count > 0).then(|| format!("+{} more", self.hidden_count))
    }
}

/// The "Core Concepts" block on a detail page, which can be expanded in place.
#[derive(Debug, Clone, Default)]
pub struct ConceptsToggle {
    expanded: bool,
}

impl ConceptsToggle {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn visible<'a>(&self, technologies: &'a [String]) -> &'a [String] {
        if self.expanded || technologies.len() <= VISIBLE_TECHNOLOGIES {
            technologies
        } else {
            &technologies[..VISIBLE_TECHNOLOGIES]
        }
    }

    /// Button text, or `None` when everything already fits.
    pub fn button_label(&self, technologies: &[String]) -> Option<String> {
        if technologies.len() <= VISIBLE_TECHNOLOGIES {
            return None;
        }
        Some(if self.expanded {
            "Show Less".to_string()
        } else {
            format!("Show {} More", technologies.len() - VISIBLE_TECHNOLOGIES)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn techs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tech-{i}")).collect()
    }

    #[test]
    fn seven_technologies_show_five_and_two_more() {
        let all = techs(7);
        let chips = TechnologyChips::truncated(&all);
        assert_eq!(chips.shown.len(), 5);
        assert_eq!(chips.overflow_label().as_deref(), Some("+2 more"));
    }

    #[test]
    fn five_or_fewer_show_everything_without_indicator() {
        for n in [0, 3, 5] {
            let all = techs(n);
            let chips = TechnologyChips::truncated(&all);
            assert_eq!(chips.shown.len(), n);
            assert!(chips.overflow_label().is_none());
        }
    }

    #[test]
    fn concepts_toggle_expands_and_collapses() {
        let all = techs(8);
        let mut toggle = ConceptsToggle::default();
        assert_eq!(toggle.visible(&all).len(), 5);
        assert_eq!(toggle.button_label(&all).as_deref(), Some("Show 3 More"));

        toggle.toggle();
        assert_eq!(toggle.visible(&all).len(), 8);
        assert_eq!(toggle.button_label(&all).as_deref(), Some("Show Less"));

        assert!(toggle.button_label(&techs(4)).is_none());
    }
}
