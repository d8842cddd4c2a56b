use std::collections::HashSet;

use tracing::debug;

use crate::core::{
    ProjectCatalog,
    ProjectRecord,
};

pub const PROJECTS_SECTION_ID: &str = "projects";

/// Which projects the home page lists and in what order. Independent of the
/// catalog's storage order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCuration {
    visible_order: Vec<String>,
    hidden: HashSet<String>,
    initial_count: usize,
}

impl ListCuration {
    pub fn new(
        visible_order: Vec<String>,
        hidden: impl IntoIterator<Item = String>,
        initial_count: usize,
    ) -> Self {
        Self { visible_order, hidden: hidden.into_iter().collect(), initial_count }
    }

    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    pub fn is_hidden(&self, slug: &str) -> bool {
        self.hidden.contains(slug)
    }

    /// Curated order, dropping slugs that are not authored yet and slugs that
    /// are explicitly hidden.
    pub fn visible<'a>(&self, catalog: &'a ProjectCatalog) -> Vec<&'a ProjectRecord> {
        self.visible_order
            .iter()
            .filter_map(|slug| {
                let found = catalog.find(slug);
                if found.is_none() {
                    debug!("Curated slug {} has no project, skipping", slug);
                }
                found
            })
            .filter(|project| !self.is_hidden(&project.slug))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEffect {
    None,
    /// Collapsing scrolls the viewport back to the start of the section.
    ScrollToSection(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListControl {
    SeeMore,
    ShowLess,
}

impl ListControl {
    pub fn label(&self) -> &'static str {
        match self {
            ListControl::SeeMore => "See More Projects",
            ListControl::ShowLess => "Show Less",
        }
    }
}

/// Expand/collapse state of the home page project grid.
#[derive(Debug, Clone, Default)]
pub struct ProjectListState {
    show_all: bool,
}

impl ProjectListState {
    pub fn is_expanded(&self) -> bool {
        self.show_all
    }

    pub fn toggle(&mut self) -> ListEffect {
        self.show_all = !self.show_all;
        if self.show_all {
            ListEffect::None
        } else {
            ListEffect::ScrollToSection(PROJECTS_SECTION_ID)
        }
    }

    pub fn displayed<'a, 'p>(
        &self,
        visible: &'a [&'p ProjectRecord],
        curation: &ListCuration,
    ) -> &'a [&'p ProjectRecord] {
        if self.show_all {
            visible
        } else {
            &visible[..visible.len().min(curation.initial_count())]
        }
    }

    pub fn control(&self, visible_len: usize, curation: &ListCuration) -> Option<ListControl> {
        if visible_len <= curation.initial_count() {
            return None;
        }
        Some(if self.show_all { ListControl::ShowLess } else { ListControl::SeeMore })
    }
}
