pub mod maze;
pub mod overrides;
pub mod section;
pub mod standard;


pub use overrides::{
    overrides_for,
    LayoutOverrides,
};
pub use section::{
    Card,
    Figure,
    MetricGrid,
    MetricLine,
    ResultBlock,
    Section,
    Span,
};

use crate::core::{
    FolioError,
    ProjectCatalog,
    ProjectRecord,
};

pub const MAZE_ROBOT_SLUG: &str = "autonomous-maze-robot";
pub const BACK_LINK_LABEL: &str = "Back to All Projects";
pub const BACK_LINK_TARGET: &str = "/#projects";

/// Which section sequence a project page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLayout {
    Standard(&'static LayoutOverrides),
    MazeRobot,
}

impl DetailLayout {
    pub fn for_slug(slug: &str) -> Self {
        if slug == MAZE_ROBOT_SLUG {
            DetailLayout::MazeRobot
        } else {
            DetailLayout::Standard(overrides_for(slug))
        }
    }

    pub fn sections<'a>(&self, project: &'a ProjectRecord) -> Vec<Section<'a>> {
        match self {
            DetailLayout::Standard(overrides) => standard::sections(project, overrides),
            DetailLayout::MazeRobot => maze::sections(project),
        }
    }
}

/// Everything a project page shows, in order: the header and Core Concepts
/// come from `project`, then `sections`, then the achievements.
#[derive(Debug, Clone)]
pub struct DetailPage<'a> {
    pub project: &'a ProjectRecord,
    pub layout: DetailLayout,
    pub sections: Vec<Section<'a>>,
}

impl<'a> DetailPage<'a> {
    pub fn plan(project: &'a ProjectRecord) -> Self {
        let layout = DetailLayout::for_slug(&project.slug);
        let sections = layout.sections(project);
        Self { project, layout, sections }
    }

    /// Fails with `ProjectNotFound` for unknown slugs; there is no partial page.
    pub fn resolve(catalog: &'a ProjectCatalog, slug: &str) -> Result<Self, FolioError> {
        catalog.resolve(slug).map(Self::plan)
    }

    pub fn concepts(&self) -> &'a [String] {
        &self.project.technologies
    }

    pub fn achievements(&self) -> &'a [String] {
        self.project.key_achievements()
    }

    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().filter_map(Section::title).collect()
    }
}
