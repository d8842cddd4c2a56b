use std::collections::HashSet;

use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
};

use super::{
    FolioError,
    ProjectRecord,
};

const SLUG_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";

/// On-disk shape of the project data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub projects: Vec<ProjectRecord>,
}

/// The ordered, immutable project collection. Storage order is the default
/// display order.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// Builds a catalog, rejecting duplicate or non URL-safe slugs.
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, FolioError> {
        let slug_re = Regex::new(SLUG_PATTERN)?;
        let mut seen = HashSet::new();

        for project in &projects {
            if !slug_re.is_match(&project.slug) {
                return Err(FolioError::InvalidSlug(project.slug.clone()));
            }
            if !seen.insert(project.slug.as_str()) {
                return Err(FolioError::DuplicateSlug(project.slug.clone()));
            }
        }

        Ok(Self { projects })
    }

    pub fn from_file(file: CatalogFile) -> Result<Self, FolioError> {
        Self::new(file.projects)
    }

    pub fn find(&self, slug: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    pub fn resolve(&self, slug: &str) -> Result<&ProjectRecord, FolioError> {
        self.find(slug).ok_or_else(|| FolioError::ProjectNotFound(slug.to_string()))
    }

    /// Every slug in storage order, for static generation.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|project| project.slug.as_str())
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
