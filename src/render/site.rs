use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    info,
};

use super::{
    detail,
    home::{
        self,
        HomeOptions,
    },
    page::{
        document,
        PageMeta,
    },
    SITE_CSS,
    SITE_JS,
};
use crate::{
    config::SiteConfig,
    core::{
        AssetResolver,
        FolioError,
        ProjectCatalog,
    },
    persistence,
    view::{
        detail::DetailPage,
        project_list::ListCuration,
    },
};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Summary of one static build, written next to the pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildManifest {
    pub generated_at: DateTime<Utc>,
    pub base_path: String,
    pub slugs: Vec<String>,
    pub pages: Vec<PathBuf>,
    pub files_copied: usize,
}

/// Loaded catalog plus everything needed to render its pages.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: ProjectCatalog,
    pub resolver: AssetResolver,
    pub curation: ListCuration,
}

impl Site {
    pub fn new(config: SiteConfig, catalog: ProjectCatalog) -> Self {
        let resolver = config.asset_resolver();
        let curation = config.curation();
        Self { config, catalog, resolver, curation }
    }

    pub fn load(config: SiteConfig) -> Result<Self, FolioError> {
        let catalog = persistence::load_catalog(&config.data_file)?;
        Ok(Self::new(config, catalog))
    }

    pub fn render_home(&self) -> String {
        let options = HomeOptions { show_skills: self.config.show_skills };
        let body = home::render(&self.catalog, &self.curation, &options, &self.resolver);
        document(
            &PageMeta::home(&self.config.metadata),
            &self.config.metadata.author,
            &self.resolver,
            &body,
        )
    }

    pub fn render_project(&self, slug: &str) -> Result<String, FolioError> {
        let page = DetailPage::resolve(&self.catalog, slug)?;
        let body = detail::render(&page, &self.resolver);
        Ok(document(
            &PageMeta::project(page.project),
            &self.config.metadata.author,
            &self.resolver,
            &body,
        ))
    }

    pub fn render_not_found(&self) -> String {
        document(
            &PageMeta::not_found(),
            &self.config.metadata.author,
            &self.resolver,
            &detail::not_found(&self.resolver),
        )
    }

    /// Writes every page and asset under `out_dir` and returns the manifest.
    pub fn build(&self, out_dir: &Path) -> Result<BuildManifest, FolioError> {
        fs::create_dir_all(out_dir)?;
        let mut pages = Vec::new();

        write_page(out_dir, Path::new("index.html"), &self.render_home(), &mut pages)?;
        for slug in self.catalog.slugs() {
            let relative = Path::new("projects").join(slug).join("index.html");
            write_page(out_dir, &relative, &self.render_project(slug)?, &mut pages)?;
        }
        write_page(out_dir, Path::new("404.html"), &self.render_not_found(), &mut pages)?;
        write_page(out_dir, Path::new("assets/site.css"), SITE_CSS, &mut pages)?;
        write_page(out_dir, Path::new("assets/site.js"), SITE_JS, &mut pages)?;

        let files_copied = persistence::copy_dir(&self.config.public_dir, out_dir)?;
        debug!("Copied {} public files from {}", files_copied, self.config.public_dir.display());

        let manifest = BuildManifest {
            generated_at: Utc::now(),
            base_path: self.resolver.prefix().to_string(),
            slugs: self.catalog.slugs().map(str::to_string).collect(),
            pages,
            files_copied,
        };
        persistence::write_json(&manifest, &out_dir.join(MANIFEST_FILE))?;
        info!(
            "Built {} pages for {} projects into {}",
            manifest.pages.len(),
            manifest.slugs.len(),
            out_dir.display()
        );
        Ok(manifest)
    }
}

fn write_page(out_dir: &Path, relative: &Path, content: &str, pages: &mut Vec<PathBuf>) -> Result<(), FolioError> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    pages.push(relative.to_path_buf());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::{
        core::{
            catalog::tests::record,
            CadModel,
        },
        render::page::MODEL_VIEWER_SCRIPT,
    };

    fn bundled_site(config: SiteConfig) -> Site {
        let mut config = config;
        config.data_file = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/projects.json");
        Site::load(config).unwrap()
    }

    #[test]
    fn build_writes_one_page_per_slug_and_a_manifest() {
        let out = tempdir().unwrap();
        let public = tempdir().unwrap();
        fs::create_dir_all(public.path().join("images")).unwrap();
        fs::write(public.path().join("images/a.png"), b"png").unwrap();

        let config = SiteConfig { public_dir: public.path().to_path_buf(), ..SiteConfig::default() };
        let site = bundled_site(config);
        let manifest = site.build(out.path()).unwrap();

        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("404.html").is_file());
        assert!(out.path().join("assets/site.js").is_file());
        assert!(out.path().join("images/a.png").is_file());
        for slug in site.catalog.slugs() {
            assert!(out.path().join("projects").join(slug).join("index.html").is_file());
        }
        assert_eq!(manifest.slugs.len(), site.catalog.len());
        assert_eq!(manifest.pages.len(), site.catalog.len() + 4);
        assert_eq!(manifest.files_copied, 1);

        let written: BuildManifest = persistence::read_data_file(&out.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(written.slugs, manifest.slugs);
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let site = bundled_site(SiteConfig::default());
        let err = site.render_project("no-such-project").unwrap_err();
        assert!(err.is_not_found());
        assert!(site.render_not_found().contains("<title>Project Not Found</title>"));
    }

    #[test]
    fn maze_page_with_3d_model_loads_the_viewer_script() {
        let mut maze = record("autonomous-maze-robot");
        maze.cad_models = Some(vec![CadModel {
            src: "/images/rover.png".to_string(),
            alt: "Rover".to_string(),
            caption: None,
            model3d: Some("/models/rover.glb".to_string()),
        }]);
        let catalog = ProjectCatalog::new(vec![maze, record("plain")]).unwrap();
        let site = Site::new(SiteConfig::default(), catalog);

        let page = site.render_project("autonomous-maze-robot").unwrap();
        assert!(page.contains("<model-viewer src=\"/models/rover.glb\""));
        assert!(page.contains(MODEL_VIEWER_SCRIPT));
        assert!(!site.render_project("plain").unwrap().contains(MODEL_VIEWER_SCRIPT));
    }

    #[test]
    fn base_path_prefixes_links() {
        let config = SiteConfig { base_path: "portfolio".to_string(), ..SiteConfig::default() };
        let site = bundled_site(config);
        let slug = site.curation.visible(&site.catalog)[0].slug.clone();

        let home = site.render_home();
        assert!(home.contains(&format!("href=\"/portfolio/projects/{slug}\"")));
        assert!(home.contains("href=\"/portfolio/assets/site.css\""));
        let page = site.render_project(&slug).unwrap();
        assert!(page.contains("href=\"/portfolio/#projects\""));
    }
}
