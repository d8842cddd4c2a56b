use std::{
    env,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::info;

use crate::{
    core::{
        assets::BASE_PATH_ENV,
        AssetResolver,
        FolioError,
    },
    persistence,
    view::project_list::ListCuration,
};

pub const DEFAULT_CONFIG_FILE: &str = "folio.hjson";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// URL path prefix the site is served under, e.g. "/portfolio".
    pub base_path: String,
    pub data_file: PathBuf,
    /// Copied verbatim into the output (images, videos, models).
    pub public_dir: PathBuf,
    pub output_dir: PathBuf,
    pub server: ServerConfig,
    pub metadata: SiteMetadata,
    pub projects: ProjectListConfig,
    pub show_skills: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectListConfig {
    pub visible_order: Vec<String>,
    pub hidden: Vec<String>,
    pub initial_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            data_file: PathBuf::from("data/projects.json"),
            public_dir: PathBuf::from("public"),
            output_dir: PathBuf::from("out"),
            server: ServerConfig::default(),
            metadata: SiteMetadata::default(),
            projects: ProjectListConfig::default(),
            show_skills: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3000 }
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Portfolio | Chen Hsin Chiang".to_string(),
            description: "Mechanical and robotics engineer passionate about autonomous systems, \
                          embedded control, and intelligent mechatronic design. Graduate student \
                          at University of Pennsylvania."
                .to_string(),
            keywords: [
                "portfolio",
                "mechanical engineer",
                "robotics engineer",
                "mechatronics",
                "embedded systems",
                "autonomous systems",
                "University of Pennsylvania",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            author: "Chen Hsin Chiang".to_string(),
        }
    }
}

impl Default for ProjectListConfig {
    fn default() -> Self {
        Self {
            visible_order: [
                "autonomous-maze-robot",
                "two-stage-gearbox-shaft-design",
                "mie346-design-assignments",
                "mie320-tensile-test",
                "barcelona-logo-projection",
                "dog-breed-classification-cnn",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            hidden: [
                "whac-a-mole-embedded-game",
                "home-cnc-milling-machine",
                "additive-friction-stir-deposition",
                "meam5100-autonomous-robot",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            initial_count: 4,
        }
    }
}

impl SiteConfig {
    /// Loads `path`, or `folio.hjson` from the working directory when no path
    /// is given and that file exists, then applies the environment override
    /// for the base path.
    pub fn load(path: Option<&Path>) -> Result<Self, FolioError> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(FolioError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                persistence::read_data_file::<SiteConfig>(path)?
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    persistence::read_data_file::<SiteConfig>(default_path)?
                } else {
                    SiteConfig::default()
                }
            }
        };

        if let Ok(base_path) = env::var(BASE_PATH_ENV) {
            info!("Base path taken from {}: {:?}", BASE_PATH_ENV, base_path);
            config.base_path = base_path;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        if self.projects.initial_count == 0 {
            return Err(FolioError::Config("projects.initial_count must be at least 1".to_string()));
        }
        if self.base_path.contains(char::is_whitespace) {
            return Err(FolioError::Config(format!(
                "base_path must not contain whitespace: {:?}",
                self.base_path
            )));
        }
        Ok(())
    }

    pub fn asset_resolver(&self) -> AssetResolver {
        AssetResolver::new(&self.base_path)
    }

    pub fn curation(&self) -> ListCuration {
        ListCuration::new(
            self.projects.visible_order.clone(),
            self.projects.hidden.iter().cloned(),
            self.projects.initial_count,
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
