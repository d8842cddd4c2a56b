pub mod config;
pub mod content;
pub mod core;
pub mod logging;
pub mod persistence;
pub mod render;
pub mod server;
pub mod view;

pub use crate::{
    config::SiteConfig,
    core::{
        FolioError,
        ProjectCatalog,
        ProjectRecord,
    },
    render::Site,
};
