pub mod assets;
pub mod catalog;
pub mod errors;
pub mod models;

pub use assets::AssetResolver;
pub use catalog::{
    CatalogFile,
    ProjectCatalog,
};
pub use errors::FolioError;
pub use models::{
    CadModel,
    MediaImage,
    Metric,
    ProjectRecord,
    Video,
    VideoKind,
};
