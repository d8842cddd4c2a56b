pub mod detail;
pub mod home;
pub mod html;
pub mod media;
pub mod page;
pub mod site;

pub use site::{
    BuildManifest,
    Site,
};

pub const SITE_CSS: &str = include_str!("../../assets/site.css");
pub const SITE_JS: &str = include_str!("../../assets/site.js");
