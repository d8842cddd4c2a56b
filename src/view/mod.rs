pub mod contact;
pub mod detail;
pub mod image_state;
pub mod modal;
pub mod project_list;
pub mod technologies;
pub mod video;

pub use detail::{
    DetailLayout,
    DetailPage,
};
pub use modal::{
    ClickTarget,
    EnlargedImage,
    ImageModal,
};
pub use project_list::{
    ListCuration,
    ProjectListState,
};
