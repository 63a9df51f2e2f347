pub mod checklist;
pub mod editor;

pub use checklist::MissionChecklist;
pub use editor::CatalogEditor;
