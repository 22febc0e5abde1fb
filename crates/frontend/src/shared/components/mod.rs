pub mod card_animated;
pub mod pagination_controls;
pub mod section_header;
pub mod ui;

pub use card_animated::CardAnimated;
pub use pagination_controls::PaginationControls;
pub use section_header::SectionHeader;
