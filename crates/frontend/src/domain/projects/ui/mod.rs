pub mod list;
pub mod media;
