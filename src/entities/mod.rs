pub mod extraction;
pub mod format;
pub mod payload;
