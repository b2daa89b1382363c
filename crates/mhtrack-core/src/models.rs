pub mod entry;
pub mod patient;
pub mod summary;
