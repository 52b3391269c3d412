// Utils module for utility functions
pub mod drive_link;

pub use drive_link::to_direct_download;
