//! Response handling module - base64 data URLs and file output

pub mod base64;
pub mod file;

pub use file::ImageSaver;
