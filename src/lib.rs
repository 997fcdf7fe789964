// Batch Watermark Library
// Photo and video watermarking jobs shared by the CLI and the tests

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod photo;
pub mod report;
pub mod scan;
pub mod video;
pub mod watermark;
