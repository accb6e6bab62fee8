//! vidclean - erase video URL values from JSON content files
//!
//! vidclean walks a directory tree for `.json` files and empties the string
//! values of a fixed set of video fields (`video`, `video_url`,
//! `hero_video`, ...). Files are edited as raw text, one line at a time, so
//! everything other than the erased values stays byte-for-byte identical.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (clean, scan)
//! - **core**: Core functionality (locator, stripper, processor, config loading)
//! - **models**: Data structures (config, report)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{FileError, Result, VidcleanError};
