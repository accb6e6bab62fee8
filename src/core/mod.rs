pub mod config;
pub mod locator;
pub mod processor;
pub mod stripper;

pub use config::*;
pub use locator::*;
pub use processor::*;
pub use stripper::*;
