pub mod clean;
pub mod scan;

pub use clean::*;
pub use scan::*;
