//! Metadata reshaping between the console's table descriptors and the exported document.

pub mod export;
pub mod transform;

pub use export::*;
pub use transform::*;
