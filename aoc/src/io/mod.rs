//! Input acquisition and sample configuration.

pub mod mapped;
pub mod sample;
pub mod source;
