pub mod common;
pub mod credits;
pub mod image;

pub use common::*;
pub use credits::*;
pub use image::*;
