#![allow(clippy::needless_range_loop)]

pub mod animation;
mod bounding_box;
pub mod deduce;
mod error;
pub mod geometry;
mod misc;
pub mod parameter;
pub mod synthesize;

#[cfg(test)]
mod fixtures;

pub mod prelude {
    pub use crate::animation::*;
    pub use crate::bounding_box::*;
    pub use crate::deduce::*;
    pub use crate::error::*;
    pub use crate::geometry::wireframe::*;
    pub use crate::geometry::*;
    pub use crate::misc::*;
    pub use crate::parameter::*;
    pub use crate::synthesize::*;
}
