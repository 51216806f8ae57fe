pub mod floating_point;
pub mod lerp;
pub mod trigonometry;

pub use floating_point::*;
pub use lerp::*;
pub use trigonometry::*;
