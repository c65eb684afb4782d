// Design Token System
// One reactive light/dark table per concern; every visual component reads
// these signals instead of deriving its own style strings.

pub mod animation;
pub mod color;
pub mod corner_radius;
pub mod opacity;
pub mod shadow;
pub mod spacing;
pub mod theme;
pub mod typography;

pub use animation::*;
pub use color::*;
pub use corner_radius::*;
pub use opacity::*;
pub use shadow::*;
pub use spacing::*;
pub use theme::*;
pub use typography::*;
