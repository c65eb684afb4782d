pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;
