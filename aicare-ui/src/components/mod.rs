// Component Library

pub mod accordion;
pub mod badge;
pub mod button;
pub mod card;
pub mod icon;
pub mod input;
pub mod textarea;
pub mod typography;

pub use accordion::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use icon::*;
pub use input::*;
pub use textarea::*;
pub use typography::*;
