//! UI primitives (Button, inputs, ToggleGroup, etc.)

pub mod button;
pub mod error_banner;
pub mod input;
pub mod modal;
pub mod toggle_group;

pub use button::*;
pub use error_banner::*;
pub use input::*;
pub use modal::*;
pub use toggle_group::*;
