//! Group management components.

pub mod edit_group_form;

pub use edit_group_form::*;
