//! View components for the application.

pub mod groups_view;

pub use groups_view::{GroupList, GroupsView};
