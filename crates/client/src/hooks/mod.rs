//! Data hooks for groups and servers.

pub mod refreshable_resource;
pub mod use_group_data;
pub mod use_server_data;

pub use refreshable_resource::*;
pub use use_group_data::*;
pub use use_server_data::*;
