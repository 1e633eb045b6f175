//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::GroupsView;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    GroupsView {},
}
