pub mod not_found;
pub mod tracker;

use dioxus::prelude::*;

use not_found::NotFound;
use tracker::Tracker;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Tracker {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
