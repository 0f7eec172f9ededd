//! REST API endpoint implementations.

mod appmaker;
mod auth;
mod request;

pub(crate) use appmaker::URI_DOWNLOADAPP;
pub use appmaker::{fetch_app, index_time_spec, make_app, routine_identifier};
pub use auth::{login, logout};
pub use request::send_request;
