//! Service layer - router assembly and middleware

pub mod http;

pub use http::{build_app, build_router};
