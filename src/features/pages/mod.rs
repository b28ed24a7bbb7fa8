//! Server-rendered HTML pages.

pub mod handlers;
pub mod routes;
