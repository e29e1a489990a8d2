pub mod common;
pub mod route_handlers;
