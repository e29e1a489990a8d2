pub mod http_utils;
pub mod server;
