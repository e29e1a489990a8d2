use std::env;

pub const ENV_VAR_BIND_ADDR: &str = "TLSROOT_BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8082";

pub fn bind_addr() -> String {
    env::var(ENV_VAR_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}
