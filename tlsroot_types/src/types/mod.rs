mod kind;

mod log_root;
mod map_root;

mod root;

pub use kind::*;

pub use log_root::*;
pub use map_root::*;

pub use root::*;

/// Name of the union selector field, in both root kinds.
pub const VERSION_FIELD: &str = "version";

/// Upper bound of `rootHash` lengths.
pub const ROOT_HASH_MAX_LEN: usize = 128;
/// Upper bound of `metadata` lengths.
pub const METADATA_MAX_LEN: usize = 65535;
