//! # Presentation format
//!
//! Records are decoded field by field, in declared order, from one byte buffer.
//! Every integer is unsigned and big-endian.
//!
//! A byte vector (an `opaque` vector in the TLS presentation language) declares
//! `[min, max]` length bounds. Its length prefix is as wide as the fewest bytes
//! that can hold `max`; e.g. `max == 128` takes a `u8` prefix, and
//! `max == 65535` takes a `u16` prefix.
//!
//! A union starts with a `u16` selector, which picks the variant body that follows.
//! There is no fallback variant.
//!
//! A buffer must hold exactly one record. Bytes left over are rejected.
//!
//! The below pseudocode depicts the two supported records.
//!
//! ```text
//! struct MapRoot {
//!     version:                u16,    // == 1
//!     v1:                     MapRootV1 {
//!         root_hash_len:          u8,
//!         root_hash:              [u8; root_hash_len],    // root_hash_len <= 128
//!         timestamp_nanos:        u64,
//!         revision:               u64,
//!         metadata_len:           u16,
//!         metadata:               [u8; metadata_len],     // metadata_len <= 65535
//!     },
//! }
//!
//! struct LogRoot {
//!     version:                u16,    // == 1
//!     v1:                     LogRootV1 {
//!         tree_size:              u64,
//!         root_hash_len:          u8,
//!         root_hash:              [u8; root_hash_len],
//!         timestamp_nanos:        u64,
//!         revision:               u64,
//!         metadata_len:           u16,
//!         metadata:               [u8; metadata_len],
//!     },
//! }
//! ```

mod deser;
mod error;
mod lengths;
mod reader;
mod schema;
mod selector;

pub use deser::*;
pub use error::*;
pub use lengths::*;
pub use reader::*;
pub use schema::*;
pub use selector::*;
