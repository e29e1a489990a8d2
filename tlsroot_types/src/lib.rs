pub mod codec;
pub mod project;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use project::{decode_to_json, project};
pub use types::{decode, Root, RootKind};
