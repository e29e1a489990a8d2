use derive_more::{Deref, From};
use num_derive::FromPrimitive;

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct SelectorInt(u16);
impl From<RootVersion> for SelectorInt {
    fn from(version: RootVersion) -> Self {
        Self(version as u16)
    }
}

/// The `version` selector shared by map roots and log roots.
///
/// Selector integers are mapped manually, so that a stored encoding never
/// depends on declaration order. An integer with no member here is an
/// unrecognized variant.
#[repr(u16)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum RootVersion {
    V1 = 1,
}
