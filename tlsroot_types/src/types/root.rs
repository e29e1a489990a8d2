use crate::codec::{DecodeError, Deser};
use crate::types::{LogRoot, MapRoot, RootKind};
use derive_more::From;

#[derive(From, PartialEq, Eq, Debug)]
pub enum Root {
    Map(MapRoot),
    Log(LogRoot),
}

impl Root {
    pub fn kind(&self) -> RootKind {
        match self {
            Self::Map(_) => RootKind::Map,
            Self::Log(_) => RootKind::Log,
        }
    }
}

/// Decodes `bytes` as exactly one root of the given kind.
pub fn decode(kind: RootKind, bytes: &[u8]) -> Result<Root, DecodeError> {
    match kind {
        RootKind::Map => MapRoot::deser_solo(bytes).map(Root::from),
        RootKind::Log => LogRoot::deser_solo(bytes).map(Root::from),
    }
}
