use derive_more::Display;
use std::str::FromStr;
use thiserror::Error;

/// Which root record a buffer holds. Selected by the caller, never inferred.
#[derive(Display, PartialEq, Eq, Clone, Copy, Debug)]
pub enum RootKind {
    #[display(fmt = "MAP")]
    Map,
    #[display(fmt = "LOG")]
    Log,
}

#[derive(Error, PartialEq, Eq, Debug)]
#[error("Unknown root type {0:?}. Expected \"MAP\" or \"LOG\".")]
pub struct UnknownRootKind(pub String);

impl FromStr for RootKind {
    type Err = UnknownRootKind;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAP" => Ok(Self::Map),
            "LOG" => Ok(Self::Log),
            _ => Err(UnknownRootKind(s.to_string())),
        }
    }
}
