use crate::codec::DecodeError;
use std::collections::VecDeque;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FieldKind {
    U64,
    Opaque { min: usize, max: usize },
}

/// One entry of a record body's ordered field list.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}
impl FieldSpec {
    pub const fn u64(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::U64,
        }
    }
    pub const fn opaque(name: &'static str, min: usize, max: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Opaque { min, max },
        }
    }
}

#[derive(PartialEq, Eq, Debug)]
pub enum FieldValue {
    U64(u64),
    Opaque(Vec<u8>),
}

/// Decoded values of one record body, handed out in declared order.
#[derive(Debug)]
pub struct FieldValues(VecDeque<(&'static str, FieldValue)>);
impl FieldValues {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self(VecDeque::with_capacity(cap))
    }
    pub(crate) fn push(&mut self, name: &'static str, val: FieldValue) {
        self.0.push_back((name, val));
    }

    pub fn next_u64(&mut self) -> Result<u64, DecodeError> {
        match self.0.pop_front() {
            Some((_, FieldValue::U64(int))) => Ok(int),
            other => Err(Self::mismatch(other, "u64")),
        }
    }

    pub fn next_opaque(&mut self) -> Result<Vec<u8>, DecodeError> {
        match self.0.pop_front() {
            Some((_, FieldValue::Opaque(bytes))) => Ok(bytes),
            other => Err(Self::mismatch(other, "opaque vector")),
        }
    }

    /// Errs if any value was left unclaimed by the record body.
    pub fn finish(mut self) -> Result<(), DecodeError> {
        match self.0.pop_front() {
            None => Ok(()),
            Some((field, _)) => Err(DecodeError::SchemaMismatch {
                field,
                expected: "claimed field",
            }),
        }
    }

    fn mismatch(popped: Option<(&'static str, FieldValue)>, expected: &'static str) -> DecodeError {
        let field = popped.map_or("<end of schema>", |(name, _)| name);
        DecodeError::SchemaMismatch { field, expected }
    }
}

/// A record body laid out as a flat, ordered list of fields.
pub trait RecordBody: Sized {
    const SCHEMA: &'static [FieldSpec];

    /// Builds the record from values decoded per [`Self::SCHEMA`].
    fn from_fields(vals: &mut FieldValues) -> Result<Self, DecodeError>;
}
