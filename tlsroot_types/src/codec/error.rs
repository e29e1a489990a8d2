use thiserror::Error;

/// Every way a byte buffer can fail to decode.
///
/// Offsets are counted from the start of the buffer handed to the decoder.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum DecodeError {
    #[error(
        "Truncated input while reading `{field}` at offset {offset}: \
         needed {needed} bytes, {remaining} remain."
    )]
    Truncated {
        field: &'static str,
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Length {len} of `{field}` at offset {offset} is outside [{min}, {max}].")]
    LengthOutOfBounds {
        field: &'static str,
        offset: usize,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("Unrecognized variant {value} of selector `{field}` at offset {offset}.")]
    UnrecognizedVariant {
        field: &'static str,
        offset: usize,
        value: u16,
    },

    #[error("{remaining} trailing bytes after the record, starting at offset {offset}.")]
    TrailingData { offset: usize, remaining: usize },

    /// A record body asked for a field its schema does not provide.
    #[error("Field `{field}` is not a decoded {expected}.")]
    SchemaMismatch {
        field: &'static str,
        expected: &'static str,
    },
}
