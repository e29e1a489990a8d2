use crate::codec::{
    prefix_width, DecodeError, FieldKind, FieldSpec, FieldValue, FieldValues, SelectorInt, VecLen,
};
use num_traits::FromPrimitive;
use std::mem;

/// A forward-only cursor over one encoded record.
///
/// Every read checks the remaining length first, so no read ever slices out of
/// bounds, and no vector is allocated before its length is validated.
pub struct PresentationReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> PresentationReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    fn take(&mut self, field: &'static str, len: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(DecodeError::Truncated {
                field,
                offset: self.offset,
                needed: len,
                remaining,
            });
        }
        let chunk = &self.buf[self.offset..self.offset + len];
        self.offset += len;
        Ok(chunk)
    }

    fn take_array<const LEN: usize>(&mut self, field: &'static str) -> Result<[u8; LEN], DecodeError> {
        let mut arr = [0u8; LEN];
        arr.copy_from_slice(self.take(field, LEN)?);
        Ok(arr)
    }

    pub fn read_u16(&mut self, field: &'static str) -> Result<u16, DecodeError> {
        let buf = self.take_array::<{ mem::size_of::<u16>() }>(field)?;
        Ok(u16::from_be_bytes(buf))
    }

    pub fn read_u64(&mut self, field: &'static str) -> Result<u64, DecodeError> {
        let buf = self.take_array::<{ mem::size_of::<u64>() }>(field)?;
        Ok(u64::from_be_bytes(buf))
    }

    pub fn read_opaque(
        &mut self,
        field: &'static str,
        min: usize,
        max: usize,
    ) -> Result<Vec<u8>, DecodeError> {
        /* length prefix */
        let prefix_offset = self.offset;
        let prefix = self.take(field, prefix_width(max))?;
        let len = VecLen::from_be_prefix(prefix);
        if *len < min || *len > max {
            return Err(DecodeError::LengthOutOfBounds {
                field,
                offset: prefix_offset,
                len: *len,
                min,
                max,
            });
        }

        /* body */
        let body = self.take(field, *len)?;
        Ok(body.to_vec())
    }

    /// Reads a `u16` union selector and maps it onto a declared variant.
    pub fn read_selector<E: FromPrimitive>(&mut self, field: &'static str) -> Result<E, DecodeError> {
        let offset = self.offset;
        let int = SelectorInt::from(self.read_u16(field)?);
        E::from_u16(*int).ok_or(DecodeError::UnrecognizedVariant {
            field,
            offset,
            value: *int,
        })
    }

    pub fn read_field(&mut self, spec: &FieldSpec) -> Result<FieldValue, DecodeError> {
        match spec.kind {
            FieldKind::U64 => self.read_u64(spec.name).map(FieldValue::U64),
            FieldKind::Opaque { min, max } => {
                self.read_opaque(spec.name, min, max).map(FieldValue::Opaque)
            }
        }
    }

    pub fn read_fields(&mut self, specs: &[FieldSpec]) -> Result<FieldValues, DecodeError> {
        let mut vals = FieldValues::with_capacity(specs.len());
        for spec in specs {
            let val = self.read_field(spec)?;
            vals.push(spec.name, val);
        }
        Ok(vals)
    }

    /// Consumes the reader, erring if any byte was left unread.
    pub fn finish(self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(DecodeError::TrailingData {
                offset: self.offset,
                remaining,
            }),
        }
    }
}
