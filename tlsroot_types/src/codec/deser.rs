use crate::codec::{DecodeError, PresentationReader, RecordBody};

pub trait Deser: Sized {
    fn deser(r: &mut PresentationReader<'_>) -> Result<Self, DecodeError>;

    /// Decodes the whole of `buf` as one `Self`. Leftover bytes are an error.
    fn deser_solo(buf: &[u8]) -> Result<Self, DecodeError> {
        let mut r = PresentationReader::new(buf);
        let moi = Self::deser(&mut r)?;
        r.finish()?;
        Ok(moi)
    }
}

/* Blanket impl for flat record bodies */
impl<T> Deser for T
where
    T: RecordBody,
{
    fn deser(r: &mut PresentationReader<'_>) -> Result<Self, DecodeError> {
        let mut vals = r.read_fields(T::SCHEMA)?;
        let moi = T::from_fields(&mut vals)?;
        vals.finish()?;
        Ok(moi)
    }
}
