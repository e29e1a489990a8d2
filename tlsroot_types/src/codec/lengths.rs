use derive_more::Deref;

/// The width in bytes of the length prefix of a vector whose length may reach `max`.
pub const fn prefix_width(max: usize) -> usize {
    let mut width = 1;
    let mut rest = max >> 8;
    while rest > 0 {
        width += 1;
        rest >>= 8;
    }
    width
}

/// A vector length, as stated by its prefix. Not yet checked against any bound.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct VecLen(usize);
impl VecLen {
    /// `prefix` must be no wider than `usize`, which holds for any prefix
    /// derived by [`prefix_width`].
    pub fn from_be_prefix(prefix: &[u8]) -> Self {
        let len = prefix
            .iter()
            .fold(0usize, |acc, byte| (acc << 8) | *byte as usize);
        Self(len)
    }
}
