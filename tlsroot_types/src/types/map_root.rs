use crate::codec::{
    DecodeError, Deser, FieldSpec, FieldValues, PresentationReader, RecordBody, RootVersion,
};
use crate::project::hex_bytes;
use crate::types::{METADATA_MAX_LEN, ROOT_HASH_MAX_LEN, VERSION_FIELD};
use serde::Serialize;

/// A signed map head, as produced by a Trillian map server.
#[derive(PartialEq, Eq, Debug)]
pub enum MapRoot {
    V1(MapRootV1),
}

#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MapRootV1 {
    #[serde(serialize_with = "hex_bytes")]
    pub root_hash: Vec<u8>,
    pub timestamp_nanos: u64,
    pub revision: u64,
    #[serde(serialize_with = "hex_bytes")]
    pub metadata: Vec<u8>,
}

impl RecordBody for MapRootV1 {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::opaque("rootHash", 0, ROOT_HASH_MAX_LEN),
        FieldSpec::u64("timestampNanos"),
        FieldSpec::u64("revision"),
        FieldSpec::opaque("metadata", 0, METADATA_MAX_LEN),
    ];

    fn from_fields(vals: &mut FieldValues) -> Result<Self, DecodeError> {
        Ok(Self {
            root_hash: vals.next_opaque()?,
            timestamp_nanos: vals.next_u64()?,
            revision: vals.next_u64()?,
            metadata: vals.next_opaque()?,
        })
    }
}

impl Deser for MapRoot {
    fn deser(r: &mut PresentationReader<'_>) -> Result<Self, DecodeError> {
        match r.read_selector::<RootVersion>(VERSION_FIELD)? {
            RootVersion::V1 => Ok(Self::V1(MapRootV1::deser(r)?)),
        }
    }
}
