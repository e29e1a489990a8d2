//! JSON projection of decoded roots.
//!
//! A root projects as `{"version": <selector>, "v1": {<variant fields>}}`.
//! Field names are camelCase. Byte vectors project as lowercase hex strings,
//! and `u64`s as JSON numbers.

use crate::codec::{RootVersion, SelectorInt};
use crate::types::{decode, LogRoot, MapRoot, Root, RootKind};
use anyhow::Result;
use serde::{Serialize, Serializer};

pub fn hex_bytes<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&hex::encode(bytes))
}

#[derive(Serialize)]
struct VersionedV1<'a, V: Serialize> {
    version: u16,
    v1: &'a V,
}
impl<'a, V: Serialize> VersionedV1<'a, V> {
    fn new(v1: &'a V) -> Self {
        let version = *SelectorInt::from(RootVersion::V1);
        Self { version, v1 }
    }
}

impl Serialize for MapRoot {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::V1(v1) => VersionedV1::new(v1).serialize(s),
        }
    }
}

impl Serialize for LogRoot {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::V1(v1) => VersionedV1::new(v1).serialize(s),
        }
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Map(map_root) => map_root.serialize(s),
            Self::Log(log_root) => log_root.serialize(s),
        }
    }
}

pub fn project(root: &Root) -> Result<Vec<u8>> {
    let json = serde_json::to_vec(root)?;
    Ok(json)
}

/// Decodes, then projects. Decode failures surface as a [`crate::codec::DecodeError`]
/// inside the returned error.
pub fn decode_to_json(kind: RootKind, bytes: &[u8]) -> Result<Vec<u8>> {
    let root = decode(kind, bytes)?;
    project(&root)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::DecodeError;
    use crate::test_utils::{encode_log_root_v1, encode_map_root_v1};
    use crate::types::{LogRootV1, MapRootV1};
    use serde_json::{json, Value};

    #[test]
    fn map_root_json() -> Result<()> {
        let buf = encode_map_root_v1(&MapRootV1 {
            root_hash: vec![0x01, 0x02],
            timestamp_nanos: 1000,
            revision: 1,
            metadata: vec![],
        });
        let json = decode_to_json(RootKind::Map, &buf)?;
        let json: Value = serde_json::from_slice(&json)?;
        assert_eq!(
            json!({
                "version": 1,
                "v1": {
                    "rootHash": "0102",
                    "timestampNanos": 1000,
                    "revision": 1,
                    "metadata": "",
                },
            }),
            json
        );
        Ok(())
    }

    #[test]
    fn log_root_json_keeps_u64_precision() -> Result<()> {
        let v1 = LogRootV1 {
            tree_size: u64::MAX,
            root_hash: vec![0xde, 0xad, 0xbe, 0xef],
            timestamp_nanos: 1546969273377673700,
            revision: u64::MAX - 1,
            metadata: vec![0x0a],
        };
        let json = project(&Root::Log(LogRoot::V1(v1.clone())))?;
        let json: Value = serde_json::from_slice(&json)?;

        assert_eq!(Some(1), json["version"].as_u64());
        let body = &json["v1"];
        assert_eq!(Some(v1.tree_size), body["treeSize"].as_u64());
        assert_eq!(Some("deadbeef"), body["rootHash"].as_str());
        assert_eq!(Some(v1.timestamp_nanos), body["timestampNanos"].as_u64());
        assert_eq!(Some(v1.revision), body["revision"].as_u64());
        assert_eq!(Some("0a"), body["metadata"].as_str());
        assert_eq!(Some(5), body.as_object().map(|obj| obj.len()));

        let buf = encode_log_root_v1(&v1);
        let decoded: Value = serde_json::from_slice(&decode_to_json(RootKind::Log, &buf)?)?;
        assert_eq!(json, decoded);
        Ok(())
    }

    #[test]
    fn decode_error_is_preserved() {
        let res = decode_to_json(RootKind::Map, &[0x00, 0x02]);
        let err = res.err().and_then(|e| e.downcast::<DecodeError>().ok());
        assert_eq!(
            Some(DecodeError::UnrecognizedVariant {
                field: "version",
                offset: 0,
                value: 2,
            }),
            err
        );
    }
}
