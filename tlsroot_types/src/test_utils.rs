//! Encoders for building test buffers. Encoding is not part of the public API.

use crate::codec::{prefix_width, RootVersion, SelectorInt};
use crate::types::{LogRootV1, MapRootV1, METADATA_MAX_LEN, ROOT_HASH_MAX_LEN};

pub fn push_selector(buf: &mut Vec<u8>, int: u16) {
    buf.extend_from_slice(&int.to_be_bytes());
}

pub fn push_u64(buf: &mut Vec<u8>, int: u64) {
    buf.extend_from_slice(&int.to_be_bytes());
}

/// Pushes `len` as a prefix sized for `max`, followed by `body`.
/// `len` need not match `body`, so that malformed vectors can be built too.
pub fn push_opaque_raw(buf: &mut Vec<u8>, len: usize, body: &[u8], max: usize) {
    let width = prefix_width(max);
    let len_bytes = (len as u64).to_be_bytes();
    buf.extend_from_slice(&len_bytes[len_bytes.len() - width..]);
    buf.extend_from_slice(body);
}

pub fn push_opaque(buf: &mut Vec<u8>, body: &[u8], max: usize) {
    push_opaque_raw(buf, body.len(), body, max);
}

pub fn encode_map_root_v1(v1: &MapRootV1) -> Vec<u8> {
    let mut buf = vec![];
    push_selector(&mut buf, *SelectorInt::from(RootVersion::V1));
    push_opaque(&mut buf, &v1.root_hash, ROOT_HASH_MAX_LEN);
    push_u64(&mut buf, v1.timestamp_nanos);
    push_u64(&mut buf, v1.revision);
    push_opaque(&mut buf, &v1.metadata, METADATA_MAX_LEN);
    buf
}

pub fn encode_log_root_v1(v1: &LogRootV1) -> Vec<u8> {
    let mut buf = vec![];
    push_selector(&mut buf, *SelectorInt::from(RootVersion::V1));
    push_u64(&mut buf, v1.tree_size);
    push_opaque(&mut buf, &v1.root_hash, ROOT_HASH_MAX_LEN);
    push_u64(&mut buf, v1.timestamp_nanos);
    push_u64(&mut buf, v1.revision);
    push_opaque(&mut buf, &v1.metadata, METADATA_MAX_LEN);
    buf
}
