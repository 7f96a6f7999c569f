//! Length-framed wire form of a filter: `name` and `payload`, each a
//! varint32 length followed by that many bytes.
//!
//! A filter's own payload may carry no framing at all (the family prefix
//! filter's payload is just the prefix), so the envelope is what lets a
//! receiver tell a truncated or concatenated stream from a longer payload.

use crate::filter::registry::FilterRegistry;
use crate::obj::options::CodecOptions;
use crate::obj::slice::Slice;
use crate::obj::status_rs::Status;
use crate::util::coding::{get_length_prefixed_slice, put_length_prefixed_slice, varint_length};
use crate::util::filter::Filter;
use bytes::{Bytes, BytesMut};
use std::sync::Arc;
use tracing::{debug, warn};

/// Frames `filter` for shipping. Fails with `InvalidArgument` when the name
/// or payload is longer than `options` allows.
pub fn encode_filter(filter: &dyn Filter, options: &CodecOptions) -> Result<Bytes, Status> {
    let name = filter.name().as_bytes();
    if name.len() > options.max_name_len {
        return Err(Status::invalid_argument(
            filter.name(),
            Some("name exceeds max_name_len"),
        ));
    }
    let payload = filter.to_byte_array();
    if payload.len() > options.max_payload_len {
        return Err(Status::invalid_argument(
            filter.name(),
            Some("payload exceeds max_payload_len"),
        ));
    }
    let mut dst = BytesMut::with_capacity(
        varint_length(name.len() as u64)
            + name.len()
            + varint_length(payload.len() as u64)
            + payload.len(),
    );
    put_length_prefixed_slice(&mut dst, name)?;
    put_length_prefixed_slice(&mut dst, &payload)?;
    Ok(dst.freeze())
}

fn malformed(reason: &str) -> Status {
    warn!(reason, "rejected filter envelope");
    Status::malformed_payload("filter envelope", Some(reason))
}

pub fn decode_filter(
    registry: &FilterRegistry,
    options: &CodecOptions,
    input: &Slice,
) -> Result<Arc<dyn Filter>, Status> {
    let mut input = input.clone();

    let name = get_length_prefixed_slice(&mut input).ok_or_else(|| malformed("truncated name"))?;
    if name.len() > options.max_name_len {
        return Err(malformed("name exceeds max_name_len"));
    }
    let name = std::str::from_utf8(name.data()).map_err(|_| malformed("name is not utf-8"))?;

    let payload =
        get_length_prefixed_slice(&mut input).ok_or_else(|| malformed("truncated payload"))?;
    if payload.len() > options.max_payload_len {
        return Err(malformed("payload exceeds max_payload_len"));
    }
    if !input.is_empty() {
        return Err(malformed("trailing bytes after payload"));
    }

    debug!(name, payload_len = payload.len(), "decoding filter");
    registry.parse(name, &payload)
}
