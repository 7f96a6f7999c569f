use crate::obj::slice::Slice;
use crate::obj::status_rs::Status;
use bytes::{BufMut, BytesMut};

#[inline]
fn encode_varint32(dst: &mut [u8; 5], mut v: u32) -> &[u8] {
    const B: u32 = 128;
    let mut pos: usize = 0;
    while v >= B {
        dst[pos] = (v | B) as u8;
        pos += 1;
        v >>= 7;
    }
    dst[pos] = v as u8;
    pos += 1;
    &dst[..pos]
}

pub fn put_varint32(dst: &mut BytesMut, v: u32) {
    let mut buf: [u8; 5] = [0; 5];
    let append = encode_varint32(&mut buf, v);
    dst.put_slice(append);
}

/// A slice length as a varint32 prefix. Lengths past `u32::MAX` cannot be
/// framed.
fn length_prefix(len: usize) -> Result<u32, Status> {
    u32::try_from(len).map_err(|_| {
        Status::invalid_argument("length prefix", Some("slice longer than u32::MAX bytes"))
    })
}

pub fn put_length_prefixed_slice(dst: &mut BytesMut, value: &[u8]) -> Result<(), Status> {
    put_varint32(dst, length_prefix(value.len())?);
    dst.put_slice(value);
    Ok(())
}

pub fn varint_length(mut v: u64) -> usize {
    let mut len = 1usize;
    while v >= 128 {
        v >>= 7;
        len += 1;
    }
    len
}

/// Decodes a varint32 from the front of `ptr`, returning the value and the
/// number of bytes it occupied. `None` when the input ends mid-varint or the
/// encoding runs past five bytes.
#[inline]
pub fn get_varint32ptr(ptr: &[u8]) -> Option<(u32, usize)> {
    let mut result = 0u32;
    let mut shift = 0u32;
    let mut pos = 0usize;
    while shift <= 28 && pos < ptr.len() {
        let byte = ptr[pos] as u32;
        pos += 1;
        if byte & 128 > 0 {
            result |= (byte & 127) << shift;
        } else {
            result |= byte << shift;
            return Some((result, pos));
        }
        shift += 7;
    }
    None
}

/// Consumes a varint32 from the front of `input`. On failure `input` is left
/// untouched.
pub fn get_varint32(input: &mut Slice) -> Option<u32> {
    let (value, used) = get_varint32ptr(input.data())?;
    input.remove_prefix(used);
    Some(value)
}

/// Consumes a length-prefixed slice from the front of `input`. On failure
/// `input` may have lost its length prefix.
pub fn get_length_prefixed_slice(input: &mut Slice) -> Option<Slice> {
    let len = get_varint32(input)? as usize;
    if input.len() < len {
        return None;
    }
    let result = input.slice(len);
    input.remove_prefix(len);
    Some(result)
}
