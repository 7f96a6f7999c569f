use bytes::{Buf, Bytes, BytesMut};
use std::cmp::min;
use std::fmt;

/// An immutable, cheaply clonable view over a run of bytes.
///
/// Cloning a `Slice` bumps a reference count on the underlying `Bytes`
/// buffer, so a cell or a filter can hand its components out without
/// copying them.
#[derive(Clone, Eq, Hash, PartialEq, PartialOrd, Ord, Default)]
pub struct Slice {
    pub(crate) data_bytes: Bytes,
}

impl Slice {
    pub fn new(data: Bytes) -> Self {
        Slice { data_bytes: data }
    }

    pub fn empty() -> Self {
        Slice {
            data_bytes: Bytes::new(),
        }
    }

    pub fn new_from_mut(data: &BytesMut) -> Self {
        Slice {
            data_bytes: Bytes::copy_from_slice(&data[..]),
        }
    }

    pub fn new_from_vec(data: Vec<u8>) -> Self {
        Slice {
            data_bytes: Bytes::from(data),
        }
    }

    pub fn new_from_array(data: &[u8]) -> Self {
        Slice {
            data_bytes: Bytes::copy_from_slice(data),
        }
    }

    pub fn new_from_str(data: &str) -> Self {
        Slice {
            data_bytes: Bytes::copy_from_slice(data.as_bytes()),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data_bytes
    }

    /// Hands out the backing buffer without copying.
    pub fn to_bytes(&self) -> Bytes {
        self.data_bytes.clone()
    }

    pub fn len(&self) -> usize {
        self.data_bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_bytes.is_empty()
    }

    /// Drops the first `n` bytes. `n` must not exceed `len()`.
    pub(crate) fn remove_prefix(&mut self, n: usize) {
        assert!(n <= self.len(), "remove_prefix: n is out of range");
        self.data_bytes.advance(n);
    }

    /// The first `n` bytes, clamped to the slice length.
    pub fn slice(&self, n: usize) -> Slice {
        let data_bytes = self.data_bytes.slice(..min(n, self.len()));
        Slice { data_bytes }
    }
}

impl AsRef<[u8]> for Slice {
    fn as_ref(&self) -> &[u8] {
        &self.data_bytes
    }
}

impl fmt::Debug for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data_bytes)
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.data_bytes))
    }
}

impl From<&str> for Slice {
    fn from(s: &str) -> Self {
        Slice::new_from_str(s)
    }
}

impl From<&[u8]> for Slice {
    fn from(s: &[u8]) -> Self {
        Slice::new_from_array(s)
    }
}

impl From<Vec<u8>> for Slice {
    fn from(v: Vec<u8>) -> Self {
        Slice::new_from_vec(v)
    }
}

impl From<Bytes> for Slice {
    fn from(b: Bytes) -> Self {
        Slice::new(b)
    }
}

impl From<&BytesMut> for Slice {
    fn from(s: &BytesMut) -> Self {
        Slice::new_from_mut(s)
    }
}
