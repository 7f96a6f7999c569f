use crate::obj::cell::Cell;
use crate::obj::slice::Slice;
use crate::obj::status_rs::Status;
use crate::util::filter::{Filter, ReturnCode};
use bytes::Bytes;
use std::sync::Arc;
use tracing::trace;

pub const FAMILY_PREFIX_FILTER_NAME: &str = "cellfilter.FamilyPrefixFilter";

/// Keeps cells whose column family starts with `prefix`.
///
/// The wire payload is the prefix itself, with no framing of its own. Ship
/// it inside an envelope (see `filter::envelope`) when the transport does
/// not delimit payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyPrefixFilter {
    prefix: Slice,
}

impl FamilyPrefixFilter {
    pub fn new(prefix: impl Into<Slice>) -> FamilyPrefixFilter {
        FamilyPrefixFilter {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &Slice {
        &self.prefix
    }

    /// `Include` iff `family` begins with the prefix, bytewise. An empty
    /// prefix includes every family.
    #[inline]
    pub fn evaluate(&self, family: &[u8]) -> ReturnCode {
        if family.starts_with(self.prefix.data()) {
            ReturnCode::Include
        } else {
            ReturnCode::Skip
        }
    }

    pub fn serialize(&self) -> Bytes {
        self.prefix.to_bytes()
    }

    /// Every byte sequence is a valid prefix, so this never returns
    /// `MalformedPayload`.
    pub fn deserialize(payload: &Slice) -> Result<FamilyPrefixFilter, Status> {
        trace!(len = payload.len(), "parsed family prefix filter");
        Ok(FamilyPrefixFilter::new(payload.clone()))
    }

    pub(crate) fn parse_from(payload: &Slice) -> Result<Arc<dyn Filter>, Status> {
        Ok(Arc::new(FamilyPrefixFilter::deserialize(payload)?))
    }
}

impl Filter for FamilyPrefixFilter {
    fn name(&self) -> &'static str {
        FAMILY_PREFIX_FILTER_NAME
    }

    fn filter_cell(&self, cell: &Cell) -> ReturnCode {
        self.evaluate(cell.family().data())
    }

    fn to_byte_array(&self) -> Bytes {
        self.serialize()
    }
}
