use crate::obj::slice::Slice;

/// One versioned value addressed by row, family and qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: Slice,
    family: Slice,
    qualifier: Slice,
    timestamp: u64,
    value: Slice,
}

impl Cell {
    pub fn new(
        row: impl Into<Slice>,
        family: impl Into<Slice>,
        qualifier: impl Into<Slice>,
        timestamp: u64,
        value: impl Into<Slice>,
    ) -> Cell {
        Cell {
            row: row.into(),
            family: family.into(),
            qualifier: qualifier.into(),
            timestamp,
            value: value.into(),
        }
    }

    pub fn row(&self) -> &Slice {
        &self.row
    }

    pub fn family(&self) -> &Slice {
        &self.family
    }

    pub fn qualifier(&self) -> &Slice {
        &self.qualifier
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn value(&self) -> &Slice {
        &self.value
    }
}
