use crate::obj::cell::Cell;
use crate::obj::slice::Slice;
use crate::util::filter::{Filter, ReturnCode};
use crossbeam_skiplist::SkipMap;
use rand::Rng;
use std::cmp::Reverse;

/// Row, family, qualifier, newest version first.
pub type CellKey = (Slice, Slice, Slice, Reverse<u64>);

pub fn random_key<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    static K_TEST_CHARS: [u8; 10] = [0, 1, b'a', b'b', b'c', b'd', b'e', 0xfd, 0xfe, 0xff];
    (0..len)
        .map(|_| K_TEST_CHARS[rng.random_range(0..K_TEST_CHARS.len())])
        .collect()
}

pub fn put(table: &SkipMap<CellKey, Cell>, cell: Cell) {
    let key = (
        cell.row().clone(),
        cell.family().clone(),
        cell.qualifier().clone(),
        Reverse(cell.timestamp()),
    );
    table.insert(key, cell);
}

/// A small "order" table: customer details plus a product family on a few
/// rows, the last row carrying no product cells.
pub fn order_table() -> SkipMap<CellKey, Cell> {
    let table = SkipMap::new();
    let cells = [
        ("202309150001", "customer", "name", "Huey"),
        ("202309150001", "product", "name", "cup"),
        ("202309150002", "customer", "name", "zhangsan"),
        ("202309150002", "customer", "email", "zs@163.com"),
        ("202309150003", "customer", "name", "lisi"),
        ("202309150003", "customer", "phone", "18912345678"),
        ("202309150004", "customer", "age", "1"),
        ("202309150004", "product", "price", "12"),
        ("202309150005", "customer", "name", "wangwu"),
    ];
    for (ts, (row, family, qualifier, value)) in cells.into_iter().enumerate() {
        put(&table, Cell::new(row, family, qualifier, ts as u64 + 1, value));
    }
    table
}

/// Walks `table` in key order the way a region scanner would, keeping the
/// cells `filter` includes.
pub fn scan(table: &SkipMap<CellKey, Cell>, filter: &dyn Filter) -> Vec<Cell> {
    let mut kept = Vec::new();
    for entry in table.iter() {
        if filter.filter_all_remaining() {
            break;
        }
        match filter.filter_cell(entry.value()) {
            ReturnCode::Include => kept.push(entry.value().clone()),
            ReturnCode::Skip => continue,
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_table_is_row_ordered() {
        let table = order_table();
        assert_eq!(table.len(), 9);
        let rows: Vec<Slice> = table.iter().map(|e| e.value().row().clone()).collect();
        let mut sorted = rows.clone();
        sorted.sort();
        assert_eq!(rows, sorted);
        assert_eq!(
            table.front().unwrap().value().family().data(),
            b"customer"
        );
    }

    #[test]
    fn test_random_key_len() {
        let mut rng = rand::rng();
        for len in 0..16 {
            assert_eq!(random_key(&mut rng, len).len(), len);
        }
    }
}
