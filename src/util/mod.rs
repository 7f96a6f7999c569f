pub mod coding;
pub mod filter;
#[cfg(test)]
pub(crate) mod test_util;
