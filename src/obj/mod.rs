pub mod cell;
pub mod options;
pub mod slice;
pub mod status_rs;
