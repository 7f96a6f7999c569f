pub mod filter;
pub mod obj;
pub mod util;

pub use filter::envelope::{decode_filter, encode_filter};
pub use filter::family_prefix_filter::FamilyPrefixFilter;
pub use filter::registry::{default_registry, FilterRegistry};
pub use obj::cell::Cell;
pub use obj::options::CodecOptions;
pub use obj::slice::Slice;
pub use obj::status_rs::{Status, StatusCode};
pub use util::filter::{Filter, ParseFn, ReturnCode};
