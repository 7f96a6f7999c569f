use crate::filter::family_prefix_filter::{FamilyPrefixFilter, FAMILY_PREFIX_FILTER_NAME};
use crate::obj::slice::Slice;
use crate::obj::status_rs::Status;
use crate::util::filter::{Filter, ParseFn};
use ahash::AHashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

static DEFAULT_REGISTRY: OnceLock<FilterRegistry> = OnceLock::new();

/// Maps a filter type tag to the function that rebuilds it from bytes.
#[derive(Default)]
pub struct FilterRegistry {
    parsers: AHashMap<&'static str, ParseFn>,
}

impl FilterRegistry {
    pub fn new() -> FilterRegistry {
        FilterRegistry {
            parsers: AHashMap::new(),
        }
    }

    pub fn with_builtin_filters() -> FilterRegistry {
        let mut registry = FilterRegistry::new();
        registry.register(FAMILY_PREFIX_FILTER_NAME, FamilyPrefixFilter::parse_from);
        registry
    }

    /// Later registrations under the same name replace earlier ones.
    pub fn register(&mut self, name: &'static str, parse: ParseFn) {
        if self.parsers.insert(name, parse).is_some() {
            debug!(name, "replaced filter parse function");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    pub fn parse(&self, name: &str, payload: &Slice) -> Result<Arc<dyn Filter>, Status> {
        match self.parsers.get(name) {
            Some(parse) => parse(payload),
            None => Err(Status::not_found(name, Some("no filter registered under this name"))),
        }
    }
}

/// Process-wide registry holding the builtin filters.
pub fn default_registry() -> &'static FilterRegistry {
    DEFAULT_REGISTRY.get_or_init(FilterRegistry::with_builtin_filters)
}
