pub mod envelope;
pub mod family_prefix_filter;
pub mod registry;
