//! Request extractors and layers shared by the handlers.

pub mod latency;
pub mod payload;
