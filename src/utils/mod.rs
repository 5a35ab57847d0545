mod maths_utils;
mod perf;

/// Monotonic clock that also works on wasm32.
pub use web_time::Instant as AppInstant;

pub(crate) use maths_utils::{normalize_max, remap};
