pub mod config;
pub mod method;
pub mod policy;

pub use config::{AutoMethod, ThresholdMode, ThresholdPolicy};
pub use method::AutoThreshold;
pub use policy::{resolve_pair, resolve_threshold};
