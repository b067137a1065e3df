//! Command implementations

mod serve;
mod version;

pub use serve::{load_config, serve};
pub use version::version;
