//! Application context tying the globe scene, the event feed and the panels
//! together.

pub mod config;
pub mod context;
pub mod filter;

pub use config::*;
pub use context::*;
pub use filter::*;
