//! Recent-earthquake feed: domain events, wire decoding and fetching.

#[cfg(not(target_arch = "wasm32"))]
pub mod client;
pub mod error;
pub mod event;
pub mod protocol;
pub mod request;

#[cfg(not(target_arch = "wasm32"))]
pub use client::*;
pub use error::*;
pub use event::*;
pub use protocol::decode_events;
pub use request::*;
