pub mod frame;
pub mod viewport;

pub use frame::*;
pub use viewport::*;
