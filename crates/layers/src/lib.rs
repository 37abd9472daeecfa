pub mod markers;
pub mod pick;
pub mod symbology;

pub use markers::*;
pub use pick::*;
