//! Detail panel, event list and drawer toggles, written through a
//! [`PanelSurface`].

pub mod format;
pub mod presenter;
pub mod surface;

pub use format::*;
pub use presenter::*;
pub use surface::*;
