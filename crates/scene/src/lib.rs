pub mod camera;
pub mod components;
pub mod entity;
pub mod picking;
pub mod pointer;
pub mod prefabs;
pub mod selection;
pub mod world;

pub use world::*;
