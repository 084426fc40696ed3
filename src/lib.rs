//! 2D geometry and separating-axis collision for games.
//!
//! Most users want `use sat2d::core::prelude::*;`.

pub mod core;
pub mod util;
