pub mod common;
pub mod editor;
pub mod format;
pub mod model;

pub use common::*;
pub use model::*;
