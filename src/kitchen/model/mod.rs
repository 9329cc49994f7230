pub mod catalog;
pub mod ingredient;
pub mod recipe;
pub mod seed;
#[cfg_attr(not(test), allow(dead_code))]
pub mod shared;

pub use catalog::*;
pub use ingredient::*;
pub use recipe::*;
pub use seed::*;
pub use shared::*;
