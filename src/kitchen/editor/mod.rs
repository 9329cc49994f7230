pub mod add_ingredient;
pub mod app;
pub mod create;
pub mod detail;
pub mod pantry;
pub mod results;
pub mod session;
pub mod style;
