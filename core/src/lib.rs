pub mod bridge;
pub mod flow;
pub mod runner;
pub mod target;
pub mod ui;
pub mod validate;
