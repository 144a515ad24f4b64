pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod loader;
pub mod page;
pub mod range;
pub mod report;
pub mod server;
pub mod simulation;
pub mod structs;

pub use structs::*;
