//! Command implementations for the Tend CLI

mod core;
mod recommend;
mod serve;
mod todos;

pub use core::*;
pub use recommend::*;
pub use serve::*;
pub use todos::*;
