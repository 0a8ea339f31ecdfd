//! Test utilities: data factories and in-memory repository mocks.

mod app_state_builder;
mod factories;
mod repo_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use repo_mocks::*;
