//! CLI module graph.

pub mod check;
pub mod command;
mod dispatch;
pub mod serve;

pub use dispatch::dispatch;
