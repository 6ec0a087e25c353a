pub mod bun;

pub use bun::{BunDefinition, BunSource, DEFAULT_FOCUS};
