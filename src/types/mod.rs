// Treemark shared type definitions
// Each submodule defines types used across the engine and the store.

pub mod errors;
pub mod export;
pub mod node;
