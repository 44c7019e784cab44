//! Static data consumed by the engine.

pub mod patterns;
pub mod regions;
pub mod rewrites;
