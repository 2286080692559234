//! Service Layer
//!
//! `CircuitKeeper` orchestrates the domain rules over the injected store and
//! address codec.

pub mod keeper;

pub use keeper::CircuitKeeper;
