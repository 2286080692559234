//! Adapters Layer
//!
//! - `InMemoryCircuitStore`: `CircuitStore` over in-process maps
//! - `HexAddressCodec`: fixed-length hex addresses

pub mod hex_codec;
pub mod memory_store;

pub use hex_codec::HexAddressCodec;
pub use memory_store::InMemoryCircuitStore;
