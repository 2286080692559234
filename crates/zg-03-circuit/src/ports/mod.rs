//! Ports Layer
//!
//! Driven ports the keeper depends on:
//! - `CircuitStore` - persistent permissions and disabled list
//! - `AddressCodec` - address string ⇄ bytes

pub mod codec;
pub mod store;

pub use codec::AddressCodec;
pub use store::CircuitStore;
