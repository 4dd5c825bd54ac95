//! # Layer 0: Primitives
//!
//! Basic building blocks for the sequence algebra:
//! - `bool.rs`: Type-level boolean logic (True/False).
//! - `nat.rs`: Peano naturals, used as counts and indices.
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Hash streams naming kinds.

pub mod bool;
pub mod const_utils;
pub mod nat;
pub mod nibble;
pub mod stream;

// Re-export key types at this level
pub use bool::{Bool, BoolOf, False, If, SelectBool, True};
pub use nat::{AddNat, MulNat, Nat, Num, S, ToNat, Z};
pub use nibble::{Nibble, NibbleEq, SelectNibble};
pub use stream::{HashStream, HashStream16, StreamEq};
