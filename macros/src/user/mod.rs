//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Kind)]` | on struct/enum | Register a type as a sequence kind |

pub mod kind;

pub use kind::expand_derive_kind;
