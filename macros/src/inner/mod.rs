//! Code generators used by `tola-seq` itself.

pub mod kind_stream;
pub mod nat;
pub mod tuples;
