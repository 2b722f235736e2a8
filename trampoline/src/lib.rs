//! Call expressions for native functions dispatched through a fixed-arity
//! trampoline family (`Syscall`, `Syscall6`, ... `Syscall18`).
//!
//! Generation is a pure projection of a [`signature::CallShape`]; nothing here
//! performs I/O or keeps state between calls.

pub mod emit;
pub mod error;
pub mod family;

pub use emit::{call_expression, checked_call_expression, is_representable, Trampoline, TrampolineCall};
pub use error::TrampolineError;
pub use family::{padded_len, variant_suffix, ARITY_CEILING};
