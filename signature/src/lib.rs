pub mod ident;
pub mod model;
pub mod shape;

pub use ident::{sanitize_generated, sanitize_native, Vocabulary};
pub use model::{Function, NativeType, Overload, Parameter, WordType};
pub use shape::{CallShape, SignatureRef};
