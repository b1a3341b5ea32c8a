//! Generation invoker: runs the external rendering script.

mod invoker;
mod subprocess;

pub use invoker::{GenerationError, GenerationOutput, Invoker, InvokerConfig};
