use thiserror::Error;

/// Errors from checked trampoline generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrampolineError {
    /// The signature has more parameters than the largest trampoline variant
    /// accepts.
    #[error("`{name}` takes {count} parameters, trampolines accept at most {ceiling}")]
    ArityExceeded {
        name: String,
        count: usize,
        ceiling: usize,
    },
}
