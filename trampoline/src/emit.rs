use std::fmt;

use signature::{CallShape, Parameter};

use crate::error::TrampolineError;
use crate::family::{fits, padded_len, variant_suffix, ARITY_CEILING};

/// Spelling of one trampoline family.
///
/// The default spells calls as `Syscall6(gpName, n, ...)`. Use
/// [`Trampoline::with_base`] for a package-qualified family such as
/// `syscall.Syscall`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trampoline {
    pub base: String,
    pub handle_prefix: String,
    pub filler: String,
}

impl Default for Trampoline {
    fn default() -> Self {
        Self {
            base: "Syscall".to_string(),
            handle_prefix: "gp".to_string(),
            filler: "0".to_string(),
        }
    }
}

impl Trampoline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_handle_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.handle_prefix = prefix.into();
        self
    }

    /// Whether `sig` fits any variant of the family.
    pub fn is_representable<S: CallShape + ?Sized>(&self, sig: &S) -> bool {
        fits(sig.arity())
    }

    /// Lay out the call for `sig`. Over-limit signatures still get a plan;
    /// its variant simply does not exist.
    pub fn plan<S: CallShape + ?Sized>(&self, sig: &S) -> TrampolineCall {
        let declared = sig.arity();
        let padded = padded_len(declared);

        let mut args: Vec<String> = Vec::with_capacity(padded);
        args.extend(sig.parameters().iter().map(Parameter::word_expression));
        args.resize(padded, self.filler.clone());

        TrampolineCall {
            variant: format!("{}{}", self.base, variant_suffix(padded)),
            handle: format!("{}{}", self.handle_prefix, sig.display_name()),
            declared,
            args,
        }
    }

    /// The call expression text for `sig`.
    ///
    /// Never fails. Gate on [`Trampoline::is_representable`] first, or use
    /// [`Trampoline::checked_call_expression`].
    pub fn call_expression<S: CallShape + ?Sized>(&self, sig: &S) -> String {
        self.plan(sig).to_string()
    }

    pub fn checked_call_expression<S: CallShape + ?Sized>(
        &self,
        sig: &S,
    ) -> Result<String, TrampolineError> {
        if !self.is_representable(sig) {
            return Err(TrampolineError::ArityExceeded {
                name: sig.display_name().to_string(),
                count: sig.arity(),
                ceiling: ARITY_CEILING,
            });
        }
        Ok(self.call_expression(sig))
    }
}

/// A laid-out trampoline call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrampolineCall {
    /// Full variant name, e.g. `Syscall9`.
    pub variant: String,
    /// Expression naming the native target, e.g. `gpBeep`.
    pub handle: String,
    /// Real parameter count, before padding.
    pub declared: usize,
    /// Word arguments, padded with fillers.
    pub args: Vec<String>,
}

impl TrampolineCall {
    pub fn padded(&self) -> usize {
        self.args.len()
    }

    pub fn fillers(&self) -> usize {
        self.args.len().saturating_sub(self.declared)
    }
}

impl fmt::Display for TrampolineCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.variant,
            self.handle,
            self.declared,
            self.args.join(", ")
        )
    }
}

/// [`Trampoline::is_representable`] with the default family.
pub fn is_representable<S: CallShape + ?Sized>(sig: &S) -> bool {
    fits(sig.arity())
}

/// [`Trampoline::call_expression`] with the default family.
pub fn call_expression<S: CallShape + ?Sized>(sig: &S) -> String {
    Trampoline::default().call_expression(sig)
}

/// [`Trampoline::checked_call_expression`] with the default family.
pub fn checked_call_expression<S: CallShape + ?Sized>(sig: &S) -> Result<String, TrampolineError> {
    Trampoline::default().checked_call_expression(sig)
}
