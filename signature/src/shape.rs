//! The minimal structural view the trampoline generator works against.
//!
//! Functions, overloads and borrowed views all satisfy [`CallShape`], so arity
//! and expression rules are written once.

use crate::model::{Function, Overload, Parameter, WordType};

pub trait CallShape {
    type Ty: WordType;

    /// Name the native target is reachable under in generated source.
    fn display_name(&self) -> &str;

    /// Parameters in native calling order.
    fn parameters(&self) -> &[Parameter<Self::Ty>];

    fn arity(&self) -> usize {
        self.parameters().len()
    }
}

impl<S: CallShape + ?Sized> CallShape for &S {
    type Ty = S::Ty;

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn parameters(&self) -> &[Parameter<Self::Ty>] {
        (**self).parameters()
    }
}

impl<T: WordType> CallShape for Function<T> {
    type Ty = T;

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn parameters(&self) -> &[Parameter<T>] {
        &self.parameters
    }
}

impl<T: WordType> CallShape for Overload<T> {
    type Ty = T;

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn parameters(&self) -> &[Parameter<T>] {
        &self.parameters
    }
}

/// A borrowed signature with a label telling primary and overload apart.
#[derive(Debug, Clone, Copy)]
pub struct SignatureRef<'a, T> {
    /// `display_name` for the primary signature, `overload_display_name` for
    /// an overload.
    pub label: &'a str,
    pub display_name: &'a str,
    pub parameters: &'a [Parameter<T>],
    pub is_overload: bool,
}

impl<T: WordType> CallShape for SignatureRef<'_, T> {
    type Ty = T;

    fn display_name(&self) -> &str {
        self.display_name
    }

    fn parameters(&self) -> &[Parameter<T>] {
        self.parameters
    }
}

impl<T> Function<T> {
    /// The primary signature followed by every overload.
    pub fn signatures(&self) -> impl Iterator<Item = SignatureRef<'_, T>> + '_ {
        let primary = SignatureRef {
            label: self.display_name.as_str(),
            display_name: self.display_name.as_str(),
            parameters: self.parameters.as_slice(),
            is_overload: false,
        };
        std::iter::once(primary).chain(self.overloads.iter().map(|o| SignatureRef {
            label: o.overload_display_name.as_str(),
            display_name: o.display_name.as_str(),
            parameters: o.parameters.as_slice(),
            is_overload: true,
        }))
    }
}
