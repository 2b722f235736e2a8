use serde::{Deserialize, Serialize};

use crate::ident::{sanitize_generated, sanitize_native};

/// Converts a value expression of some native type into a machine-word
/// (pointer-sized integer) expression.
///
/// This is the only thing the trampoline generator needs from a type system.
/// Implementations must be total and deterministic.
pub trait WordType {
    fn to_word(&self, value: &str) -> String;
}

impl<T: WordType + ?Sized> WordType for &T {
    fn to_word(&self, value: &str) -> String {
        (**self).to_word(value)
    }
}

impl<T: WordType + ?Sized> WordType for Box<T> {
    fn to_word(&self, value: &str) -> String {
        (**self).to_word(value)
    }
}

/// A small closed set of native type shapes, enough to drive generation from
/// definition files without a full type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeType {
    /// Already a machine word; passed through verbatim.
    Raw,
    /// Any integer-like scalar or handle.
    Word,
    Pointer,
    Bool,
    Float32,
    Float64,
}

impl WordType for NativeType {
    fn to_word(&self, value: &str) -> String {
        match self {
            NativeType::Raw => value.to_string(),
            NativeType::Word => format!("uintptr({value})"),
            NativeType::Pointer => format!("uintptr(unsafe.Pointer({value}))"),
            NativeType::Bool => format!("boolToUintptr({value})"),
            NativeType::Float32 => format!("uintptr(math.Float32bits({value}))"),
            NativeType::Float64 => format!("uintptr(math.Float64bits({value}))"),
        }
    }
}

/// One formal argument of a native function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter<T> {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: T,
}

impl<T> Parameter<T> {
    pub fn new(name: impl Into<String>, ty: T) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Spelling safe to use in a native declaration.
    pub fn native_name(&self) -> String {
        sanitize_native(&self.name)
    }

    /// Spelling safe to use in the generated source.
    pub fn generated_name(&self) -> String {
        sanitize_generated(&self.name)
    }
}

impl<T: WordType> Parameter<T> {
    /// The machine-word argument expression for this parameter.
    pub fn word_expression(&self) -> String {
        self.ty.to_word(&self.generated_name())
    }
}

/// A native callable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function<T> {
    /// Canonical native identifier, used for loading the symbol.
    pub name: String,
    /// Identifier used in generated source, prefix already stripped.
    #[serde(default)]
    pub display_name: String,
    // A bare `default` would bound the impl on `T: Default`.
    #[serde(default = "Vec::new")]
    pub parameters: Vec<Parameter<T>>,
    /// `None` for void.
    pub return_type: Option<T>,
    #[serde(default = "Vec::new")]
    pub overloads: Vec<Overload<T>>,
}

impl<T> Function<T> {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            parameters: Vec::new(),
            return_type: None,
            overloads: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: T) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn with_return(mut self, ty: T) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn with_overload(mut self, overload: Overload<T>) -> Self {
        self.overloads.push(overload);
        self
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl<T: Clone> Function<T> {
    /// Function projections of every overload, in declaration order.
    pub fn overload_functions(&self) -> impl Iterator<Item = Function<T>> + '_ {
        self.overloads.iter().map(Overload::to_function)
    }
}

/// An alternative parameter list for the same native target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overload<T> {
    /// Display name of the function this overloads.
    #[serde(default)]
    pub display_name: String,
    /// Display name distinguishing this overload.
    pub overload_display_name: String,
    #[serde(default = "Vec::new")]
    pub parameters: Vec<Parameter<T>>,
    pub return_type: Option<T>,
}

impl<T> Overload<T> {
    pub fn new(display_name: impl Into<String>, overload_display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            overload_display_name: overload_display_name.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: T) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn with_return(mut self, ty: T) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl<T: Clone> Overload<T> {
    /// The anonymous Function this overload stands for: the origin's display
    /// name with this overload's own parameters and return type.
    pub fn to_function(&self) -> Function<T> {
        Function {
            name: String::new(),
            display_name: self.display_name.clone(),
            parameters: self.parameters.clone(),
            return_type: self.return_type.clone(),
            overloads: Vec::new(),
        }
    }
}
