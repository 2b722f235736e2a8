//! Reserved-word renaming for parameter identifiers.
//!
//! A parameter name has to be spelled twice: once where the native call is
//! declared and once in the generated source that passes it along. Each
//! vocabulary owns its own table, so extending one never changes the other.

/// Prepended to any identifier that collides with a reserved word.
pub const RENAME_MARKER: char = 'x';

/// Words that break native (C) declarations when used as parameter names.
pub const NATIVE_RESERVED: &[&str] = &["near", "far"];

/// Words that break the generated source when used as parameter names.
pub const GENERATED_RESERVED: &[&str] = &["func", "type", "struct", "range", "map", "string"];

/// Where an identifier is going to be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// Native-call spelling (C declarations).
    Native,
    /// Generated-source spelling.
    Generated,
}

impl Vocabulary {
    pub fn reserved(self) -> &'static [&'static str] {
        match self {
            Vocabulary::Native => NATIVE_RESERVED,
            Vocabulary::Generated => GENERATED_RESERVED,
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn is_reserved(self, word: &str) -> bool {
        self.reserved().contains(&word)
    }

    pub fn sanitize(self, word: &str) -> String {
        if self.is_reserved(word) {
            format!("{RENAME_MARKER}{word}")
        } else {
            word.to_string()
        }
    }
}

/// Rename `word` if it is reserved in native declarations.
pub fn sanitize_native(word: &str) -> String {
    Vocabulary::Native.sanitize(word)
}

/// Rename `word` if it is reserved in the generated source.
pub fn sanitize_generated(word: &str) -> String {
    Vocabulary::Generated.sanitize(word)
}
