//! Definitions files: the trampoline family settings plus the signatures to
//! generate for.
//!
//! ```toml
//! [trampoline]
//! base = "syscall.Syscall"
//! handle_prefix = "gp"
//!
//! [[functions]]
//! name = "Beep"
//! return_type = "bool"
//! parameters = [
//!     { name = "dwFreq", type = "word" },
//!     { name = "dwDuration", type = "word" },
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use signature::{Function, NativeType};
use trampoline::Trampoline;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilyConfig {
    pub base: Option<String>,
    pub handle_prefix: Option<String>,
}

impl FamilyConfig {
    /// Build the family, with command-line values taking precedence over the
    /// file's.
    pub fn trampoline(&self, base: Option<&str>, handle_prefix: Option<&str>) -> Trampoline {
        let mut t = Trampoline::default();
        if let Some(b) = base.or(self.base.as_deref()) {
            t = t.with_base(b);
        }
        if let Some(p) = handle_prefix.or(self.handle_prefix.as_deref()) {
            t = t.with_handle_prefix(p);
        }
        t
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Definitions {
    #[serde(default)]
    pub trampoline: FamilyConfig,
    #[serde(default)]
    pub functions: Vec<Function<NativeType>>,
}

impl Definitions {
    pub fn from_toml(src: &str) -> Result<Self> {
        let defs: Definitions = toml::from_str(src).context("Invalid TOML definitions")?;
        defs.normalized()
    }

    pub fn from_json(src: &str) -> Result<Self> {
        let defs: Definitions = serde_json::from_str(src).context("Invalid JSON definitions")?;
        defs.normalized()
    }

    /// Fill display names left out of the file: a function falls back to its
    /// native name, an overload to the function it belongs to. A signature
    /// still left without a name is rejected, since its handle would be the
    /// bare prefix.
    fn normalized(mut self) -> Result<Self> {
        for (index, f) in self.functions.iter_mut().enumerate() {
            if f.display_name.is_empty() {
                f.display_name = f.name.clone();
            }
            if f.display_name.is_empty() {
                bail!("function #{} has neither `name` nor `display_name`", index + 1);
            }
            for o in &mut f.overloads {
                if o.display_name.is_empty() {
                    o.display_name = f.display_name.clone();
                }
                if o.overload_display_name.is_empty() {
                    bail!("overload of `{}` has an empty `overload_display_name`", f.display_name);
                }
            }
        }
        Ok(self)
    }
}

/// Load a definitions file, picking the format from its extension. Anything
/// other than `.json` is read as TOML.
pub fn load_definitions(path: impl AsRef<Path>) -> Result<Definitions> {
    let path = path.as_ref();
    let _span = tracing::info_span!("load", file = %path.display()).entered();

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let defs = if is_json {
        Definitions::from_json(&content)?
    } else {
        Definitions::from_toml(&content)?
    };

    tracing::debug!(functions = defs.functions.len(), "definitions loaded");
    Ok(defs)
}
