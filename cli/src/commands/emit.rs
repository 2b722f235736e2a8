use anyhow::{Context, Result};
use serde::Serialize;
use trampoline::Trampoline;

use crate::args::OutputFormat;
use crate::config::{load_definitions, Definitions};

/// One generated call, as reported by `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedCall {
    /// Display name of the function, or the overload's own display name.
    pub name: String,
    pub variant: String,
    pub declared: usize,
    pub expression: String,
}

#[derive(Debug, Default)]
pub struct Emission {
    pub calls: Vec<EmittedCall>,
    /// Labels of signatures too wide for any trampoline.
    pub skipped: Vec<String>,
}

/// Generate calls for every signature in `defs`, primary ones and overloads,
/// in file order.
pub fn emit_definitions(defs: &Definitions, trampoline: &Trampoline) -> Emission {
    let _span = tracing::info_span!("emit", base = %trampoline.base).entered();
    let mut out = Emission::default();

    for function in &defs.functions {
        for sig in function.signatures() {
            if !trampoline.is_representable(&sig) {
                tracing::warn!(name = sig.label, arity = sig.parameters.len(), "skipping over-limit signature");
                out.skipped.push(sig.label.to_string());
                continue;
            }
            let call = trampoline.plan(&sig);
            tracing::debug!(name = sig.label, variant = %call.variant, "emitted");
            out.calls.push(EmittedCall {
                name: sig.label.to_string(),
                variant: call.variant.clone(),
                declared: call.declared,
                expression: call.to_string(),
            });
        }
    }
    out
}

pub fn render(emission: &Emission, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(emission
            .calls
            .iter()
            .map(|c| format!("{}: {}\n", c.name, c.expression))
            .collect()),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(&emission.calls)
                .context("Failed to serialize calls")?;
            s.push('\n');
            Ok(s)
        }
    }
}

pub fn emit_file(
    path: &str,
    base: Option<&str>,
    handle_prefix: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let defs = load_definitions(path)?;
    let trampoline = defs.trampoline.trampoline(base, handle_prefix);
    let emission = emit_definitions(&defs, &trampoline);

    print!("{}", render(&emission, format)?);
    for name in &emission.skipped {
        eprintln!("warning: `{name}` has too many parameters for a trampoline, skipped");
    }
    Ok(())
}
