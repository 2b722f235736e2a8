use anyhow::Result;
use trampoline::{checked_call_expression, TrampolineError};

use crate::config::{load_definitions, Definitions};

/// Every signature in `defs` that no trampoline variant can carry.
pub fn over_limit(defs: &Definitions) -> Vec<TrampolineError> {
    defs.functions
        .iter()
        .flat_map(|f| f.signatures())
        .filter_map(|sig| {
            checked_call_expression(&sig)
                .err()
                .map(|err| relabel(err, sig.label))
        })
        .collect()
}

/// Overload errors carry the origin's display name; report the overload's own.
fn relabel(err: TrampolineError, label: &str) -> TrampolineError {
    match err {
        TrampolineError::ArityExceeded { count, ceiling, .. } => TrampolineError::ArityExceeded {
            name: label.to_string(),
            count,
            ceiling,
        },
    }
}

pub fn check_file(path: &str) -> Result<()> {
    let defs = load_definitions(path)?;
    let total: usize = defs.functions.iter().map(|f| 1 + f.overloads.len()).sum();
    let failures = over_limit(&defs);

    for err in &failures {
        eprintln!("error: {err}");
    }
    if !failures.is_empty() {
        anyhow::bail!(
            "{} of {} signatures cannot be expressed through a trampoline",
            failures.len(),
            total
        );
    }
    println!("{total} signatures OK");
    Ok(())
}
