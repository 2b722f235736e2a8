use std::io::Write;
use tempfile::NamedTempFile;

use cli::args::OutputFormat;
use cli::commands::{check, emit};
use cli::config::load_definitions;

fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut f = NamedTempFile::with_suffix(suffix).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn wide_function(name: &str, arity: usize) -> String {
    let params: Vec<String> = (1..=arity)
        .map(|i| format!("{{ name = \"a{i}\", type = \"raw\" }}"))
        .collect();
    format!(
        "[[functions]]\nname = \"{name}\"\nparameters = [{}]\n",
        params.join(", ")
    )
}

const KERNEL32: &str = r#"
[trampoline]
base = "syscall.Syscall"

[[functions]]
name = "Beep"
return_type = "bool"
parameters = [
    { name = "dwFreq", type = "raw" },
    { name = "dwDuration", type = "raw" },
]

[[functions]]
name = "glBufferData"
display_name = "BufferData"
parameters = [
    { name = "target", type = "word" },
    { name = "size", type = "word" },
    { name = "data", type = "pointer" },
    { name = "usage", type = "word" },
]

[[functions.overloads]]
overload_display_name = "BufferDataEmpty"
parameters = [
    { name = "target", type = "word" },
    { name = "size", type = "word" },
]
"#;

// ======================================================================
// emit
// ======================================================================

#[test]
fn emit_text_lists_every_signature() {
    let src = write_temp(KERNEL32, ".toml");
    let defs = load_definitions(src.path()).unwrap();
    let t = defs.trampoline.trampoline(None, None);
    let emission = emit::emit_definitions(&defs, &t);
    assert!(emission.skipped.is_empty());

    let text = emit::render(&emission, OutputFormat::Text).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Beep: syscall.Syscall(gpBeep, 2, dwFreq, dwDuration, 0)",
            "BufferData: syscall.Syscall6(gpBufferData, 4, uintptr(target), uintptr(size), \
             uintptr(unsafe.Pointer(data)), uintptr(usage), 0, 0)",
            "BufferDataEmpty: syscall.Syscall(gpBufferData, 2, uintptr(target), uintptr(size), 0)",
        ]
    );
}

#[test]
fn emit_json_records() {
    let src = write_temp(KERNEL32, ".toml");
    let defs = load_definitions(src.path()).unwrap();
    let t = defs.trampoline.trampoline(Some("Syscall"), Some("proc"));
    let json = emit::render(&emit::emit_definitions(&defs, &t), OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let calls = value.as_array().unwrap();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0]["name"], "Beep");
    assert_eq!(calls[0]["variant"], "Syscall");
    assert_eq!(calls[0]["declared"], 2);
    assert_eq!(
        calls[0]["expression"],
        "Syscall(procBeep, 2, dwFreq, dwDuration, 0)"
    );
    assert_eq!(calls[1]["variant"], "Syscall6");
}

#[test]
fn emit_skips_over_limit_signatures() {
    let src = write_temp(
        &format!("{}{}", wide_function("Wide", 19), wide_function("Fits", 18)),
        ".toml",
    );
    let defs = load_definitions(src.path()).unwrap();
    let emission = emit::emit_definitions(&defs, &Default::default());
    assert_eq!(emission.skipped, vec!["Wide".to_string()]);
    assert_eq!(emission.calls.len(), 1);
    assert_eq!(emission.calls[0].variant, "Syscall18");
}

#[test]
fn emit_file_reads_json() {
    let src = write_temp(
        r#"{ "functions": [{ "name": "GetTickCount", "return_type": "word" }] }"#,
        ".json",
    );
    let result = emit::emit_file(src.path().to_str().unwrap(), None, None, OutputFormat::Text);
    assert!(result.is_ok(), "emit_file failed: {:?}", result.err());
}

#[test]
fn emit_file_missing_file_errors() {
    let result = emit::emit_file("/nonexistent/defs.toml", None, None, OutputFormat::Text);
    let err = format!("{}", result.unwrap_err());
    assert!(err.contains("Failed to read"), "unexpected error: {err}");
}

#[test]
fn emit_file_rejects_unknown_type() {
    let src = write_temp(
        "[[functions]]\nname = \"f\"\nparameters = [{ name = \"a\", type = \"matrix\" }]\n",
        ".toml",
    );
    let result = emit::emit_file(src.path().to_str().unwrap(), None, None, OutputFormat::Text);
    assert!(result.is_err());
}

#[test]
fn unnamed_function_is_rejected_before_emitting() {
    let src = write_temp(
        "[[functions]]\nparameters = [{ name = \"a\", type = \"raw\" }]\n",
        ".toml",
    );
    assert!(load_definitions(src.path()).is_err());

    let blank = write_temp(
        "[[functions]]\nname = \"\"\nparameters = [{ name = \"a\", type = \"raw\" }]\n",
        ".toml",
    );
    let err = load_definitions(blank.path()).unwrap_err();
    assert!(
        err.to_string().contains("neither `name` nor `display_name`"),
        "unexpected error: {err}"
    );
    let result = emit::emit_file(blank.path().to_str().unwrap(), None, None, OutputFormat::Text);
    assert!(result.is_err());
}

// ======================================================================
// check
// ======================================================================

#[test]
fn check_passes_when_everything_fits() {
    let src = write_temp(KERNEL32, ".toml");
    assert!(check::check_file(src.path().to_str().unwrap()).is_ok());
}

#[test]
fn check_reports_over_limit_overloads_by_label() {
    let mut src = wide_function("Wide", 20);
    src.push_str("\n[[functions.overloads]]\noverload_display_name = \"WideShort\"\n");
    let file = write_temp(&src, ".toml");

    let defs = load_definitions(file.path()).unwrap();
    let failures = check::over_limit(&defs);
    assert_eq!(failures.len(), 1);
    assert_eq!(
        failures[0].to_string(),
        "`Wide` takes 20 parameters, trampolines accept at most 18"
    );

    let err = check::check_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(
        err.to_string().contains("1 of 2 signatures"),
        "unexpected error: {err}"
    );
}

#[test]
fn check_labels_over_limit_overload_with_its_own_name() {
    let params: Vec<String> = (1..=19)
        .map(|i| format!("{{ name = \"b{i}\", type = \"word\" }}"))
        .collect();
    let src = format!(
        "{}\n[[functions.overloads]]\noverload_display_name = \"NarrowEx\"\nparameters = [{}]\n",
        wide_function("Narrow", 1),
        params.join(", ")
    );
    let file = write_temp(&src, ".toml");

    let defs = load_definitions(file.path()).unwrap();
    let failures = check::over_limit(&defs);
    assert_eq!(
        failures,
        vec![trampoline::TrampolineError::ArityExceeded {
            name: "NarrowEx".to_string(),
            count: 19,
            ceiling: 18,
        }]
    );
}
