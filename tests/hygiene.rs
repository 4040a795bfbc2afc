//! Hygiene: source-level rules checked at test time.
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns the crate does not allow
//! in production code. Budgets are zero; a hit must be fixed, not budgeted.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn source_files(root: &Path) -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(root, &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, line)| format!("  {}:{}: {}", file.path.display(), n + 1, line.trim()))
        })
        .collect()
}

fn assert_absent(root: &str, pattern: &str) {
    let found = hits(&source_files(Path::new(root)), pattern);
    assert!(found.is_empty(), "`{pattern}` is not allowed in {root}/, found {}:\n{}", found.len(), found.join("\n"));
}

// =============================================================
// Panics
// =============================================================

#[test]
fn no_unwrap() {
    assert_absent("src", ".unwrap()");
}

#[test]
fn no_expect() {
    assert_absent("src", ".expect(");
}

#[test]
fn no_panic() {
    assert_absent("src", "panic!(");
}

#[test]
fn no_unreachable() {
    assert_absent("src", "unreachable!(");
}

#[test]
fn no_todo_or_unimplemented() {
    assert_absent("src", "todo!(");
    assert_absent("src", "unimplemented!(");
}

// =============================================================
// Error handling
// =============================================================

#[test]
fn no_silent_discard() {
    assert_absent("src", "let _ =");
}

#[test]
fn no_dot_ok() {
    assert_absent("src", ".ok()");
}

#[test]
fn document_state_read_directly() {
    assert_absent("src", "\"readyState\"");
}

// =============================================================
// Structure
// =============================================================

#[test]
fn no_allow_dead_code() {
    assert_absent("src", "#[allow(dead_code)]");
}

#[test]
fn state_models_stay_browser_free() {
    assert_absent("src/state", "web_sys");
    assert_absent("src/state", "wasm_bindgen");
    assert_absent("src/state", "js_sys");
}
