//! Hygiene checks over production sources, enforced at test time.
//!
//! Scans the site crate sources, including the `hydrate` glue, for patterns
//! that panic or swallow errors. A panic in an event handler leaves the page
//! without a working toggle or search box.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`; `_test.rs` siblings are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Fail when `pattern` appears on more than `budget` lines of production code.
fn assert_budget(pattern: &str, budget: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    let count: usize = hits.iter().map(|(_, n)| n).sum();
    let listing = hits
        .iter()
        .map(|(path, n)| format!("  {path}: {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= budget, "`{pattern}` budget exceeded: found {count}, max {budget}.\n{listing}");
}

// =============================================================
// Panics
// =============================================================

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", 0);
}

// =============================================================
// Discarded errors
// =============================================================

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0);
}

/// `dyn_into` casts whose failure means "not that element type", plus the
/// unsupported-`matchMedia` fallback.
#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 3);
}

// =============================================================
// Structure
// =============================================================

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0);
}
