//! Hygiene — enforces coding standards at test time
//!
//! Scans `grading/src/` for antipatterns. Each pattern has a budget (ideally
//! zero). If you must add one, fix an existing one first; budgets never grow.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics crash the hydrated app.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or map the error" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or map the error" },
    Budget { pattern: "panic!(", max: 0, why: "widgets must degrade, not crash" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the state explicitly" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, why: "inspect the result" },
    Budget { pattern: ".ok()", max: 0, why: "match on the error instead" },
    // Output goes through the `log` facade so `console_log` can route it.
    Budget { pattern: "println!(", max: 0, why: "use log::" },
    Budget { pattern: "eprintln!(", max: 0, why: "use log::" },
    Budget { pattern: "dbg!(", max: 0, why: "remove debug output" },
    // Style.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs` siblings.
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    assert!(source_files().len() >= 5, "hygiene scan found too few files; is the working directory the crate root?");
}

#[test]
fn antipattern_budgets_hold() {
    let files = source_files();
    let mut violations = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            violations.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({})\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(violations.is_empty(), "{}", violations.join("\n"));
}
