//! Source hygiene checks for `src/`.
//!
//! Each antipattern has a budget. Budgets only go down: fix an existing hit
//! before adding a new one. `_test.rs` files are exempt.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it is banned)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics in the browser tab"),
    (".expect(", 0, "panics in the browser tab"),
    ("panic!(", 0, "panics in the browser tab"),
    ("unreachable!(", 0, "panics in the browser tab"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "drops a result without looking at it"),
    (".ok()", 0, "drops an error without logging it"),
    ("Err(_) =>", 0, "drops an error without logging it"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
    ("println!(", 0, "bypasses the log facade"),
    ("eprintln!(", 0, "bypasses the log facade"),
];

struct SourceFile {
    path: String,
    content: String,
}

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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();

    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let listing = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("`{pattern}` ({why}): found {count}, max {budget}\n{listing}"));
        }
    }

    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn inner_html_only_in_view_layer() {
    // Markup is escaped in `util::escape` before it reaches these files.
    let allowed = ["chat_panel.rs", "widget_view.rs"];
    let files = source_files();
    let offenders: Vec<_> = hits(&files, "inner_html=")
        .into_iter()
        .filter(|(path, _)| !allowed.iter().any(|name| path.ends_with(name)))
        .collect();
    assert!(offenders.is_empty(), "raw HTML insertion outside the view layer: {offenders:?}");
}
