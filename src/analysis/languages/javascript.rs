//! JavaScript source analyzer.
//!
//! Anchored per-line patterns over raw text. Top-level declarations are
//! expected at column zero; class bodies are walked with brace counting so
//! methods are only picked up directly inside the class, not from nested
//! functions or object literals. Lines inside template literals or block
//! comments that happen to look like declarations can still match; that is
//! an accepted limitation of the heuristic.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::common::{
    brace_body, leading_block_comment, leading_line_comments, line_of_offset, split_params,
};
use crate::analysis::{ClassEntity, CodeEntity, EntityKind, LanguageAnalyzer, SourceOutline};

/// Top-level function declaration forms. Each pattern captures the
/// identifier first and the raw parameter list second.
static FUNCTION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?m)^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\(([^)]*)\)",
        r"(?m)^(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?function\s*\*?\s*\(([^)]*)\)",
        r"(?m)^(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?\(([^)]*)\)\s*=>",
        r"(?m)^(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?([A-Za-z_$][A-Za-z0-9_$]*)\s*=>",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:export\s+)?(?:default\s+)?class\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap()
});

/// Method headers directly inside a class body.
static METHOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:static\s+)?(?:async\s+)?(?:get\s+|set\s+)?\*?\s*([A-Za-z_$#][A-Za-z0-9_$]*)\s*\(([^)]*)\)\s*\{",
    )
    .unwrap()
});

/// Identifiers that look like method headers but never are.
const METHOD_KEYWORDS: &[&str] = &[
    "constructor", "if", "for", "while", "switch", "catch", "return", "function", "super",
];

pub struct JavaScriptAnalyzer;

impl JavaScriptAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JavaScriptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading underscore or `#` marks a private name.
fn is_private(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('#')
}

fn doc_for(lines: &[&str], decl_idx: usize) -> Option<String> {
    leading_line_comments(lines, decl_idx, "//").or_else(|| leading_block_comment(lines, decl_idx))
}

/// Extract method entities from a class body span.
///
/// Depth starts at one (inside the class braces); method headers are only
/// matched while depth is exactly one.
fn extract_methods(
    source: &str,
    class_name: &str,
    body_start: usize,
    body_end: usize,
) -> Vec<CodeEntity> {
    let body = &source[body_start..body_end];
    let body_lines: Vec<&str> = body.split('\n').collect();

    let mut methods = Vec::new();
    let mut depth: i32 = 1;
    let mut offset = 0usize;

    for (i, line) in body_lines.iter().enumerate() {
        if depth == 1 {
            if let Some(caps) = METHOD_RE.captures(line) {
                let name = caps[1].to_string();
                if !METHOD_KEYWORDS.contains(&name.as_str()) && !is_private(&name) {
                    methods.push(CodeEntity {
                        kind: EntityKind::Method,
                        params: split_params(&caps[2]),
                        owner: Some(class_name.to_string()),
                        doc: doc_for(&body_lines, i),
                        line: line_of_offset(source, body_start + offset),
                        name,
                    });
                }
            }
        }
        depth += line.matches('{').count() as i32 - line.matches('}').count() as i32;
        offset += line.len() + 1;
    }
    methods
}

impl LanguageAnalyzer for JavaScriptAnalyzer {
    fn language_id(&self) -> &'static str {
        "javascript"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["js"]
    }

    fn analyze(&self, source: &str) -> SourceOutline {
        let lines: Vec<&str> = source.lines().collect();
        let mut outline = SourceOutline::empty(self.language_id());

        // Classes first: their spans also exclude method-shaped matches
        // from the top-level function scan.
        let mut class_ranges: Vec<(usize, usize)> = Vec::new();
        for caps in CLASS_RE.captures_iter(source) {
            let Some(m) = caps.get(0) else { continue };
            let name = caps[1].to_string();
            let Some((body_start, body_end)) = brace_body(source, m.end()) else {
                continue;
            };
            class_ranges.push((m.start(), body_end));
            if is_private(&name) {
                continue;
            }
            let line = line_of_offset(source, m.start());
            outline.classes.push(ClassEntity {
                doc: doc_for(&lines, line - 1),
                methods: extract_methods(source, &name, body_start, body_end),
                line,
                name,
            });
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut functions: Vec<(usize, CodeEntity)> = Vec::new();
        for re in FUNCTION_RES.iter() {
            for caps in re.captures_iter(source) {
                let Some(m) = caps.get(0) else { continue };
                if class_ranges
                    .iter()
                    .any(|&(start, end)| m.start() >= start && m.start() < end)
                {
                    continue;
                }
                let name = caps[1].to_string();
                if is_private(&name) || !seen.insert(name.clone()) {
                    continue;
                }
                let line = line_of_offset(source, m.start());
                functions.push((
                    m.start(),
                    CodeEntity {
                        kind: EntityKind::Function,
                        params: split_params(&caps[2]),
                        owner: None,
                        doc: doc_for(&lines, line - 1),
                        line,
                        name,
                    },
                ));
            }
        }
        functions.sort_by_key(|&(offset, _)| offset);
        outline.functions = functions.into_iter().map(|(_, f)| f).collect();

        outline
    }
}
