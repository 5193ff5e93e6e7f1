//! Python source analyzer.
//!
//! Line-oriented heuristics, not a grammar. `def`/`class` headers are
//! recognized with anchored patterns; methods are attributed to the most
//! recent column-zero class header while indentation stays inside its body.
//! Headers whose parameter list spans multiple lines are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use super::common::{leading_line_comments, split_params};
use crate::analysis::{ClassEntity, CodeEntity, EntityKind, LanguageAnalyzer, SourceOutline};

/// Matches `def name(params):` headers, including `async def` and return
/// annotations.
static DEF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)(?:async\s+)?def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\((.*)\)\s*(?:->\s*[^:]+)?:")
        .unwrap()
});

/// Matches `class Name:` / `class Name(Base):` headers at column zero.
static CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^class\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:\([^)]*\))?\s*:").unwrap());

pub struct PythonAnalyzer;

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading underscore marks private functions, methods, and classes;
/// dunder methods fall under the same rule.
fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

/// Index of the declaration for doc purposes: decorators directly above
/// the header belong to the declaration, so comments are looked up above
/// them.
fn decl_doc_idx(lines: &[&str], idx: usize) -> usize {
    let mut i = idx;
    while i > 0 && lines[i - 1].trim_start().starts_with('@') {
        i -= 1;
    }
    i
}

/// First line of a docstring opening on the first body line, if any.
fn docstring_first_line(lines: &[&str], header_idx: usize) -> Option<String> {
    let mut idx = header_idx + 1;
    while idx < lines.len() && lines[idx].trim().is_empty() {
        idx += 1;
    }
    let line = lines.get(idx)?.trim();
    let quote = if line.starts_with("\"\"\"") {
        "\"\"\""
    } else if line.starts_with("'''") {
        "'''"
    } else {
        return None;
    };

    let rest = &line[quote.len()..];
    if let Some(end) = rest.find(quote) {
        let text = rest[..end].trim();
        return if text.is_empty() { None } else { Some(text.to_string()) };
    }
    if !rest.trim().is_empty() {
        return Some(rest.trim().to_string());
    }
    // Opening quotes alone; the first content line follows.
    lines
        .get(idx + 1)
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with(quote))
}

fn doc_for(lines: &[&str], header_idx: usize) -> Option<String> {
    leading_line_comments(lines, decl_doc_idx(lines, header_idx), "#")
        .or_else(|| docstring_first_line(lines, header_idx))
}

/// Drop the `self`/`cls` receiver from a method's parameter list.
fn strip_receiver(mut params: Vec<String>) -> Vec<String> {
    if matches!(params.first().map(String::as_str), Some("self") | Some("cls")) {
        params.remove(0);
    }
    params
}

fn flush_class(outline: &mut SourceOutline, class: Option<ClassEntity>) {
    if let Some(class) = class {
        outline.classes.push(class);
    }
}

impl LanguageAnalyzer for PythonAnalyzer {
    fn language_id(&self) -> &'static str {
        "python"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn analyze(&self, source: &str) -> SourceOutline {
        let lines: Vec<&str> = source.lines().collect();
        let mut outline = SourceOutline::empty(self.language_id());

        // Class context: `current_class` is None for private classes, but
        // `in_class_body` stays true so their defs are not mistaken for
        // top-level functions.
        let mut current_class: Option<ClassEntity> = None;
        let mut in_class_body = false;
        let mut method_indent: Option<usize> = None;

        for (idx, raw) in lines.iter().enumerate() {
            if let Some(caps) = CLASS_RE.captures(raw) {
                flush_class(&mut outline, current_class.take());
                let name = caps[1].to_string();
                in_class_body = true;
                method_indent = None;
                if !is_private(&name) {
                    current_class = Some(ClassEntity {
                        doc: doc_for(&lines, idx),
                        line: idx + 1,
                        methods: Vec::new(),
                        name,
                    });
                }
                continue;
            }

            if let Some(caps) = DEF_RE.captures(raw) {
                let indent = caps[1].len();
                let name = caps[2].to_string();

                if indent == 0 {
                    flush_class(&mut outline, current_class.take());
                    in_class_body = false;
                    method_indent = None;
                    if !is_private(&name) {
                        outline.functions.push(CodeEntity {
                            kind: EntityKind::Function,
                            params: split_params(&caps[3]),
                            owner: None,
                            doc: doc_for(&lines, idx),
                            line: idx + 1,
                            name,
                        });
                    }
                } else if in_class_body {
                    // Methods all sit at the indent of the first def in
                    // the class body; anything deeper is a nested def.
                    let expected = *method_indent.get_or_insert(indent);
                    if indent == expected && !is_private(&name) {
                        if let Some(class) = current_class.as_mut() {
                            class.methods.push(CodeEntity {
                                kind: EntityKind::Method,
                                params: strip_receiver(split_params(&caps[3])),
                                owner: Some(class.name.clone()),
                                doc: doc_for(&lines, idx),
                                line: idx + 1,
                                name,
                            });
                        }
                    }
                }
                // Defs nested inside function bodies are not entities.
                continue;
            }

            // A non-blank, non-comment line at column zero ends the class body.
            if in_class_body
                && !raw.is_empty()
                && !raw.starts_with(|c: char| c == ' ' || c == '\t')
                && !raw.starts_with('#')
            {
                flush_class(&mut outline, current_class.take());
                in_class_body = false;
                method_indent = None;
            }
        }

        flush_class(&mut outline, current_class.take());
        outline
    }
}
