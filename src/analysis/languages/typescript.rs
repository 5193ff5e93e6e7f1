//! TypeScript source analyzer.
//!
//! The JavaScript declaration forms plus type annotations, generic
//! parameter lists, and member access modifiers. `interface`, `type`, and
//! `enum` declarations are not callables and are never emitted.
//! Arrow consts whose explicit type annotation itself contains `=>` are
//! skipped by the heuristic.

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
        r"(?m)^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*(?:<[^>]*>)?\s*\(([^)]*)\)",
        r"(?m)^(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)(?:\s*:\s*[^=]+)?\s*=\s*(?:async\s+)?function\s*\*?\s*\(([^)]*)\)",
        r"(?m)^(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)(?:\s*:\s*[^=]+)?\s*=\s*(?:async\s+)?(?:<[^>]*>)?\s*\(([^)]*)\)\s*(?::[^=]*)?=>",
        r"(?m)^(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?([A-Za-z_$][A-Za-z0-9_$]*)\s*=>",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][A-Za-z0-9_$]*)")
        .unwrap()
});

/// Method headers directly inside a class body. The access modifier is
/// captured so `private` members can be excluded.
static METHOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:(public|protected|private)\s+)?(?:static\s+)?(?:readonly\s+)?(?:async\s+)?(?:get\s+|set\s+)?\*?\s*([A-Za-z_$#][A-Za-z0-9_$]*)\s*(?:<[^>]*>)?\s*\(([^)]*)\)\s*(?::\s*[^{]*)?\{",
    )
    .unwrap()
});

/// Identifiers that look like method headers but never are.
const METHOD_KEYWORDS: &[&str] = &[
    "constructor", "if", "for", "while", "switch", "catch", "return", "function", "super",
];

pub struct TypeScriptAnalyzer;

impl TypeScriptAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TypeScriptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading underscore or `#` marks a private name; the `private` modifier
/// is handled at the method pattern.
fn is_private(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('#')
}

fn doc_for(lines: &[&str], decl_idx: usize) -> Option<String> {
    leading_line_comments(lines, decl_idx, "//").or_else(|| leading_block_comment(lines, decl_idx))
}

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
                let modifier = caps.get(1).map(|m| m.as_str());
                let name = caps[2].to_string();
                if modifier != Some("private")
                    && !METHOD_KEYWORDS.contains(&name.as_str())
                    && !is_private(&name)
                {
                    methods.push(CodeEntity {
                        kind: EntityKind::Method,
                        params: split_params(&caps[3]),
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

impl LanguageAnalyzer for TypeScriptAnalyzer {
    fn language_id(&self) -> &'static str {
        "typescript"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["ts"]
    }

    fn analyze(&self, source: &str) -> SourceOutline {
        let lines: Vec<&str> = source.lines().collect();
        let mut outline = SourceOutline::empty(self.language_id());

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

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(source: &str) -> SourceOutline {
        TypeScriptAnalyzer::new().analyze(source)
    }

    #[test]
    fn test_typed_functions() {
        let source = concat!(
            "export function area(width: number, height: number): number {\n",
            "  return width * height;\n",
            "}\n",
            "\n",
            "export const scale = (size: number, factor: number): number => size * factor;\n",
            "\n",
            "function identity<T>(value: T): T {\n",
            "  return value;\n",
            "}\n",
        );
        let outline = analyze(source);

        let names: Vec<&str> = outline.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["area", "scale", "identity"]);
        assert_eq!(outline.functions[0].params, vec!["width", "height"]);
        assert_eq!(outline.functions[1].params, vec!["size", "factor"]);
        assert_eq!(outline.functions[2].params, vec!["value"]);
    }

    #[test]
    fn test_class_with_modifiers() {
        let source = concat!(
            "export class Rectangle {\n",
            "  constructor(width: number, height: number) {\n",
            "  }\n",
            "\n",
            "  area(): number {\n",
            "    return 0;\n",
            "  }\n",
            "\n",
            "  private normalize(): void {\n",
            "  }\n",
            "\n",
            "  async describe(label: string): Promise<string> {\n",
            "    return label;\n",
            "  }\n",
            "}\n",
        );
        let outline = analyze(source);

        assert_eq!(outline.class_count(), 1);
        let names: Vec<&str> = outline.classes[0]
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["area", "describe"]);
        assert_eq!(outline.classes[0].methods[1].params, vec!["label"]);
    }

    #[test]
    fn test_interfaces_and_types_ignored() {
        let source = concat!(
            "interface Shape {\n",
            "  area(): number;\n",
            "}\n",
            "\n",
            "type Size = { width: number };\n",
            "\n",
            "enum Kind {\n",
            "  Square,\n",
            "}\n",
        );
        assert!(analyze(source).is_empty());
    }

    #[test]
    fn test_private_names_excluded() {
        let source = concat!(
            "function _clamp(value: number): number {\n",
            "  return value;\n",
            "}\n",
            "\n",
            "class Store {\n",
            "  #flush(): void {\n",
            "  }\n",
            "}\n",
        );
        let outline = analyze(source);
        assert!(outline.functions.is_empty());
        assert!(outline.classes[0].methods.is_empty());
    }

    #[test]
    fn test_field_declarations_are_not_methods() {
        let source = concat!(
            "class Box {\n",
            "  private size: number;\n",
            "  label = 'box';\n",
            "\n",
            "  resize(size: number): void {\n",
            "    this.size = size;\n",
            "  }\n",
            "}\n",
        );
        let outline = analyze(source);
        let names: Vec<&str> = outline.classes[0]
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["resize"]);
    }
}
