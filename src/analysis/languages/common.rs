//! Helpers shared by the language analyzers.

use once_cell::sync::Lazy;
use regex::Regex;

static IDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*").unwrap());

/// Split a raw parameter list into best-effort parameter names.
///
/// Commas are only significant at bracket depth zero, so defaults like
/// `(a, b = [1, 2])` survive. Type annotations, defaults, and rest/spread
/// markers are stripped; destructured patterns collapse to a positional
/// `argN` placeholder. Never fails.
pub(crate) fn split_params(raw: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    for ch in raw.chars() {
        match ch {
            '(' | '[' | '{' | '<' => {
                depth += 1;
                current.push(ch);
            }
            ')' | ']' | '}' | '>' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                push_param(&mut params, &current);
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    push_param(&mut params, &current);
    params
}

fn push_param(params: &mut Vec<String>, piece: &str) {
    let piece = piece
        .trim()
        .trim_start_matches("...")
        .trim_start_matches('*')
        .trim_start();
    if piece.is_empty() {
        return;
    }
    if piece.starts_with('{') || piece.starts_with('[') {
        params.push(format!("arg{}", params.len()));
        return;
    }
    if let Some(m) = IDENT_RE.find(piece) {
        params.push(m.as_str().to_string());
    }
}

/// Contiguous single-line comments directly above `idx`, joined in order.
///
/// Stops at the first blank or non-comment line, so a comment separated
/// from the declaration by a blank line is not attached.
pub(crate) fn leading_line_comments(lines: &[&str], idx: usize, marker: &str) -> Option<String> {
    let mut collected: Vec<&str> = Vec::new();
    let mut i = idx;
    while i > 0 {
        let line = lines[i - 1].trim_start();
        match line.strip_prefix(marker) {
            Some(rest) => {
                collected.push(rest.trim());
                i -= 1;
            }
            None => break,
        }
    }
    if collected.is_empty() {
        return None;
    }
    collected.reverse();
    Some(collected.join("\n"))
}

/// Block comment whose closing `*/` sits on the line directly above `idx`.
///
/// Leading `*` decorations are stripped; decoration-only lines are dropped.
pub(crate) fn leading_block_comment(lines: &[&str], idx: usize) -> Option<String> {
    if idx == 0 || !lines[idx - 1].trim().ends_with("*/") {
        return None;
    }

    let mut content: Vec<String> = Vec::new();
    let mut i = idx;
    loop {
        if i == 0 {
            return None;
        }
        i -= 1;
        let line = lines[i].trim();
        let opened = line.starts_with("/*");
        let text = line
            .trim_start_matches("/**")
            .trim_start_matches("/*")
            .trim_end_matches("*/")
            .trim()
            .trim_start_matches('*')
            .trim();
        if !text.is_empty() {
            content.push(text.to_string());
        }
        if opened {
            break;
        }
    }
    content.reverse();
    if content.is_empty() {
        None
    } else {
        Some(content.join("\n"))
    }
}

/// Byte range of the brace-delimited body opening at the first `{` at or
/// after `from`. Returns `(after_open, close)`, exclusive of both braces.
///
/// Braces inside string literals are counted too; that is an accepted
/// limitation of the heuristic. An unterminated body yields `None` and the
/// caller skips the declaration.
pub(crate) fn brace_body(source: &str, from: usize) -> Option<(usize, usize)> {
    let open = from + source[from..].find('{')?;
    let mut depth = 0i32;
    for (i, ch) in source[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((open + 1, open + i));
                }
            }
            _ => {}
        }
    }
    None
}

/// 1-indexed line number of a byte offset.
pub(crate) fn line_of_offset(source: &str, offset: usize) -> usize {
    source[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_params_plain() {
        assert_eq!(split_params("a, b"), vec!["a", "b"]);
        assert_eq!(split_params(""), Vec::<String>::new());
        assert_eq!(split_params("  "), Vec::<String>::new());
    }

    #[test]
    fn test_split_params_annotations_and_defaults() {
        assert_eq!(split_params("x: int, y: str = 'a'"), vec!["x", "y"]);
        assert_eq!(split_params("size: number, factor = 2"), vec!["size", "factor"]);
        assert_eq!(split_params("a, b = [1, 2]"), vec!["a", "b"]);
        assert_eq!(split_params("cb: Map<string, number>"), vec!["cb"]);
    }

    #[test]
    fn test_split_params_rest_and_star() {
        assert_eq!(split_params("a, *args, **kwargs"), vec!["a", "args", "kwargs"]);
        assert_eq!(split_params("first, ...rest"), vec!["first", "rest"]);
        // Bare positional/keyword markers carry no name.
        assert_eq!(split_params("a, *, b"), vec!["a", "b"]);
        assert_eq!(split_params("a, /, b"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_params_destructuring_placeholder() {
        assert_eq!(split_params("{ name, count }, flag"), vec!["arg0", "flag"]);
        assert_eq!(split_params("[first, second]"), vec!["arg0"]);
    }

    #[test]
    fn test_leading_line_comments() {
        let lines = vec!["# first", "# second", "def f():"];
        assert_eq!(
            leading_line_comments(&lines, 2, "#"),
            Some("first\nsecond".to_string())
        );

        let broken = vec!["# stale", "", "def f():"];
        assert_eq!(leading_line_comments(&broken, 2, "#"), None);
    }

    #[test]
    fn test_leading_block_comment() {
        let lines = vec!["/**", " * Tracks stock.", " */", "class Inventory {"];
        assert_eq!(
            leading_block_comment(&lines, 3),
            Some("Tracks stock.".to_string())
        );

        let single = vec!["/* One liner. */", "function f() {"];
        assert_eq!(leading_block_comment(&single, 1), Some("One liner.".to_string()));

        let none = vec!["const x = 1;", "function f() {"];
        assert_eq!(leading_block_comment(&none, 1), None);
    }

    #[test]
    fn test_brace_body() {
        let src = "class A { m() { return 1; } }";
        let (start, end) = brace_body(src, 0).unwrap();
        assert_eq!(&src[start..end], " m() { return 1; } ");

        assert_eq!(brace_body("class A {", 0), None);
        assert_eq!(brace_body("no braces", 0), None);
    }

    #[test]
    fn test_line_of_offset() {
        let src = "a\nb\nc";
        assert_eq!(line_of_offset(src, 0), 1);
        assert_eq!(line_of_offset(src, 2), 2);
        assert_eq!(line_of_offset(src, 4), 3);
    }
}
