//! Jest skeleton rendering for JavaScript sources (CommonJS imports).

use super::common::{export_names, render_jest_suite};
use super::TestGenerator;
use crate::analysis::SourceOutline;

pub struct JavaScriptGenerator;

impl JavaScriptGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JavaScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGenerator for JavaScriptGenerator {
    fn language_id(&self) -> &'static str {
        "javascript"
    }

    fn render(&self, module: &str, outline: &SourceOutline) -> String {
        let names = export_names(outline);
        let mut out = String::new();
        if names.is_empty() {
            out.push_str(&format!("// Nothing to import from './{module}'\n\n"));
        } else {
            out.push_str(&format!(
                "const {{ {} }} = require('./{module}');\n\n",
                names.join(", ")
            ));
        }
        out.push_str(&render_jest_suite(module, outline));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ClassEntity, CodeEntity, EntityKind};

    fn render(outline: &SourceOutline) -> String {
        JavaScriptGenerator::new().render("inventory", outline)
    }

    #[test]
    fn test_empty_outline_renders_valid_shell() {
        let rendered = render(&SourceOutline::empty("javascript"));

        assert!(rendered.starts_with("// Nothing to import from './inventory'"));
        assert!(rendered.contains("describe('inventory', () => {"));
        assert!(rendered.contains("No functions or classes were found"));
        assert!(rendered.contains("test('contains no generated cases', () => {"));
        assert!(rendered.ends_with("});\n"));
    }

    #[test]
    fn test_function_and_class_stubs() {
        let mut outline = SourceOutline::empty("javascript");
        outline.functions.push(CodeEntity {
            name: "formatLabel".to_string(),
            kind: EntityKind::Function,
            params: vec!["text".to_string()],
            owner: None,
            doc: None,
            line: 1,
        });
        outline.classes.push(ClassEntity {
            name: "Inventory".to_string(),
            doc: None,
            line: 5,
            methods: vec![CodeEntity {
                name: "addItem".to_string(),
                kind: EntityKind::Method,
                params: vec!["name".to_string(), "count".to_string()],
                owner: Some("Inventory".to_string()),
                doc: None,
                line: 7,
            }],
        });
        let rendered = render(&outline);

        assert!(rendered.starts_with("const { formatLabel, Inventory } = require('./inventory');"));
        assert!(rendered.contains("test('should execute formatLabel successfully', () => {"));
        assert!(rendered.contains("// const result = formatLabel('test_text');"));
        assert!(rendered.contains("test('should construct a Inventory instance', () => {"));
        assert!(rendered.contains("const instance = new Inventory();"));
        assert!(rendered.contains("// const result = instance.addItem('test_name', 1);"));
        assert!(rendered.contains("test('should handle edge cases for addItem', () => {"));

        // Balanced delimiters.
        assert_eq!(rendered.matches('{').count(), rendered.matches('}').count());
        assert_eq!(rendered.matches('(').count(), rendered.matches(')').count());
    }
}
