//! Jest skeleton rendering for TypeScript sources (ESM imports).

use super::common::{export_names, render_jest_suite};
use super::TestGenerator;
use crate::analysis::SourceOutline;

pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TypeScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGenerator for TypeScriptGenerator {
    fn language_id(&self) -> &'static str {
        "typescript"
    }

    fn render(&self, module: &str, outline: &SourceOutline) -> String {
        let names = export_names(outline);
        let mut out = String::new();
        if names.is_empty() {
            out.push_str(&format!("// Nothing to import from './{module}'\n\n"));
        } else {
            out.push_str(&format!(
                "import {{ {} }} from './{module}';\n\n",
                names.join(", ")
            ));
        }
        out.push_str(&render_jest_suite(module, outline));
        out
    }
}
