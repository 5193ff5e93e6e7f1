//! Entity structures produced by source analysis.

use std::fmt;

/// Kind of callable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Function,
    Method,
}

impl EntityKind {
    /// Convert to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Function => "function",
            EntityKind::Method => "method",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A discovered function or method.
#[derive(Debug, Clone)]
pub struct CodeEntity {
    /// The identifier. Never empty; private-named entities are never emitted.
    pub name: String,
    /// Function or method.
    pub kind: EntityKind,
    /// Best-effort parameter names in positional order. Types are unknown.
    pub params: Vec<String>,
    /// For methods: the enclosing class name.
    pub owner: Option<String>,
    /// Leading comment or docstring text, when one sits directly above
    /// (or, for Python, directly inside) the declaration.
    pub doc: Option<String>,
    /// 1-indexed line of the declaration.
    pub line: usize,
}

impl CodeEntity {
    /// Get the fully qualified name (Owner.name for methods).
    pub fn qualified_name(&self) -> String {
        if let Some(ref owner) = self.owner {
            format!("{}.{}", owner, self.name)
        } else {
            self.name.clone()
        }
    }
}

/// A discovered class and its public methods, in source order.
#[derive(Debug, Clone)]
pub struct ClassEntity {
    pub name: String,
    pub doc: Option<String>,
    pub line: usize,
    pub methods: Vec<CodeEntity>,
}

/// Everything an analyzer recovered from one source file.
///
/// Both lists preserve first-seen source order. An outline with no entities
/// is a valid result; downstream stages render an empty shell and say so.
#[derive(Debug, Clone)]
pub struct SourceOutline {
    /// Language identifier of the analyzer that produced this outline.
    pub language: String,
    /// Top-level functions not bound to a class.
    pub functions: Vec<CodeEntity>,
    /// Classes with their methods.
    pub classes: Vec<ClassEntity>,
}

impl SourceOutline {
    /// Create an empty outline for a language.
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            functions: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Whether nothing was discovered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total method count across all classes.
    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }
}
