//! Output Composer.
//!
//! Joins per-component declaration blocks in fetch order, optionally wraps
//! them in a namespace, optionally strips export markers, and reformats the
//! final text.

use crate::format::format_declarations;

/// How the composed output is finalized.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Wrap all declarations in `namespace <name> { ... }`.
    pub namespace: Option<String>,
    /// Keep `export` markers. When false every marker is stripped.
    pub exports: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            namespace: Some("Storyblok".into()),
            exports: false,
        }
    }
}

/// Compose the final declaration text from the per-component blocks.
///
/// Block order must be the component fetch order; the composer preserves it
/// verbatim.
pub fn compose(blocks: &[String], options: &ComposeOptions) -> String {
    let mut output = blocks.join("\n");

    if !options.exports {
        output = output.replace("export ", "");
    }

    if let Some(namespace) = options.namespace.as_deref() {
        output = wrap_namespace(&output, namespace);
    }

    format_declarations(&output)
}

fn wrap_namespace(text: &str, namespace: &str) -> String {
    let mut wrapped = String::with_capacity(text.len() + namespace.len() + 16);
    wrapped.push_str("namespace ");
    wrapped.push_str(namespace);
    wrapped.push_str(" {\n");
    for line in text.lines() {
        if !line.is_empty() {
            wrapped.push_str("  ");
            wrapped.push_str(line);
        }
        wrapped.push('\n');
    }
    wrapped.push_str("}\n");
    wrapped
}
