//! Output backends for the translation engine.
//!
//! Each backend takes a normalized [`SchemaNode`](crate::ir::SchemaNode) and
//! produces one declaration text block per component.

pub mod typescript;

pub use typescript::{CompileError, TypeScriptOptions, generate_typescript};
