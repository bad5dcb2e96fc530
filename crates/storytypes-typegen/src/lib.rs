//! Storyblok component schemas to TypeScript declarations.
//!
//! `storytypes-typegen` translates the dynamic field schemas delivered by the
//! Storyblok Management API into normalized schema nodes and emits one static
//! type declaration per component.
//!
//! # Architecture
//!
//! ```text
//! Raw payloads           Engine                    Output
//! ────────────────   ───────────────────────   ─────────────────
//! RawComponent  ──┐   GroupIndex (groups.rs)
//! RawField      ──┼─> map_field (mapper.rs) ─┐
//! ComponentGroup ─┘   assemble (assemble.rs)─┼─> SchemaNode (ir.rs)
//!                                            └─> TypeScript block
//!                                                (output/typescript.rs)
//!                                                then compose (compose.rs)
//! ```
//!
//! # Example
//!
//! ```
//! use storytypes_typegen::{
//!     GroupIndex, assemble, compose, generate_typescript, ComposeOptions,
//!     TypeScriptOptions, schema::RawComponent,
//! };
//!
//! let component: RawComponent = serde_json::from_value(serde_json::json!({
//!     "name": "button",
//!     "schema": {
//!         "text": { "type": "text", "required": true }
//!     }
//! }))
//! .unwrap();
//!
//! let index = GroupIndex::build(&[], std::slice::from_ref(&component));
//! let node = assemble(&component, &index);
//! let block = generate_typescript(&node, &TypeScriptOptions::default()).unwrap();
//! assert!(block.contains("export interface Button"));
//!
//! let output = compose(&[block], &ComposeOptions::default());
//! assert!(output.starts_with("namespace Storyblok {"));
//! ```

pub mod assemble;
pub mod compose;
pub mod format;
pub mod groups;
pub mod ir;
pub mod mapper;
pub mod output;
pub mod schema;

pub use assemble::assemble;
pub use compose::{ComposeOptions, compose};
pub use groups::GroupIndex;
pub use ir::{ArrayItems, FieldNode, ObjectNode, SchemaNode, pascal_type_name};
pub use mapper::map_field;
pub use output::{CompileError, TypeScriptOptions, generate_typescript};
