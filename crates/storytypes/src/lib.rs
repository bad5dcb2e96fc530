//! Storyblok TypeScript declaration generator.
//!
//! Wires the Management API client and the translation engine into one
//! generation run: fetch groups and components, build the group index,
//! assemble and compile every component schema, compose the declaration file,
//! write it.
//!
//! The translation engine itself lives in `storytypes-typegen`; retrieval in
//! `storytypes-client`. This crate adds the entry point and the CLI.

pub mod cli;
pub mod generate;

pub use generate::{GenerateError, GeneratorOptions, generate, generate_from, render};
