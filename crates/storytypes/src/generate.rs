//! One full generation run: fetch, translate, compose, write.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use storytypes_client::{Client, ClientError};
use storytypes_typegen::schema::{ComponentGroup, RawComponent};
use storytypes_typegen::{
    CompileError, ComposeOptions, GroupIndex, TypeScriptOptions, assemble, compose,
    generate_typescript,
};

/// Configuration accepted by the generation entry point.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Where the declaration file is written. Parent directories are created
    /// as needed; existing content is overwritten.
    pub output_file: PathBuf,
    /// Namespace wrapping all declarations, or none.
    pub namespace: Option<String>,
    /// Keep `export` markers on the declarations.
    pub exports: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from("src/generated/storyblok.d.ts"),
            namespace: Some("Storyblok".into()),
            exports: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("an access token and a space id are required")]
    MissingCredentials,
    #[error(transparent)]
    Fetch(#[from] ClientError),
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Perform one full generation run against a space.
///
/// Fails before any network call when the credentials are missing; any later
/// failure aborts the run with nothing written.
pub fn generate(
    token: &str,
    space_id: &str,
    options: &GeneratorOptions,
) -> Result<(), GenerateError> {
    if token.trim().is_empty() || space_id.trim().is_empty() {
        return Err(GenerateError::MissingCredentials);
    }

    let client = Client::new(token)?;
    let groups = client.component_groups(space_id)?;
    let components = client.components(space_id)?;
    tracing::info!(
        components = components.len(),
        groups = groups.len(),
        "pulled component definitions"
    );

    generate_from(&groups, &components, options)
}

/// Generation from already-fetched payloads. Split out so runs can be driven
/// from snapshots or tests without a network.
pub fn generate_from(
    groups: &[ComponentGroup],
    components: &[RawComponent],
    options: &GeneratorOptions,
) -> Result<(), GenerateError> {
    let compose_options = ComposeOptions {
        namespace: options.namespace.clone(),
        exports: options.exports,
    };
    let output = render(groups, components, &compose_options)?;
    write_output(&options.output_file, &output)?;
    tracing::info!(path = %options.output_file.display(), "wrote declarations");
    Ok(())
}

/// Translate and compose without touching the filesystem.
///
/// Components compile independently, so the work fans out over a thread pool;
/// the collected blocks keep the original fetch order regardless of
/// completion order.
pub fn render(
    groups: &[ComponentGroup],
    components: &[RawComponent],
    options: &ComposeOptions,
) -> Result<String, CompileError> {
    let index = GroupIndex::build(groups, components);
    let nodes: Vec<_> = components
        .iter()
        .map(|component| assemble(component, &index))
        .collect();

    let ts_options = TypeScriptOptions::default();
    let blocks: Vec<String> = nodes
        .par_iter()
        .map(|node| generate_typescript(node, &ts_options))
        .collect::<Result<_, _>>()?;

    Ok(compose(&blocks, options))
}

/// The file sink: create parent directories, write to a sibling temp file,
/// then rename into place so the output path never holds a partial file.
fn write_output(path: &Path, output: &str) -> Result<(), GenerateError> {
    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, output).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)
}
