//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generate::{GenerateError, GeneratorOptions, generate};

/// Environment variable consulted when `--token` is not given.
pub const TOKEN_ENV: &str = "STORYBLOK_OAUTH_TOKEN";

#[derive(Parser)]
#[command(
    name = "storytypes",
    version,
    about = "Generate TypeScript declarations from Storyblok component schemas"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Pull a space's component schemas and write type declarations
    Generate(GenerateArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Storyblok space id
    #[arg(short, long)]
    pub space: String,

    /// Management API oauth token (defaults to $STORYBLOK_OAUTH_TOKEN)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Output file
    #[arg(short, long, default_value = "src/generated/storyblok.d.ts")]
    pub output: PathBuf,

    /// Namespace wrapping the declarations
    #[arg(short, long, default_value = "Storyblok")]
    pub namespace: String,

    /// Emit bare declarations without a namespace
    #[arg(long, conflicts_with = "namespace")]
    pub no_namespace: bool,

    /// Keep export markers on the declarations
    #[arg(long)]
    pub exports: bool,
}

impl GenerateArgs {
    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            output_file: self.output.clone(),
            namespace: (!self.no_namespace).then(|| self.namespace.clone()),
            exports: self.exports,
        }
    }
}

pub fn run(cli: Cli) -> Result<(), GenerateError> {
    match cli.command {
        Command::Generate(args) => {
            let token = args
                .token
                .clone()
                .or_else(|| std::env::var(TOKEN_ENV).ok())
                .unwrap_or_default();
            generate(&token, &args.space, &args.options())
        }
    }
}
