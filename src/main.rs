//! cmdgen CLI entrypoint
//! Parses command-line arguments and dispatches to the scaffolder.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use cmdgen::core::ScaffoldError;
use cmdgen::core::templates::TemplateSet;
use cmdgen::generation::{GenerationRequest, RequestOverrides, Scaffolder, resolve};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cmdgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Names of the subcommands to generate
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// Path of parent commands, e.g. foo/bar
    #[arg(long)]
    parent: Option<String>,

    /// Organization named in the generated code
    #[arg(long)]
    org: Option<String>,

    /// Project name used in the generated code [default: name of this executable]
    #[arg(long)]
    project: Option<String>,

    /// Parent directory of the internal source directory [default: directory of this executable]
    #[arg(long)]
    module_path: Option<PathBuf>,

    /// Replace starter files that already exist
    #[arg(long)]
    overwrite: bool,

    /// Log debug output
    #[arg(long)]
    debug: bool,

    /// Directory with custom starter.rs.tera, registration.rs.tera and registration_with_parent.rs.tera
    #[arg(long)]
    template_dir: Option<PathBuf>,
}

impl From<Cli> for RequestOverrides {
    fn from(cli: Cli) -> Self {
        Self {
            names: cli.names,
            parent: cli.parent,
            org: cli.org,
            project: cli.project,
            module_path: cli.module_path,
            overwrite: cli.overwrite,
            debug: cli.debug,
            template_dir: cli.template_dir,
        }
    }
}

fn main() -> ExitCode {
    let argv0 = std::env::args().next().unwrap_or_default();
    let resolved = resolve(Cli::parse().into(), &argv0, std::env::current_exe());

    // Initialize logging with default level INFO, DEBUG with --debug
    let debug = resolved.as_ref().is_ok_and(|request| request.debug);
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();

    let request = match resolved {
        Ok(request) => request,
        Err(err) => return fail(&err),
    };
    debug!(?request, "Resolved generation request");

    match scaffold(&request) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ScaffoldError>() {
            Some(scaffold_err) => fail(scaffold_err),
            None => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Load templates and run the batch against stdout
fn scaffold(request: &GenerationRequest) -> anyhow::Result<()> {
    info!(
        names = ?request.names,
        module_path = %request.module_path.display(),
        "Generating starter code"
    );

    let templates = match &request.template_dir {
        Some(dir) => TemplateSet::from_dir(dir)?,
        None => TemplateSet::embedded()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = Scaffolder::new(request, &templates).run(&mut out)?;
    out.flush().context("Failed to flush stdout")?;

    debug!(written = ?report.written, "Starter files written");
    if !report.is_clean() {
        warn!(failures = report.failures.len(), "Finished with reported failures");
    }
    Ok(())
}

/// Report a scaffolding error to the user and pick the exit status
fn fail(err: &ScaffoldError) -> ExitCode {
    match err {
        ScaffoldError::FileConflict { path } => {
            println!("Exiting. File already exists. Use --overwrite to ignore.");
            println!("  {}", path.display());
        }
        other => println!("{other}"),
    }
    error!(code = err.exit_code(), "{err}");
    ExitCode::from(err.exit_code() as u8)
}
