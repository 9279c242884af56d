//! Scaffolding workflow: starter files first, then the registration block.

use std::io::Write;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::core::error::{Result, ScaffoldError};
use crate::core::templates::{RegistrationContext, RenderContext, TemplateSet};
use crate::generation::request::GenerationRequest;
use crate::generation::target::FileTarget;
use crate::infrastructure::output::{FileSystemOutput, OutputService};

/// Outcome of a run that was not aborted
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    /// Starter files written, in order
    pub written: Vec<PathBuf>,
    /// Non-fatal failures reported along the way
    pub failures: Vec<ScaffoldError>,
}

impl ScaffoldReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders starter files for each requested name and prints registration snippets
pub struct Scaffolder<'a, O = FileSystemOutput> {
    request: &'a GenerationRequest,
    templates: &'a TemplateSet,
    output: O,
}

impl<'a> Scaffolder<'a> {
    pub fn new(request: &'a GenerationRequest, templates: &'a TemplateSet) -> Self {
        Self::with_output(request, templates, FileSystemOutput::new())
    }
}

impl<'a, O: OutputService> Scaffolder<'a, O> {
    pub fn with_output(request: &'a GenerationRequest, templates: &'a TemplateSet, output: O) -> Self {
        Self {
            request,
            templates,
            output,
        }
    }

    /// Run the whole batch, writing progress and snippets to `out`
    ///
    /// Names are handled in order. A conflicting file or a failed create stops
    /// the batch and is returned; files written before that stay on disk.
    /// Directory and render failures are printed, recorded in the report and
    /// do not stop the batch.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ScaffoldReport> {
        let mut report = ScaffoldReport::default();

        for name in &self.request.names {
            if let Some(path) = self.make_starter(name, out, &mut report)? {
                report.written.push(path);
            }
        }

        self.print_registration(out, &mut report)?;

        info!(
            written = report.written.len(),
            failures = report.failures.len(),
            "Scaffolding finished"
        );
        Ok(report)
    }

    fn render_context(&self, name: &str) -> RenderContext {
        RenderContext {
            name: name.to_string(),
            parent: self.request.parent_segments(),
            org: self.request.org.clone(),
            project: self.request.project.clone(),
        }
    }

    fn make_starter<W: Write>(
        &self,
        name: &str,
        out: &mut W,
        report: &mut ScaffoldReport,
    ) -> Result<Option<PathBuf>> {
        let target = FileTarget::new(
            &self.request.module_path,
            self.request.parent.as_ref(),
            name,
        );

        if let Err(err) = self.output.ensure_directory(&target.dir) {
            self.record(err, out, report)?;
        }

        self.output
            .check_conflict(&target.file, self.request.overwrite)?;

        // a failed render leaves no file behind
        let body = match self.templates.render_starter(&self.render_context(name)) {
            Ok(body) => body,
            Err(err) => {
                self.record(err, out, report)?;
                return Ok(None);
            }
        };

        self.output
            .write_file(&target.file, &body, self.request.overwrite)?;

        writeln!(out, "written starter code to '{}'", target.file.display())?;
        Ok(Some(target.file))
    }

    /// Print and keep a recoverable failure; anything else stops the batch
    fn record<W: Write>(
        &self,
        err: ScaffoldError,
        out: &mut W,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        if !err.is_recoverable() {
            return Err(err);
        }
        warn!(%err, "Continuing after failure");
        writeln!(out, "{err}")?;
        report.failures.push(err);
        Ok(())
    }

    fn print_registration<W: Write>(&self, out: &mut W, report: &mut ScaffoldReport) -> Result<()> {
        let mut block = String::new();

        match &self.request.parent {
            None => {
                for name in &self.request.names {
                    match self.templates.render_registration(&self.render_context(name)) {
                        Ok(snippet) => block.push_str(&snippet),
                        Err(err) => {
                            block.push_str(&format!("{err}\n"));
                            report.failures.push(err);
                        }
                    }
                }
            }
            Some(parent) => {
                let context = RegistrationContext {
                    names: self.request.names.clone(),
                    parent: parent.segments().to_vec(),
                    org: self.request.org.clone(),
                    project: self.request.project.clone(),
                };
                match self.templates.render_registration_with_parent(&context) {
                    Ok(snippet) => block.push_str(&snippet),
                    Err(err) => {
                        block.push_str(&format!("{err}\n"));
                        report.failures.push(err);
                    }
                }
            }
        }

        write!(
            out,
            "\nMain needs to be manually modified, sample below\n```rust\n{block}```\n"
        )?;
        Ok(())
    }
}
