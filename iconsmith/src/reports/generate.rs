//! Generate command report data structures.

use std::path::PathBuf;

use iconsmith_codegen::PreviewFile;
use iconsmith_core::Framework;

use super::output::{Output, Report};

/// Report data from component generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Framework the components were generated for.
    pub framework: Framework,
    /// Name collision warnings.
    pub warnings: Vec<String>,
    /// Generation outcome (files written or preview).
    pub outcome: GenerateOutcome,
}

/// Outcome of a generate run.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Destination root.
    pub output_dir: PathBuf,
    /// Number of components written.
    pub generated: usize,
    /// Entries that could not be generated, in processing order.
    pub failures: Vec<FailureRow>,
    /// Path of the written index, or why it could not be written.
    pub index: Result<PathBuf, String>,
}

/// One failed entry.
#[derive(Debug)]
pub struct FailureRow {
    pub relative_path: String,
    pub reason: String,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated, index last.
    pub files: Vec<PreviewFile>,
    /// Entries that a real run would fail on.
    pub failures: Vec<FailureRow>,
}

impl GenerateReport {
    /// False when any entry failed, or would fail in a dry run, or the index
    /// could not be written.
    pub fn is_success(&self) -> bool {
        match &self.outcome {
            GenerateOutcome::Written(written) => {
                written.failures.is_empty() && written.index.is_ok()
            }
            GenerateOutcome::Preview(preview) => preview.failures.is_empty(),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.outcome {
            GenerateOutcome::Written(written) => self.render_written(out, written),
            GenerateOutcome::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Output", &written.output_dir.display().to_string());
        match &written.index {
            Ok(path) => out.key_value("Index", &path.display().to_string()),
            Err(reason) => out.warning(reason),
        }
        out.newline();

        out.preformatted(&format!(
            "Completed: {} {} components generated, {} failures",
            written.generated,
            self.framework.display_name(),
            written.failures.len()
        ));

        if !written.failures.is_empty() {
            out.newline();
            render_failures(out, &written.failures);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated, {} failures",
            preview.files.len(),
            preview.failures.len()
        ));

        if !preview.failures.is_empty() {
            out.newline();
            render_failures(out, &preview.failures);
        }
    }
}

fn render_failures(out: &mut dyn Output, failures: &[FailureRow]) {
    out.section("Failures");
    for failure in failures {
        out.list_item(&format!("{}: {}", failure.relative_path, failure.reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn written(failures: Vec<FailureRow>, index: Result<PathBuf, String>) -> GenerateReport {
        GenerateReport {
            framework: Framework::React,
            warnings: vec![],
            outcome: GenerateOutcome::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                generated: 2,
                failures,
                index,
            }),
        }
    }

    #[test]
    fn test_render_summary_with_failures() {
        let report = written(
            vec![FailureRow {
                relative_path: "nav/up.svg".to_string(),
                reason: "failed to read 'nav/up.svg': denied".to_string(),
            }],
            Ok(PathBuf::from("out/index.js")),
        );

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_success());
        assert_eq!(
            out.lines,
            vec![
                "Output: out",
                "Index: out/index.js",
                "",
                "Completed: 2 React components generated, 1 failures",
                "",
                "Failures:",
                "  - nav/up.svg: failed to read 'nav/up.svg': denied",
            ]
        );
    }

    #[test]
    fn test_index_failure_is_not_success() {
        let report = written(vec![], Err("failed to write index".to_string()));

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_success());
        assert_eq!(out.lines[1], "warning: failed to write index");
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            framework: Framework::Vue,
            warnings: vec!["AB is derived from 'a/b.svg', 'a-b.svg'".to_string()],
            outcome: GenerateOutcome::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "index.js".to_string(),
                    content: "/**/".to_string(),
                }],
                failures: vec![FailureRow {
                    relative_path: "a-b.svg".to_string(),
                    reason: "component name 'AB' is already generated from 'a/b.svg'"
                        .to_string(),
                }],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_success());
        assert_eq!(
            out.lines,
            vec![
                "warning: AB is derived from 'a/b.svg', 'a-b.svg'",
                "── index.js ──",
                "/**/",
                "── Summary ──",
                "1 files would be generated, 1 failures",
                "",
                "Failures:",
                "  - a-b.svg: component name 'AB' is already generated from 'a/b.svg'",
            ]
        );
    }

    #[test]
    fn test_clean_preview_is_success() {
        let report = GenerateReport {
            framework: Framework::React,
            warnings: vec![],
            outcome: GenerateOutcome::Preview(PreviewResult {
                files: vec![],
                failures: vec![],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(report.is_success());
        assert_eq!(out.lines.last().unwrap(), "0 files would be generated, 0 failures");
    }
}
