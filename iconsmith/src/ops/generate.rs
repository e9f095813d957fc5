//! Generate operation - write components and the index for a selection.

use std::{collections::HashSet, path::Path};

use eyre::{Context, Result, bail};
use iconsmith_codegen::{BatchGenerator, FailedEntry, IndexError, IndexWriter, Progress};
use iconsmith_core::{ComponentEntry, FileSetView, NamingConfig, scan};

use crate::reports::{
    FailureRow, GenerateOutcome, GenerateReport, PreviewResult, WrittenResult, collision_warnings,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Destination root; created when missing.
    pub output_dir: &'a Path,
    /// Case-insensitive substring filter on relative paths.
    pub filter: &'a str,
    /// Relative paths to narrow the filtered selection to. Empty means all.
    pub only: &'a [String],
    /// Whether to mirror the source layout.
    pub preserve_structure: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Per-entry failures end up in the report; only problems that prevent the
/// batch from starting are returned as errors.
pub fn generate<F>(
    source: &Path,
    naming: NamingConfig,
    opts: GenerateOptions,
    on_progress: F,
) -> Result<GenerateReport>
where
    F: FnMut(Progress<'_>),
{
    let framework = naming.framework;
    let files = scan(source).wrap_err("Failed to scan source directory")?;

    let mut view = FileSetView::new(files, naming);
    view.set_search(opts.filter);

    let selection = select(&view, opts.only)?;
    if selection.is_empty() {
        bail!("no SVG files selected in '{}'", source.display());
    }
    log::debug!("selected {} of {} files", selection.len(), view.total());

    let warnings = selection_warnings(&view, &selection);
    let generator = BatchGenerator::new(opts.output_dir, framework)
        .preserve_structure(opts.preserve_structure);

    let outcome = if opts.dry_run {
        let preview = generator.preview(&selection);
        GenerateOutcome::Preview(PreviewResult {
            files: preview.files,
            failures: failure_rows(&preview.failed),
        })
    } else {
        std::fs::create_dir_all(opts.output_dir).wrap_err_with(|| {
            format!(
                "Failed to create output directory '{}'",
                opts.output_dir.display()
            )
        })?;

        let result = generator
            .generate(&selection, on_progress)
            .wrap_err("Failed to generate components")?;

        let index = IndexWriter::new(opts.output_dir)
            .write(&result.index_manifest())
            .map_err(|err| {
                let IndexError::Write { source, .. } = &err;
                log::warn!("{}: {}", err, source);
                format!("{}: {}", err, source)
            });

        GenerateOutcome::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            generated: result.succeeded.len(),
            failures: failure_rows(&result.failed),
            index,
        })
    };

    Ok(GenerateReport {
        framework,
        warnings,
        outcome,
    })
}

/// The visible entries, narrowed to `only` when it is not empty. Scan order
/// is kept either way.
fn select(view: &FileSetView, only: &[String]) -> Result<Vec<ComponentEntry>> {
    if only.is_empty() {
        return Ok(view.visible().to_vec());
    }

    let wanted: Vec<String> = only.iter().map(|p| p.replace('\\', "/")).collect();
    if let Some(missing) = wanted.iter().find(|p| view.find(p).is_none()) {
        bail!("no SVG file '{}' in the source directory", missing);
    }

    Ok(view
        .visible()
        .iter()
        .filter(|entry| wanted.iter().any(|p| p == entry.relative_path()))
        .cloned()
        .collect())
}

fn failure_rows(failed: &[FailedEntry]) -> Vec<FailureRow> {
    failed
        .iter()
        .map(|failed| FailureRow {
            relative_path: failed.entry.relative_path().to_string(),
            reason: failed.reason(),
        })
        .collect()
}

/// Collision warnings restricted to the entries actually being generated.
fn selection_warnings(view: &FileSetView, selection: &[ComponentEntry]) -> Vec<String> {
    let selected: HashSet<&str> = selection.iter().map(|e| e.relative_path()).collect();
    let collisions: Vec<_> = view
        .collisions()
        .into_iter()
        .filter(|c| {
            c.relative_paths
                .iter()
                .filter(|p| selected.contains(p.as_str()))
                .count()
                > 1
        })
        .collect();

    collision_warnings(&collisions)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use iconsmith_core::Framework;
    use tempfile::TempDir;

    use super::*;

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nav")).unwrap();
        fs::write(temp.path().join("home.svg"), "<svg><path d=\"M1 1\"/></svg>").unwrap();
        fs::write(temp.path().join("nav/up.svg"), "<svg><path d=\"M2 2\"/></svg>").unwrap();
        fs::write(temp.path().join("nav/down.svg"), "<svg><path d=\"M3 3\"/></svg>").unwrap();
        temp
    }

    fn options<'a>(output_dir: &'a Path, only: &'a [String]) -> GenerateOptions<'a> {
        GenerateOptions {
            output_dir,
            filter: "",
            only,
            preserve_structure: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_generate_creates_output_dir() {
        let src = fixture();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("components/icons");

        let mut progress = Vec::new();
        let report = generate(
            src.path(),
            NamingConfig::default(),
            options(&dest, &[]),
            |p| progress.push(p.processed),
        )
        .unwrap();

        assert!(report.is_success());
        assert_eq!(progress, vec![1, 2, 3]);
        assert!(dest.join("index.js").is_file());
        assert!(dest.join("NavUpComponent.vue").is_file());
    }

    #[test]
    fn test_generate_only_narrows_selection() {
        let src = fixture();
        let out = TempDir::new().unwrap();
        let only = vec!["nav\\up.svg".to_string(), "home.svg".to_string()];

        let report = generate(
            src.path(),
            NamingConfig::new("", "", Framework::React),
            options(out.path(), &only),
            |_| {},
        )
        .unwrap();

        let GenerateOutcome::Written(written) = &report.outcome else {
            panic!("expected written outcome");
        };
        assert_eq!(written.generated, 2);
        assert!(out.path().join("Home.jsx").is_file());
        assert!(out.path().join("NavUp.jsx").is_file());
        assert!(!out.path().join("NavDown.jsx").exists());

        let index = fs::read_to_string(out.path().join("index.js")).unwrap();
        let home = index.find("as Home }").unwrap();
        let up = index.find("as NavUp }").unwrap();
        assert!(home < up);
    }

    #[test]
    fn test_generate_unknown_only_path() {
        let src = fixture();
        let out = TempDir::new().unwrap();
        let only = vec!["nav/left.svg".to_string()];

        let err = generate(
            src.path(),
            NamingConfig::default(),
            options(out.path(), &only),
            |_| {},
        )
        .unwrap_err();

        assert!(err.to_string().contains("nav/left.svg"));
    }

    #[test]
    fn test_generate_empty_selection() {
        let src = fixture();
        let out = TempDir::new().unwrap();
        let mut opts = options(out.path(), &[]);
        opts.filter = "nothing-matches";

        assert!(generate(src.path(), NamingConfig::default(), opts, |_| {}).is_err());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let src = fixture();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("new");
        let mut opts = options(&dest, &[]);
        opts.dry_run = true;
        opts.preserve_structure = true;

        let report = generate(src.path(), NamingConfig::default(), opts, |_| {}).unwrap();

        let GenerateOutcome::Preview(preview) = &report.outcome else {
            panic!("expected preview outcome");
        };
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "HomeComponent.vue",
                "nav/NavDownComponent.vue",
                "nav/NavUpComponent.vue",
                "index.js"
            ]
        );
        assert!(preview.failures.is_empty());
        assert!(!dest.exists());
    }

    #[test]
    fn test_dry_run_reports_collisions() {
        let src = TempDir::new().unwrap();
        fs::create_dir(src.path().join("a")).unwrap();
        fs::write(src.path().join("a/b.svg"), "<svg><path d=\"M1 1\"/></svg>").unwrap();
        fs::write(src.path().join("a-b.svg"), "<svg><path d=\"M2 2\"/></svg>").unwrap();
        let out = TempDir::new().unwrap();
        let mut opts = options(out.path(), &[]);
        opts.dry_run = true;

        let report = generate(src.path(), NamingConfig::default(), opts, |_| {}).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.warnings.len(), 1);
        let GenerateOutcome::Preview(preview) = &report.outcome else {
            panic!("expected preview outcome");
        };
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["ABComponent.vue", "index.js"]);
        assert_eq!(preview.failures.len(), 1);
        assert_eq!(preview.failures[0].relative_path, "a-b.svg");
    }

    #[test]
    fn test_failures_are_reported_not_raised() {
        let src = fixture();
        let out = TempDir::new().unwrap();
        fs::create_dir(out.path().join("HomeComponent.vue")).unwrap();

        let report = generate(
            src.path(),
            NamingConfig::default(),
            options(out.path(), &[]),
            |_| {},
        )
        .unwrap();

        assert!(!report.is_success());
        let GenerateOutcome::Written(written) = &report.outcome else {
            panic!("expected written outcome");
        };
        assert_eq!(written.generated, 2);
        assert_eq!(written.failures.len(), 1);
        assert_eq!(written.failures[0].relative_path, "home.svg");
        assert!(written.index.is_ok());
    }
}
