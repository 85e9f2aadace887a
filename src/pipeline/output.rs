//! Where reports go and which format they take.

use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Report destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// True only for stdout attached to a TTY.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Format implied by an output file name, if its extension is recognized.
fn format_for_extension(path: &Path) -> Option<ReportFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(ReportFormat::Json),
        "csv" => Some(ReportFormat::Csv),
        "md" | "markdown" => Some(ReportFormat::Markdown),
        _ => None,
    }
}

/// Resolve `Auto` to a concrete format.
///
/// A terminal gets the browser. A file gets the format its extension names,
/// falling back to the summary, as does a pipe. Explicit formats pass through.
pub fn auto_detect_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    if format != ReportFormat::Auto {
        return format;
    }
    match target {
        OutputTarget::File(path) => format_for_extension(path).unwrap_or(ReportFormat::Summary),
        OutputTarget::Stdout if target.is_terminal() => ReportFormat::Tui,
        OutputTarget::Stdout => ReportFormat::Summary,
    }
}

/// Color is on unless `--no-color` or `NO_COLOR` says otherwise.
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}

pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        let path = PathBuf::from("cars.json");
        assert_eq!(
            OutputTarget::from_option(Some(path.clone())),
            OutputTarget::File(path)
        );
    }

    #[test]
    fn test_explicit_format_wins() {
        let target = OutputTarget::File(PathBuf::from("cars.json"));
        assert_eq!(
            auto_detect_format(ReportFormat::Markdown, &target),
            ReportFormat::Markdown
        );
    }

    #[test]
    fn test_auto_format_from_extension() {
        for (name, expected) in [
            ("cars.json", ReportFormat::Json),
            ("cars.CSV", ReportFormat::Csv),
            ("cars.md", ReportFormat::Markdown),
            ("cars.txt", ReportFormat::Summary),
            ("cars", ReportFormat::Summary),
        ] {
            let target = OutputTarget::File(PathBuf::from(name));
            assert_eq!(auto_detect_format(ReportFormat::Auto, &target), expected, "{name}");
        }
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        write_output("Name\nHonda Civic 2022", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Name\nHonda Civic 2022"
        );
    }

    #[test]
    fn test_write_output_to_missing_dir_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = OutputTarget::File(dir.path().join("missing").join("report.json"));
        assert!(write_output("{}", &target, true).is_err());
    }

    #[test]
    fn test_no_color_flag() {
        assert!(!should_use_color(true));
    }
}
