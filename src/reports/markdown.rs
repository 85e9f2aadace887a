//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{comparison_rows, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::catalog::{result_label, FacetOptions};
use crate::compare::{specs_by_category, ComparisonTable};
use crate::diff::DatasetDiff;
use crate::model::VehicleRecord;
use crate::utils::format_boolean;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the metadata block under the title
    include_metadata: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_metadata: true,
        }
    }

    /// Omit the metadata block
    #[must_use]
    pub const fn without_metadata(mut self) -> Self {
        self.include_metadata = false;
        self
    }

    fn write_header(&self, md: &mut String, default_title: &str, config: &ReportConfig) -> std::fmt::Result {
        let title = config.title.as_deref().unwrap_or(default_title);
        writeln!(md, "# {}\n", escape_markdown_inline(title))?;
        if !self.include_metadata {
            return Ok(());
        }
        let meta = &config.metadata;
        if let Some(path) = &meta.dataset_path {
            writeln!(md, "**Dataset:** `{path}`  ")?;
        }
        if !meta.filters.is_empty() {
            writeln!(md, "**Filters:** {}  ", escape_markdown_inline(&meta.filters.join(", ")))?;
        }
        if let Some(sort) = &meta.sort {
            writeln!(md, "**Sort:** {sort}  ")?;
        }
        writeln!(
            md,
            "**Generated:** {}\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn table_header(md: &mut String, columns: &[&str]) -> std::fmt::Result {
    writeln!(md, "| {} |", columns.join(" | "))?;
    writeln!(md, "|{}", "---|".repeat(columns.len()))
}

impl ReportGenerator for MarkdownReporter {
    fn generate_list_report(
        &self,
        records: &[&VehicleRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        self.write_header(&mut md, "Vehicle Catalog", config)?;
        writeln!(md, "{}\n", result_label(records.len()))?;
        if records.is_empty() {
            writeln!(md, "_No vehicles match the current filters._")?;
            return Ok(md);
        }

        table_header(&mut md, &["Name", "Make", "Model", "Years", "Support Type", "Video"])?;
        let shown = config.shown(records.len());
        for record in &records[..shown] {
            writeln!(
                md,
                "| {} | {} | {} | {} | {} | {} |",
                escape_markdown_table(&record.name),
                escape_markdown_table(&record.make),
                escape_markdown_table(&record.model),
                escape_markdown_table(&record.years),
                escape_markdown_table(record.support_type.as_str()),
                format_boolean(Some(record.has_video())),
            )?;
        }
        if shown < records.len() {
            writeln!(md, "\n_…and {} more_", records.len() - shown)?;
        }
        Ok(md)
    }

    fn generate_detail_report(
        &self,
        record: &VehicleRecord,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        self.write_header(&mut md, &record.name, config)?;
        if let Some(sentence) = &record.detail_sentence {
            writeln!(md, "{}\n", escape_markdown_inline(sentence))?;
        }

        for group in specs_by_category() {
            writeln!(md, "## {}\n", group.category.label())?;
            table_header(&mut md, &["Spec", "Value"])?;
            for spec in group.specs {
                writeln!(
                    md,
                    "| {} | {} |",
                    spec.label,
                    escape_markdown_table(&spec.display(record))
                )?;
            }
            writeln!(md)?;
        }

        if !record.footnotes.is_empty() {
            writeln!(md, "## Footnotes\n")?;
            for (i, note) in record.footnotes.iter().enumerate() {
                writeln!(md, "{}. {}", i + 1, escape_markdown_inline(note))?;
            }
            writeln!(md)?;
        }
        if !record.longitudinal_reports.is_empty() {
            writeln!(md, "## Longitudinal Reports\n")?;
            for report in &record.longitudinal_reports {
                let description = escape_markdown_inline(&report.description);
                if report.link.is_empty() {
                    writeln!(md, "- {description}")?;
                } else {
                    writeln!(md, "- [{description}]({})", report.link)?;
                }
            }
            writeln!(md)?;
        }
        Ok(md)
    }

    fn generate_comparison_report(
        &self,
        table: &ComparisonTable<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        self.write_header(&mut md, "Vehicle Comparison", config)?;

        let names: Vec<String> = table
            .columns()
            .iter()
            .map(|r| escape_markdown_table(&r.name))
            .collect();
        let mut header = vec!["Spec"];
        header.extend(names.iter().map(String::as_str));
        table_header(&mut md, &header)?;

        let mut current = None;
        for row in comparison_rows(table, config) {
            if current != Some(row.category) {
                current = Some(row.category);
                writeln!(md, "| **{}** |{}", row.category.label(), " |".repeat(names.len()))?;
            }
            let values: Vec<String> = row.values.iter().map(|v| escape_markdown_table(v)).collect();
            writeln!(md, "| {} | {} |", row.label, values.join(" | "))?;
        }
        Ok(md)
    }

    fn generate_diff_report(
        &self,
        diff: &DatasetDiff,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        self.write_header(&mut md, "Vehicle Dataset Diff", config)?;

        if !diff.has_changes() {
            writeln!(md, "_No changes._")?;
            return Ok(md);
        }

        table_header(&mut md, &["Added", "Removed", "Changed", "Platforms"])?;
        writeln!(
            md,
            "| {} | {} | {} | {} |\n",
            diff.summary.added, diff.summary.removed, diff.summary.changed, diff.summary.platforms_changed
        )?;

        for (heading, names) in [("Added", &diff.added), ("Removed", &diff.removed)] {
            if names.is_empty() {
                continue;
            }
            writeln!(md, "## {heading}\n")?;
            for name in names {
                writeln!(md, "- {}", escape_markdown_inline(name))?;
            }
            writeln!(md)?;
        }

        if !diff.by_platform.is_empty() {
            writeln!(md, "## Spec Changes by Platform\n")?;
            for (platform, names) in &diff.by_platform {
                writeln!(
                    md,
                    "- `{platform}`: {}",
                    escape_markdown_inline(&names.join(", "))
                )?;
            }
        }
        Ok(md)
    }

    fn generate_options_report(
        &self,
        options: &FacetOptions,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        self.write_header(&mut md, "Filter Options", config)?;
        let support: Vec<&str> = options.support_types.iter().map(|s| s.as_str()).collect();
        for (heading, values) in [
            ("Makes", options.makes.iter().map(String::as_str).collect::<Vec<_>>()),
            ("Models", options.models.iter().map(String::as_str).collect()),
            ("Years", options.years.iter().map(String::as_str).collect()),
            ("Support Types", support),
        ] {
            writeln!(md, "## {heading} ({})\n", values.len())?;
            for value in values {
                writeln!(md, "- {}", escape_markdown_inline(value))?;
            }
            writeln!(md)?;
        }
        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
