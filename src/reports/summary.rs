//! Summary and table report generators for shell output.
//!
//! Provides compact, human-readable output for terminal usage.

use super::{comparison_rows, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::catalog::{result_label, FacetOptions};
use crate::compare::{specs_by_category, ComparisonTable};
use crate::diff::DatasetDiff;
use crate::model::{SupportType, VehicleRecord};
use crate::utils::{pad_to_width, truncate_to_width};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "blue" => format!("\x1b[34m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Terminal color for a support level.
fn support_color(support: &SupportType) -> &'static str {
    match support {
        SupportType::Upstream => "green",
        SupportType::UnderReview => "blue",
        SupportType::Community => "yellow",
        SupportType::DashcamMode => "dim",
        SupportType::NotCompatible => "red",
        SupportType::Unknown | SupportType::Other(_) => "",
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn heading(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_list_report(
        &self,
        records: &[&VehicleRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.heading(&mut lines, config.title.as_deref().unwrap_or("Vehicle Catalog"));

        let meta = &config.metadata;
        if !meta.filters.is_empty() {
            lines.push(format!(
                "{}  {}",
                self.color("Filters:", "cyan"),
                meta.filters.join(", ")
            ));
        }
        if let Some(sort) = &meta.sort {
            lines.push(format!("{}  {sort}", self.color("Sort:", "cyan")));
        }
        let tone = match records.len() {
            0 => "red",
            1..=5 => "yellow",
            _ => "green",
        };
        lines.push(format!(
            "{}  {} of {}",
            self.color("Found:", "cyan"),
            self.color(&result_label(records.len()), tone),
            meta.total_records.max(records.len())
        ));
        lines.push(String::new());

        let shown = config.shown(records.len());
        for record in &records[..shown] {
            lines.push(format!(
                "  {} {}",
                record.name,
                self.color(
                    &format!("[{}]", record.support_type),
                    support_color(&record.support_type)
                )
            ));
        }
        if shown < records.len() {
            lines.push(self.color(&format!("  … and {} more", records.len() - shown), "dim"));
        }
        Ok(lines.join("\n"))
    }

    fn generate_detail_report(
        &self,
        record: &VehicleRecord,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.heading(&mut lines, &record.name);
        lines.push(format!(
            "{}  {}",
            self.color("Support:", "cyan"),
            self.color(record.support_type.as_str(), support_color(&record.support_type))
        ));
        if let Some(sentence) = &record.detail_sentence {
            lines.push(sentence.clone());
        }

        for group in specs_by_category() {
            lines.push(String::new());
            lines.push(self.color(group.category.label(), "bold"));
            for spec in group.specs {
                lines.push(format!(
                    "  {} {}",
                    self.color(&pad_to_width(spec.label, 26), "dim"),
                    spec.display(record)
                ));
            }
        }

        if !record.footnotes.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Footnotes", "bold"));
            for (i, note) in record.footnotes.iter().enumerate() {
                lines.push(format!("  {}. {note}", i + 1));
            }
        }
        Ok(lines.join("\n"))
    }

    fn generate_comparison_report(
        &self,
        table: &ComparisonTable<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.heading(&mut lines, "Vehicle Comparison");
        for (i, record) in table.columns().iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, record.name));
        }
        lines.push(String::new());
        lines.push(format!(
            "{}  {} of {} specs",
            self.color("Differences:", "cyan"),
            table.rows().filter(|row| row.differs()).count(),
            table.row_count()
        ));
        for row in comparison_rows(table, config) {
            let marker = if row.differs() { self.color("≠", "yellow") } else { " ".to_string() };
            lines.push(format!(
                "  {marker} {} {}",
                pad_to_width(row.label, 26),
                row.values.join(" | ")
            ));
        }
        Ok(lines.join("\n"))
    }

    fn generate_diff_report(
        &self,
        diff: &DatasetDiff,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.heading(&mut lines, "Vehicle Dataset Diff");

        let meta = &config.metadata;
        if let (Some(old), Some(new)) = (&meta.old_dataset_path, &meta.new_dataset_path) {
            lines.push(format!("{}  {old} → {new}", self.color("Files:", "cyan")));
            lines.push(String::new());
        }

        let summary = diff.summary;
        if summary.added > 0 {
            lines.push(format!(
                "  {} {} added",
                self.color(&format!("+{}", summary.added), "green"),
                plural(summary.added, "car", "cars")
            ));
        }
        if summary.removed > 0 {
            lines.push(format!(
                "  {} {} removed",
                self.color(&format!("-{}", summary.removed), "red"),
                plural(summary.removed, "car", "cars")
            ));
        }
        if summary.changed > 0 {
            lines.push(format!(
                "  {} {} changed",
                self.color(&format!("~{}", summary.changed), "yellow"),
                plural(summary.changed, "car", "cars")
            ));
        }
        if !diff.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        let spec_changes = diff.spec_change_summary();
        if !spec_changes.is_empty() {
            lines.push(String::new());
            lines.push(spec_changes);
        }
        Ok(lines.join("\n"))
    }

    fn generate_options_report(
        &self,
        options: &FacetOptions,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.heading(&mut lines, "Filter Options");
        let support: Vec<&str> = options.support_types.iter().map(|s| s.as_str()).collect();
        lines.push(format!("{}  {}", self.color("Makes:", "cyan"), options.makes.join(", ")));
        lines.push(format!("{}  {}", self.color("Models:", "cyan"), options.models.join(", ")));
        lines.push(format!("{}  {}", self.color("Years:", "cyan"), options.years.join(", ")));
        lines.push(format!("{}  {}", self.color("Support:", "cyan"), support.join(", ")));
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Aligned table reporter
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

const NAME_WIDTH: usize = 36;
const MAKE_WIDTH: usize = 14;
const YEARS_WIDTH: usize = 14;
const SUPPORT_WIDTH: usize = 16;
const LABEL_WIDTH: usize = 26;
const VALUE_WIDTH: usize = 20;

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn rule(&self, width: usize) -> String {
        self.color(&"─".repeat(width), "dim")
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_list_report(
        &self,
        records: &[&VehicleRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let header = format!(
            "{} {} {} {}",
            pad_to_width("NAME", NAME_WIDTH),
            pad_to_width("MAKE", MAKE_WIDTH),
            pad_to_width("YEARS", YEARS_WIDTH),
            "SUPPORT"
        );
        lines.push(self.color(&header, "bold"));
        lines.push(self.rule(NAME_WIDTH + MAKE_WIDTH + YEARS_WIDTH + SUPPORT_WIDTH + 3));

        let shown = config.shown(records.len());
        for record in &records[..shown] {
            lines.push(format!(
                "{} {} {} {}",
                pad_to_width(&record.name, NAME_WIDTH),
                pad_to_width(&record.make, MAKE_WIDTH),
                pad_to_width(&record.years, YEARS_WIDTH),
                self.color(
                    &truncate_to_width(record.support_type.as_str(), SUPPORT_WIDTH),
                    support_color(&record.support_type)
                )
            ));
        }
        lines.push(String::new());
        lines.push(self.color(&result_label(records.len()), "dim"));
        Ok(lines.join("\n"))
    }

    fn generate_detail_report(
        &self,
        record: &VehicleRecord,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = vec![self.color(&record.name, "bold")];
        for group in specs_by_category() {
            lines.push(String::new());
            lines.push(self.color(&group.category.label().to_uppercase(), "cyan"));
            lines.push(self.rule(LABEL_WIDTH + VALUE_WIDTH + 1));
            for spec in group.specs {
                lines.push(format!(
                    "{} {}",
                    pad_to_width(spec.label, LABEL_WIDTH),
                    spec.display(record)
                ));
            }
        }
        Ok(lines.join("\n"))
    }

    fn generate_comparison_report(
        &self,
        table: &ComparisonTable<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let mut header = pad_to_width("SPEC", LABEL_WIDTH);
        for record in table.columns() {
            header.push(' ');
            header.push_str(&pad_to_width(&record.name, VALUE_WIDTH));
        }
        lines.push(self.color(header.trim_end(), "bold"));
        lines.push(self.rule(LABEL_WIDTH + (VALUE_WIDTH + 1) * table.columns().len()));

        let mut current = None;
        for row in comparison_rows(table, config) {
            if current != Some(row.category) {
                current = Some(row.category);
                lines.push(self.color(&row.category.label().to_uppercase(), "cyan"));
            }
            let mut line = pad_to_width(row.label, LABEL_WIDTH);
            for value in &row.values {
                line.push(' ');
                line.push_str(&pad_to_width(value, VALUE_WIDTH));
            }
            let line = line.trim_end().to_string();
            lines.push(if row.differs() { self.color(&line, "yellow") } else { line });
        }
        Ok(lines.join("\n"))
    }

    fn generate_diff_report(
        &self,
        diff: &DatasetDiff,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let header = format!(
            "{} {} {}",
            pad_to_width("CHANGE", 8),
            pad_to_width("NAME", NAME_WIDTH),
            "PLATFORM"
        );
        lines.push(self.color(&header, "bold"));
        lines.push(self.rule(8 + NAME_WIDTH + 24));
        for name in &diff.added {
            lines.push(format!(
                "{} {}",
                self.color(&pad_to_width("added", 8), "green"),
                truncate_to_width(name, NAME_WIDTH)
            ));
        }
        for name in &diff.removed {
            lines.push(format!(
                "{} {}",
                self.color(&pad_to_width("removed", 8), "red"),
                truncate_to_width(name, NAME_WIDTH)
            ));
        }
        for change in &diff.changed {
            lines.push(format!(
                "{} {} {}",
                self.color(&pad_to_width("changed", 8), "yellow"),
                pad_to_width(&change.name, NAME_WIDTH),
                change.platform
            ));
        }
        Ok(lines.join("\n"))
    }

    fn generate_options_report(
        &self,
        options: &FacetOptions,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = vec![self.color(
            &format!("{} {}", pad_to_width("FACET", 14), "VALUES"),
            "bold",
        )];
        let support: Vec<&str> = options.support_types.iter().map(|s| s.as_str()).collect();
        for (facet, values) in [
            ("make", options.makes.join(", ")),
            ("model", options.models.join(", ")),
            ("year", options.years.join(", ")),
            ("support_type", support.join(", ")),
        ] {
            lines.push(format!("{} {values}", pad_to_width(facet, 14)));
        }
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}
