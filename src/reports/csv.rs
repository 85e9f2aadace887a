//! CSV report generator.
//!
//! Generates comma-separated reports suitable for spreadsheet import and
//! data analysis pipelines.

use super::escape::escape_csv;
use super::{comparison_rows, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::catalog::FacetOptions;
use crate::compare::{ComparisonTable, SPECS};
use crate::diff::DatasetDiff;
use crate::model::VehicleRecord;
use crate::utils::format_boolean;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_row<I, S>(content: &mut String, fields: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let row: Vec<String> = fields.into_iter().map(|f| escape_csv(f.as_ref())).collect();
    content.push_str(&row.join(","));
    content.push('\n');
}

impl ReportGenerator for CsvReporter {
    fn generate_list_report(
        &self,
        records: &[&VehicleRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        push_row(
            &mut content,
            [
                "Name",
                "Slug",
                "Make",
                "Model",
                "Years",
                "Support Type",
                "Package",
                "Video",
                "Setup Video",
                "Longitudinal Report",
            ],
        );
        for record in &records[..config.shown(records.len())] {
            push_row(
                &mut content,
                [
                    record.name.clone(),
                    record.slug(),
                    record.make.clone(),
                    record.model.clone(),
                    record.years.clone(),
                    record.support_type.to_string(),
                    record.package.clone(),
                    format_boolean(Some(record.has_video())),
                    format_boolean(Some(record.has_setup_video())),
                    format_boolean(Some(record.has_longitudinal_report())),
                ],
            );
        }
        Ok(content)
    }

    fn generate_detail_report(
        &self,
        record: &VehicleRecord,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        push_row(&mut content, ["Category", "Spec", "Value"]);
        push_row(&mut content, ["General", "Name", record.name.as_str()]);
        push_row(&mut content, ["General", "Make", record.make.as_str()]);
        push_row(&mut content, ["General", "Model", record.model.as_str()]);
        for spec in &SPECS {
            push_row(
                &mut content,
                [
                    spec.category.label().to_string(),
                    spec.label.to_string(),
                    spec.display(record),
                ],
            );
        }
        Ok(content)
    }

    fn generate_comparison_report(
        &self,
        table: &ComparisonTable<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        let header = ["Category".to_string(), "Spec".to_string()]
            .into_iter()
            .chain(table.columns().iter().map(|r| r.name.clone()));
        push_row(&mut content, header);
        for row in comparison_rows(table, config) {
            let fields = [row.category.label().to_string(), row.label.to_string()]
                .into_iter()
                .chain(row.values.iter().cloned());
            push_row(&mut content, fields);
        }
        Ok(content)
    }

    fn generate_diff_report(
        &self,
        diff: &DatasetDiff,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        push_row(&mut content, ["Change", "Name", "Platform", "Fields"]);
        for name in &diff.added {
            push_row(&mut content, ["Added", name.as_str(), "", ""]);
        }
        for name in &diff.removed {
            push_row(&mut content, ["Removed", name.as_str(), "", ""]);
        }
        for change in &diff.changed {
            push_row(
                &mut content,
                [
                    "Changed",
                    change.name.as_str(),
                    change.platform.as_str(),
                    change.fields.join(";").as_str(),
                ],
            );
        }
        Ok(content)
    }

    fn generate_options_report(
        &self,
        options: &FacetOptions,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        push_row(&mut content, ["Facet", "Value"]);
        for make in &options.makes {
            push_row(&mut content, ["make", make.as_str()]);
        }
        for model in &options.models {
            push_row(&mut content, ["model", model.as_str()]);
        }
        for year in &options.years {
            push_row(&mut content, ["year", year.as_str()]);
        }
        for support in &options.support_types {
            push_row(&mut content, ["support_type", support.as_str()]);
        }
        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_datasets;
    use crate::model::Dataset;

    #[test]
    fn test_list_csv_quotes_commas() {
        let mut record = VehicleRecord::new("Toyota RAV4 2019-21", "Toyota", "RAV4");
        record.years = "2019-21, 2023".to_string();
        let csv = CsvReporter::new()
            .generate_list_report(&[&record], &ReportConfig::default())
            .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Name,Slug,Make"));
        assert!(lines[1].contains("\"2019-21, 2023\""));
        assert!(lines[1].contains("toyota-rav4-2019-21"));
    }

    #[test]
    fn test_detail_csv_has_every_spec() {
        let record = VehicleRecord::new("Kia EV6 2023", "Kia", "EV6");
        let csv = CsvReporter::new()
            .generate_detail_report(&record, &ReportConfig::default())
            .unwrap();
        // header + 3 general rows + registry
        assert_eq!(csv.lines().count(), 1 + 3 + SPECS.len());
    }

    #[test]
    fn test_diff_csv() {
        let old = Dataset::from_json_str(r#"[{"name": "A"}, {"name": "B", "wheelbase": 1.0}]"#).unwrap();
        let new = Dataset::from_json_str(r#"[{"name": "B", "wheelbase": 2.0}, {"name": "C"}]"#).unwrap();
        let csv = CsvReporter::new()
            .generate_diff_report(&diff_datasets(&old, &new), &ReportConfig::default())
            .unwrap();
        assert!(csv.contains("Added,C,,"));
        assert!(csv.contains("Removed,A,,"));
        assert!(csv.contains("Changed,B,UNKNOWN,wheelbase"));
    }
}
