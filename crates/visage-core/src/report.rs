//! Full dataset report
//!
//! Everything the views show for one table, computed once: per-attribute
//! summaries and levels, labels, colours, the chart domain, the observed
//! period and the face layout.

use chrono::NaiveDateTime;
use serde::Serialize;
use visage_io::{parse_date_key, Table};
use visage_stats::{aggregate, aggregate_levels, LevelReading, StatisticsSummary};

use crate::attributes::{attribute_keys, AttributeLabels};
use crate::chart::ChartDomain;
use crate::config::ViewConfig;
use crate::error::VisageResult;
use crate::face::FaceLayout;
use crate::palette::Color;

/// First and last key of the table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub first: String,
    pub last: String,
    /// Parsed keys, when both look like dates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
}

impl Period {
    pub fn from_table(table: &Table) -> Option<Self> {
        let (first, last) = table.span()?;
        let (start, end) = match (parse_date_key(first), parse_date_key(last)) {
            (Some(start), Some(end)) => (Some(start), Some(end)),
            _ => (None, None),
        };
        Some(Self {
            first: first.to_string(),
            last: last.to_string(),
            start,
            end,
        })
    }

    /// Whole days between the first and last key
    pub fn days(&self) -> Option<i64> {
        Some((self.end? - self.start?).num_days())
    }
}

/// Everything known about one attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeReport {
    pub key: String,
    pub label: String,
    pub color: Color,
    pub summary: Option<StatisticsSummary>,
    pub level: Option<LevelReading>,
}

/// Report over a whole table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub rows: usize,
    pub key_label: String,
    pub period: Option<Period>,
    pub attributes: Vec<AttributeReport>,
    pub chart_domain: Option<ChartDomain>,
    pub face: Option<FaceLayout>,
    /// Why the face could not be built
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_unavailable: Option<String>,
}

impl Report {
    /// Compute the report for a table
    ///
    /// Fails only when the configured face roles name an attribute the
    /// table does not have. A face that cannot be built is reported, not
    /// returned as an error.
    pub fn build(table: &Table, config: &ViewConfig) -> VisageResult<Self> {
        let attributes = attribute_keys(&table.header);
        let labels = AttributeLabels::from_header(&table.header);
        let palette = &config.display.palette;

        let face_attributes = config.face.face_attributes(&attributes)?;

        let summaries = aggregate(&table.rows, &attributes);
        let levels = aggregate_levels(&table.rows, &attributes);

        let attribute_reports = attributes
            .iter()
            .enumerate()
            .map(|(index, key)| AttributeReport {
                key: key.clone(),
                label: labels.label(key).to_string(),
                color: palette.color_for(index),
                summary: summaries.get(key).cloned().flatten(),
                level: levels.get(key).copied().flatten(),
            })
            .collect();

        let (face, face_unavailable) = match FaceLayout::build(table, &face_attributes) {
            Ok(layout) => (Some(layout), None),
            Err(e) => {
                tracing::debug!(error = %e, "Face layout unavailable");
                (None, Some(e.to_string()))
            }
        };

        tracing::debug!(
            rows = table.row_count(),
            attributes = attributes.len(),
            "Built report"
        );

        Ok(Self {
            rows: table.row_count(),
            key_label: labels.key_label().to_string(),
            period: Period::from_table(table),
            attributes: attribute_reports,
            chart_domain: ChartDomain::from_table(table, &attributes),
            face,
            face_unavailable,
        })
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeReport> {
        self.attributes.iter().find(|a| a.key == key)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> VisageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VisageError;
    use visage_io::read_csv_str;
    use visage_stats::Level;

    const RATES: &str = "\
Date,EUR,USD,CHF
2024-01-01,4.30,3.90,4.60
2024-01-02,4.40,4.00,4.70
2024-01-03,4.50,x,4.65
2024-01-04,4.20,4.10,4.80
";

    #[test]
    fn test_report_attributes() {
        let table = read_csv_str(RATES).unwrap();
        let report = Report::build(&table, &ViewConfig::default()).unwrap();

        assert_eq!(report.rows, 4);
        assert_eq!(report.key_label, "Date");
        assert_eq!(report.attributes.len(), 3);

        let usd = report.attribute("A2").unwrap();
        assert_eq!(usd.label, "A2 (USD)");
        assert_eq!(usd.color.to_hex(), "#82ca9d");
        assert_eq!(usd.summary.as_ref().unwrap().count, 3);
        assert_eq!(usd.level.unwrap().level, Level::High);

        let eur = report.attribute("A1").unwrap();
        assert_eq!(eur.level.unwrap().level, Level::Low);
    }

    #[test]
    fn test_report_period() {
        let table = read_csv_str(RATES).unwrap();
        let report = Report::build(&table, &ViewConfig::default()).unwrap();
        let period = report.period.unwrap();
        assert_eq!(period.first, "2024-01-01");
        assert_eq!(period.last, "2024-01-04");
        assert_eq!(period.days(), Some(3));
    }

    #[test]
    fn test_report_without_face() {
        let table = read_csv_str(RATES).unwrap();
        let report = Report::build(&table, &ViewConfig::default()).unwrap();
        assert!(report.face.is_none());
        assert!(report
            .face_unavailable
            .as_deref()
            .unwrap()
            .contains("at least 5"));
    }

    #[test]
    fn test_unknown_face_role() {
        let table = read_csv_str(RATES).unwrap();
        let mut config = ViewConfig::default();
        config.face.roles = Some(
            ["A1", "A2", "A3", "A3", "A9"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        assert!(matches!(
            Report::build(&table, &config),
            Err(VisageError::UnknownAttribute(key)) if key == "A9"
        ));
    }

    #[test]
    fn test_configured_roles_build_face() {
        let table = read_csv_str(RATES).unwrap();
        let mut config = ViewConfig::default();
        config.face.roles = Some(
            ["A3", "A1", "A1", "A2", "A3"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        let report = Report::build(&table, &config).unwrap();
        let face = report.face.unwrap();
        assert_eq!(face.features()[0].attribute, "A3");
        assert_eq!(face.features()[0].label, "A3 (CHF)");
    }

    #[test]
    fn test_report_json_shape() {
        let table = read_csv_str(RATES).unwrap();
        let report = Report::build(&table, &ViewConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["rows"], 4);
        assert_eq!(json["attributes"][0]["key"], "A1");
        assert_eq!(json["attributes"][0]["color"], "#8884d8");
        assert!(json["attributes"][0]["summary"]["stdDev"].is_number());
        assert_eq!(json["attributes"][1]["level"]["level"], "high");
        assert!(json["face"].is_null());
        assert!(json["chartDomain"]["min"].is_number());
    }

    #[test]
    fn test_empty_table_report() {
        let table = read_csv_str("").unwrap();
        let report = Report::build(&table, &ViewConfig::default()).unwrap();
        assert_eq!(report.rows, 0);
        assert!(report.attributes.is_empty());
        assert!(report.period.is_none());
        assert!(report.chart_domain.is_none());
        assert_eq!(report.key_label, "Data");
    }
}
