//! Terminal tables for each view

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use visage_core::{
    chart_series, format_number, AttributeLabels, ChartDomain, FaceLayout, Palette, ViewConfig,
};
use visage_io::{Cell as DataCell, Table as DataTable, KEY_COLUMN};
use visage_stats::{AttributeMap, StatisticsSummary};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn number_cell(value: Option<f64>, digits: usize) -> Cell {
    Cell::new(format_number(value, digits)).set_alignment(CellAlignment::Right)
}

/// Colour of the attribute at `index` in the table's column order
fn series_color(palette: &Palette, attributes: &[String], key: &str) -> Color {
    let index = attributes.iter().position(|a| a == key).unwrap_or(0);
    let c = palette.color_for(index);
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// First `limit` rows with labelled headers
pub fn preview_table(data: &DataTable, limit: usize, config: &ViewConfig) -> Table {
    let labels = AttributeLabels::from_header(&data.header);
    let keys: Vec<&str> = data.header.generic_keys().collect();
    let digits = config.display.digits;

    let mut table = new_table();
    table.set_header(keys.iter().map(|k| labels.label(k)).collect::<Vec<_>>());

    for row in data.rows.iter().take(limit) {
        let cells: Vec<Cell> = keys
            .iter()
            .map(|key| match row.get(key) {
                Some(DataCell::Text(text)) => Cell::new(text),
                Some(DataCell::Number(value)) => number_cell(*value, digits),
                None if *key == KEY_COLUMN => Cell::new(""),
                None => number_cell(None, digits),
            })
            .collect();
        table.add_row(cells);
    }
    table
}

/// One row of statistics per attribute
pub fn stats_table(
    data: &DataTable,
    attributes: &[String],
    stats: &AttributeMap<Option<StatisticsSummary>>,
    config: &ViewConfig,
) -> Table {
    let labels = AttributeLabels::from_header(&data.header);
    let digits = config.display.digits;

    let mut table = new_table();
    table.set_header(vec![
        "Attribute", "n", "Mean", "Median", "Mode", "Std dev", "Q1", "Q2", "Q3", "Min", "Max",
        "Range", "Skewness", "Kurtosis",
    ]);

    for (key, summary) in stats.iter() {
        let color = series_color(&config.display.palette, attributes, key);
        let mut cells = vec![Cell::new(labels.label(key)).fg(color)];

        match summary {
            Some(s) => {
                cells.push(Cell::new(s.count).set_alignment(CellAlignment::Right));
                cells.extend(
                    [
                        Some(s.mean),
                        Some(s.median),
                        Some(s.mode),
                        Some(s.std_dev),
                        Some(s.q1),
                        Some(s.q2),
                        Some(s.q3),
                        Some(s.min),
                        Some(s.max),
                        Some(s.range),
                        s.skewness,
                        s.kurtosis,
                    ]
                    .into_iter()
                    .map(|v| number_cell(v, digits)),
                );
            }
            None => {
                cells.push(Cell::new(0).set_alignment(CellAlignment::Right));
                cells.extend((0..12).map(|_| number_cell(None, digits)));
            }
        }
        table.add_row(cells);
    }
    table
}

/// Role, attribute and level of every face feature
pub fn face_table(layout: &FaceLayout, config: &ViewConfig) -> Table {
    let digits = config.display.digits;

    let mut table = new_table();
    table.set_header(vec![
        "Feature", "Attribute", "Level", "Shape", "Q1", "Q2", "Q3", "Last",
    ]);

    for feature in layout.features() {
        table.add_row(vec![
            Cell::new(feature.role),
            Cell::new(&feature.label),
            Cell::new(feature.level),
            Cell::new(feature.shape),
            number_cell(Some(feature.q1), digits),
            number_cell(Some(feature.q2), digits),
            number_cell(Some(feature.q3), digits),
            number_cell(Some(feature.last_value), digits),
        ]);
    }
    table
}

/// Y domain over all attributes plus one line per shown series
pub fn chart_overview(
    data: &DataTable,
    attributes: &[String],
    shown: &[String],
    config: &ViewConfig,
) -> String {
    let labels = AttributeLabels::from_header(&data.header);
    let digits = config.display.digits;

    let domain = match ChartDomain::from_table(data, attributes) {
        Some(d) => format!(
            "Y domain: {} .. {}",
            format_number(Some(d.min), digits),
            format_number(Some(d.max), digits)
        ),
        None => "Y domain: auto".to_string(),
    };

    let mut table = new_table();
    table.set_header(vec![
        "Series".to_string(),
        "Points".to_string(),
        "Values".to_string(),
        format!("Latest {}", labels.key_label()),
        "Latest value".to_string(),
    ]);

    for key in shown {
        let series = chart_series(data, key);
        let color = series_color(&config.display.palette, attributes, key);
        let (latest_key, latest_value) = match series.latest() {
            Some(p) => (p.key.clone(), p.value),
            None => (String::new(), None),
        };
        table.add_row(vec![
            Cell::new(labels.label(key)).fg(color),
            Cell::new(series.points.len()).set_alignment(CellAlignment::Right),
            Cell::new(series.value_count()).set_alignment(CellAlignment::Right),
            Cell::new(latest_key),
            number_cell(latest_value, digits),
        ]);
    }

    format!("{domain}\n{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use visage_core::attribute_keys;
    use visage_io::read_csv_str;
    use visage_stats::aggregate;

    const DATA: &str = "Date,EUR,USD\n2024-01-01,4.3,3.9\n2024-01-02,4.4,x\n";

    #[test]
    fn test_preview_has_labels_and_placeholders() {
        let data = read_csv_str(DATA).unwrap();
        let out = preview_table(&data, 10, &ViewConfig::default()).to_string();
        assert!(out.contains("A1 (EUR)"));
        assert!(out.contains("4.3000"));
        assert!(out.contains('–'));
    }

    #[test]
    fn test_preview_limit() {
        let data = read_csv_str(DATA).unwrap();
        let out = preview_table(&data, 1, &ViewConfig::default()).to_string();
        assert!(out.contains("2024-01-01"));
        assert!(!out.contains("2024-01-02"));
    }

    #[test]
    fn test_stats_rows() {
        let data = read_csv_str(DATA).unwrap();
        let attributes = attribute_keys(&data.header);
        let stats = aggregate(&data.rows, &attributes);
        let table = stats_table(&data, &attributes, &stats, &ViewConfig::default());
        assert_eq!(table.row_iter().count(), 2);
        assert!(table.to_string().contains("Kurtosis"));
    }

    #[test]
    fn test_chart_overview() {
        let data = read_csv_str(DATA).unwrap();
        let attributes = attribute_keys(&data.header);
        let out = chart_overview(&data, &attributes, &attributes[1..], &ViewConfig::default());
        assert!(out.starts_with("Y domain: "));
        assert!(out.contains("A2 (USD)"));
        assert!(out.contains("Latest Date"));
    }
}
