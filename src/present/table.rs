use serde::Serialize;

use super::format::format_currency;
use crate::core::{CONTRIBUTIONS_LABEL, ProjectionResult};

/// Year-by-year view of a projection. Every column except `Year` is
/// currency formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ProjectionTable {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let mut columns = Vec::with_capacity(result.scenarios.len() + 2);
        columns.push("Year".to_string());
        columns.extend(result.scenarios.iter().map(|s| s.label.clone()));
        columns.push(CONTRIBUTIONS_LABEL.to_string());

        let rows = result
            .contributions
            .iter()
            .enumerate()
            .map(|(idx, baseline)| {
                let mut row = Vec::with_capacity(columns.len());
                row.push(baseline.year.to_string());
                row.extend(
                    result
                        .scenarios
                        .iter()
                        .map(|s| format_currency(s.values[idx].value)),
                );
                row.push(format_currency(baseline.value));
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Plain-text rendering with right-aligned columns.
    pub fn render_text(&self) -> String {
        let widths: Vec<usize> = (0..self.columns.len())
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row[col].len())
                    .chain(std::iter::once(self.columns[col].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        push_line(&mut out, &self.columns, &widths);
        let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(rule_len));
        out.push('\n');
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&line);
    out.push('\n');
}
