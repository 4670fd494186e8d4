use serde::Serialize;

use crate::core::{CONTRIBUTIONS_COLOR, CONTRIBUTIONS_LABEL, ProjectionResult, YearValue};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub name: String,
    pub color: &'static str,
    pub style: LineStyle,
    pub points: Vec<YearValue>,
}

/// Line chart description consumed by the web page: x is the year, y the
/// account value in dollars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub title: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub legend_title: &'static str,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let mut series: Vec<ChartSeries> = result
            .scenarios
            .iter()
            .map(|s| ChartSeries {
                name: s.label.clone(),
                color: s.color,
                style: LineStyle::Solid,
                points: s.values.clone(),
            })
            .collect();
        series.push(ChartSeries {
            name: CONTRIBUTIONS_LABEL.to_string(),
            color: CONTRIBUTIONS_COLOR,
            style: LineStyle::Dot,
            points: result.contributions.clone(),
        });

        Self {
            title: "Total Savings Over Time",
            x_axis_title: "Year",
            y_axis_title: "US Dollars",
            legend_title: "Scenario",
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ProjectionInput, project};

    #[test]
    fn baseline_is_last_and_dotted() {
        let result = project(&ProjectionInput {
            initial_investment: 1_000.0,
            monthly_contribution: 100.0,
            years: 3,
            annual_rate_percent: 6.0,
            rate_variance_percent: 1.0,
            compounding_periods_per_year: 4,
        })
        .expect("valid frequency");
        let chart = ChartData::from_result(&result);

        assert_eq!(chart.series.len(), 4);
        let baseline = chart.series.last().expect("baseline series");
        assert_eq!(baseline.name, "Total Contributions");
        assert_eq!(baseline.color, "green");
        assert_eq!(baseline.style, LineStyle::Dot);
        assert!(chart.series[..3].iter().all(|s| s.style == LineStyle::Solid));
        assert!(chart.series.iter().all(|s| s.points.len() == 4));
    }

    #[test]
    fn chart_serializes_with_camel_case_keys() {
        let result = project(&ProjectionInput {
            initial_investment: 10.0,
            monthly_contribution: 0.0,
            years: 1,
            annual_rate_percent: 5.0,
            rate_variance_percent: 0.0,
            compounding_periods_per_year: 1,
        })
        .expect("valid frequency");
        let json = serde_json::to_string(&ChartData::from_result(&result))
            .expect("chart should serialize");
        assert!(json.contains("\"xAxisTitle\":\"Year\""));
        assert!(json.contains("\"yAxisTitle\":\"US Dollars\""));
        assert!(json.contains("\"style\":\"dot\""));
    }
}
