use super::error::ProjectionError;
use super::types::{
    CompoundingFrequency, ProjectionInput, ProjectionResult, Scenario, ScenarioPosition, YearValue,
};

/// Projects account value under compound interest for the central rate and,
/// when a variance is given, for the rates one variance below and above it.
///
/// Years run `0..=input.years`. Ranges are assumed to be checked by the caller;
/// only the compounding frequency is validated here.
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    let frequency = CompoundingFrequency::from_periods(input.compounding_periods_per_year)?;

    let scenarios = scenario_rates(input)
        .into_iter()
        .map(|(position, rate_percent)| Scenario {
            position,
            rate_percent,
            label: position.label(rate_percent),
            color: position.color(),
            values: project_rate(input, frequency, rate_percent),
        })
        .collect();

    let contributions = (0..=input.years)
        .map(|year| YearValue {
            year,
            value: input.initial_investment + principal_paid(input, frequency, year),
        })
        .collect();

    Ok(ProjectionResult {
        frequency,
        scenarios,
        contributions,
    })
}

// Lower bound is not clamped: a variance above the central rate yields a
// negative rate scenario.
fn scenario_rates(input: &ProjectionInput) -> Vec<(ScenarioPosition, f64)> {
    let central = input.annual_rate_percent;
    let variance = input.rate_variance_percent;
    if variance == 0.0 {
        return vec![(ScenarioPosition::Central, central)];
    }
    vec![
        (ScenarioPosition::Below, central - variance),
        (ScenarioPosition::Central, central),
        (ScenarioPosition::Above, central + variance),
    ]
}

fn project_rate(
    input: &ProjectionInput,
    frequency: CompoundingFrequency,
    rate_percent: f64,
) -> Vec<YearValue> {
    let m = frequency.periods_per_year();
    let r = rate_percent / 100.0;
    let periodic = r / f64::from(m);

    (0..=input.years)
        .map(|year| {
            let n = f64::from(m) * f64::from(year);
            let growth = (1.0 + periodic).powf(n);
            let lump = input.initial_investment * growth;
            let stream = if r > 0.0 {
                input.monthly_contribution * ((growth - 1.0) / periodic)
            } else {
                principal_paid(input, frequency, year)
            };
            YearValue {
                year,
                value: lump + stream,
            }
        })
        .collect()
}

/// Contributions credited by the end of `year`, one per compounding period.
fn principal_paid(input: &ProjectionInput, frequency: CompoundingFrequency, year: u32) -> f64 {
    input.monthly_contribution * f64::from(year) * f64::from(frequency.periods_per_year())
}
