//! Pure transforms from a projection into what the page and the terminal show.

mod chart;
mod cta;
mod format;
mod table;

pub use chart::{ChartData, ChartSeries, LineStyle};
pub use cta::{MESSAGES as CTA_MESSAGES, pick_message};
pub use format::format_currency;
pub use table::ProjectionTable;

/// Headline shown above the chart, e.g. `In 10 years, you will have $19,318.14.`
pub fn headline_sentence(years: u32, value: f64) -> String {
    let unit = if years == 1 { "year" } else { "years" };
    format!(
        "In {years} {unit}, you will have {}.",
        format_currency(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_reads_naturally() {
        assert_eq!(
            headline_sentence(10, 19_318.142),
            "In 10 years, you will have $19,318.14."
        );
        assert_eq!(
            headline_sentence(1, 5_500.0),
            "In 1 year, you will have $5,500.00."
        );
    }
}
