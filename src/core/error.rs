use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("unsupported compounding frequency: {periods} periods per year (expected 1, 4, 12 or 365)")]
    InvalidConfiguration { periods: u32 },
}
