mod engine;
mod error;
mod types;

pub use engine::project;
pub use error::ProjectionError;
pub use types::{
    CONTRIBUTIONS_COLOR, CONTRIBUTIONS_LABEL, CompoundingFrequency, ProjectionInput,
    ProjectionResult, Scenario, ScenarioPosition, YearValue,
};
