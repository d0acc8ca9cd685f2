use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// No record matches the requested (city, season) pair.
    #[error("no temperature records for city '{city}' in season '{season}'")]
    NotFound { city: String, season: String },
    /// No record at all for the requested city.
    #[error("no temperature records for city '{city}'")]
    UnknownCity { city: String },
}
