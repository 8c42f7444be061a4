use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Failed to parse '{text}' with pattern '{pattern}'")]
    Parse {
        text: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },

    // DST gaps have no local instant, folds have two
    #[error("Local time '{0}' does not map to a single instant")]
    AmbiguousLocalTime(String),

    #[error("Epoch milliseconds {0} are outside the representable datetime range")]
    OutOfRange(i64),
}
