use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("glob pattern error: {pattern}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
