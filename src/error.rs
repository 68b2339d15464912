//! Fatal errors. Anything reported here aborts the run before output is written.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("top level of the API description must be a mapping")]
    RootNotMapping,

    #[error("category '{0}' not found in the API description")]
    MissingCategory(String),

    #[error("category '{0}' must be a mapping")]
    CategoryNotMapping(String),

    #[error("category '{0}' has no 'functions' key")]
    MissingFunctions(String),

    #[error("'{0}.functions' must be a sequence")]
    FunctionsNotSequence(String),

    #[error("function entry #{index}: {reason}")]
    MalformedEntry { index: usize, reason: String },
}

/// Render-time lookup failures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("category '{0}' was not loaded")]
    CategoryNotLoaded(String),
}
