use std::num::ParseIntError;

/// Errors produced while decoding a status error summary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input contains no `@StatusErr[key][code][msg]` summary.
    #[error("unsupported status err summary: {input}")]
    Unsupported { input: String },

    /// The summary matched but its code is not a base-10 integer.
    #[error("invalid code '{code}' in status err summary: {input}")]
    InvalidCode {
        input: String,
        code: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Unsupported { input } | Self::InvalidCode { input, .. } => input,
        }
    }
}
