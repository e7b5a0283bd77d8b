use thiserror::Error;

/// Errors produced by the color math.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input was not six hex digits with an optional leading `#`.
    #[error("invalid color format {input:?}, expected #RRGGBB")]
    InvalidColorFormat {
        /// The rejected input.
        input: String,
    },
}
