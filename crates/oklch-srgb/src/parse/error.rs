//! Error type for the textual color parsers

use thiserror::Error;

/// Why a string could not be turned into a color.
///
/// The free functions in [`crate::parse`] collapse all of these into `None`;
/// the `FromStr` impls keep the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// No `oklch(L[%] C H)` form found in the input
    #[error("not an oklch() color")]
    NotOklch,

    /// No `rgb(r, g, b)` form found in the input
    #[error("not an rgb() color")]
    NotRgb,

    /// A channel does not fit in 8 bits
    #[error("channel value {value} out of range (expected 0..=255)")]
    ChannelOutOfRange {
        /// The offending channel value
        value: u16,
    },
}
