use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised when a format or a buffer can't be worked with.
///
/// Note that values outside of the `-1.0..=1.0` float domain are *not* errors.
/// They are clamped during translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A format field has a value outside of its domain.
    #[error("invalid format field `{field}`: {value}")]
    InvalidFormatField {
        /// The name of the field, as it appears in a format descriptor.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// A format identifier couldn't be parsed.
    #[error("malformed format id `{id}`: {reason}")]
    MalformedFormatId {
        /// The identifier that was being parsed.
        id: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Buffer conversion was asked to change the number of channels.
    #[error("unsupported channel count change from {from} to {to}")]
    UnsupportedChannelCountChange {
        /// Channels in the source format.
        from: usize,
        /// Channels in the target format.
        to: usize,
    },

    /// A buffer doesn't have the length an operation requires.
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLengthMismatch {
        /// The number of bytes required.
        expected: usize,
        /// The number of bytes available.
        actual: usize,
    },

    /// A channel was accessed which the format doesn't have.
    #[error("channel {channel} out of bounds for {channels} channels")]
    ChannelOutOfBounds {
        /// The channel being accessed.
        channel: usize,
        /// The number of channels in the format.
        channels: usize,
    },
}

impl Error {
    pub(crate) fn invalid_field<T>(field: &'static str, value: T) -> Self
    where
        T: ToString,
    {
        let value = value.to_string();
        tracing::debug!(field, value = %value, "rejected format field");
        Self::InvalidFormatField { field, value }
    }

    pub(crate) fn malformed_id(id: &str, reason: &'static str) -> Self {
        tracing::debug!(id, reason, "rejected format id");
        Self::MalformedFormatId {
            id: id.to_owned(),
            reason,
        }
    }
}
