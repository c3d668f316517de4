use core::fmt;

/// Error returned by the standalone MJD/UTC date-time conversion (see
/// [`crate::time::decode`]). The decoder's [`crate::Decoder::add`] path never
/// surfaces this: a failed conversion simply withholds the `TIME` bit from
/// the returned [`crate::UpdatedFields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// The Modified Julian Day value does not correspond to a representable
    /// calendar date.
    InvalidDate,
    /// The decoded hour/minute (after the local offset is applied) does not
    /// correspond to a representable time of day.
    InvalidTime,
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::InvalidDate => f.write_str("invalid date derived from MJD"),
            TimeError::InvalidTime => f.write_str("invalid time of day derived from UTC fields"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeError {}
