use hifitime::{Epoch, Unit};
use std::str::FromStr;

use crate::{constants::Day, flyby_errors::FlybyError};

/// Parse a UTC date in the format YYYY-MM-ddTHH:mm:ss into an [`Epoch`].
///
/// Argument
/// --------
/// * `date`: a date string in the format YYYY-MM-ddTHH:mm:ss (UTC assumed)
///
/// Return
/// ------
/// * the parsed [`Epoch`], or [`FlybyError::InvalidEpoch`] on a malformed string
pub fn parse_utc_epoch(date: &str) -> Result<Epoch, FlybyError> {
    Epoch::from_str(date).map_err(|err| FlybyError::InvalidEpoch(err.to_string()))
}

/// Offset an epoch by a signed number of days.
pub fn epoch_plus_days(epoch: Epoch, days: Day) -> Epoch {
    epoch + days * Unit::Day
}

/// Signed elapsed days from `earlier` to `later`.
pub fn days_between(later: Epoch, earlier: Epoch) -> Day {
    (later - earlier).to_unit(Unit::Day)
}
