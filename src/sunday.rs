//! Sunday service dates shown in the events section.

use jiff::civil::Date;
use jiff::ToSpan;

/// The upcoming and the most recent Sunday relative to some day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sundays {
    /// Next service. Always strictly after the reference day, so on a Sunday this is one week
    /// ahead.
    pub next: Date,
    /// Most recent service, the reference day itself if it is a Sunday.
    pub last: Date,
}

impl Sundays {
    /// Compute both Sundays around `today`.
    pub(crate) fn around(today: Date) -> Result<Self, jiff::Error> {
        let day_num = i64::from(today.weekday().to_sunday_zero_offset());
        let forward = (7 - day_num).abs();
        let backward = day_num.abs();

        let next = today.checked_add(forward.days())?;
        let last = today.checked_sub(backward.days())?;

        Ok(Self { next, last })
    }
}

/// Format `date` as `M/D/YYYY` the way a US locale prints short dates.
pub(crate) fn format_us(date: Date) -> String {
    date.strftime("%-m/%-d/%Y").to_string()
}
