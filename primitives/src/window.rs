use {
  std::fmt::Display,
  thiserror::Error,
  time::{
    format_description::FormatItem,
    macros::format_description,
    OffsetDateTime,
    PrimitiveDateTime,
    UtcOffset,
  },
};

/// Layout of timestamps exchanged with the indexer and typed by users,
/// always interpreted as UTC.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
  format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("window start {0} is after its end {1}")]
  Inverted(OffsetDateTime, OffsetDateTime),

  #[error("invalid timestamp {0:?}, expected YYYY-MM-DDTHH:MM:SS")]
  InvalidTimestamp(String),

  #[error("window length is out of range")]
  OutOfRange,

  #[error("cannot format timestamp: {0}")]
  Unformattable(String),
}

/// Inclusive time range used to filter indexed activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
  start: OffsetDateTime,
  end: OffsetDateTime,
}

impl TimeWindow {
  pub fn new(
    start: OffsetDateTime,
    end: OffsetDateTime,
  ) -> Result<Self, Error> {
    if start > end {
      return Err(Error::Inverted(start, end));
    }
    Ok(Self { start, end })
  }

  /// A zero-length window at the current instant.
  pub fn now() -> Self {
    let now = OffsetDateTime::now_utc();
    Self {
      start: now,
      end: now,
    }
  }

  /// A window of the given length that ends at `end`.
  pub fn ending_at(
    end: OffsetDateTime,
    length: std::time::Duration,
  ) -> Result<Self, Error> {
    let length =
      time::Duration::try_from(length).map_err(|_| Error::OutOfRange)?;
    let start = end.checked_sub(length).ok_or(Error::OutOfRange)?;
    Self::new(start, end)
  }

  /// The window covering the most recent `length` of time.
  pub fn last(length: std::time::Duration) -> Result<Self, Error> {
    Self::ending_at(OffsetDateTime::now_utc(), length)
  }

  /// Parses both bounds from the `YYYY-MM-DDTHH:MM:SS` layout.
  pub fn parse(start: &str, end: &str) -> Result<Self, Error> {
    Self::new(parse_timestamp(start)?, parse_timestamp(end)?)
  }

  pub fn start(&self) -> OffsetDateTime {
    self.start
  }

  pub fn end(&self) -> OffsetDateTime {
    self.end
  }

  pub fn contains(&self, instant: OffsetDateTime) -> bool {
    self.start <= instant && instant <= self.end
  }
}

impl Display for TimeWindow {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let start =
      format_timestamp(&self.start).map_err(|_| std::fmt::Error)?;
    let end = format_timestamp(&self.end).map_err(|_| std::fmt::Error)?;
    write!(f, "{start} .. {end}")
  }
}

/// Renders an instant as `YYYY-MM-DDTHH:MM:SS` in UTC, dropping
/// sub-second precision.
pub fn format_timestamp(instant: &OffsetDateTime) -> Result<String, Error> {
  instant
    .to_offset(UtcOffset::UTC)
    .format(TIMESTAMP_FORMAT)
    .map_err(|e| Error::Unformattable(e.to_string()))
}

pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, Error> {
  PrimitiveDateTime::parse(value.trim(), TIMESTAMP_FORMAT)
    .map(PrimitiveDateTime::assume_utc)
    .map_err(|_| Error::InvalidTimestamp(value.to_owned()))
}

#[cfg(test)]
mod tests {
  use {
    super::{format_timestamp, parse_timestamp, Error, TimeWindow},
    std::time::Duration,
    time::macros::datetime,
  };

  #[test]
  fn formats_without_fraction() {
    let instant = datetime!(2024-03-05 07:08:09.750 UTC);
    assert_eq!(format_timestamp(&instant).unwrap(), "2024-03-05T07:08:09");
  }

  #[test]
  fn formatted_timestamps_parse_back() {
    let instant = datetime!(2024-12-31 23:59:59.999 +05:30);
    let text = format_timestamp(&instant).unwrap();
    assert_eq!(text, "2024-12-31T18:29:59");
    assert_eq!(
      parse_timestamp(&text).unwrap(),
      datetime!(2024-12-31 18:29:59 UTC)
    );
  }

  #[test]
  fn formats_in_utc() {
    let instant = datetime!(2024-03-05 01:00:00 +02:00);
    assert_eq!(format_timestamp(&instant).unwrap(), "2024-03-04T23:00:00");
  }

  #[test]
  fn rejects_inverted_window() {
    let result =
      TimeWindow::parse("2024-01-02T00:00:00", "2024-01-01T00:00:00");
    assert_eq!(
      result,
      Err(Error::Inverted(
        datetime!(2024-01-02 00:00:00 UTC),
        datetime!(2024-01-01 00:00:00 UTC)
      ))
    );
  }

  #[test]
  fn rejects_bad_timestamps() {
    assert_eq!(
      TimeWindow::parse("yesterday", "2024-01-01T00:00:00"),
      Err(Error::InvalidTimestamp("yesterday".into()))
    );
  }

  #[test]
  fn last_day_window() -> anyhow::Result<()> {
    let end = datetime!(2024-06-01 12:00:00 UTC);
    let window = TimeWindow::ending_at(end, Duration::from_secs(24 * 3600))?;
    assert_eq!(window.start(), datetime!(2024-05-31 12:00:00 UTC));
    assert!(window.contains(datetime!(2024-06-01 00:00:00 UTC)));
    assert!(!window.contains(datetime!(2024-06-01 12:00:01 UTC)));
    assert_eq!(
      window.to_string(),
      "2024-05-31T12:00:00 .. 2024-06-01T12:00:00"
    );
    Ok(())
  }

  #[test]
  fn zero_length_window_is_valid() {
    let window = TimeWindow::now();
    assert_eq!(window.start(), window.end());
  }
}
