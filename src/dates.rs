use crate::errors::EngineError;
use chrono::{DateTime, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a log date of record.
///
/// Accepts a zero-padded `YYYY-MM-DD` date, or an RFC 3339 timestamp whose
/// date is taken as written (the time and offset are dropped, not converted).
pub fn parse_log_date(input: &str) -> Result<NaiveDate, EngineError> {
    if input.len() == 10 {
        if !is_plain_date_shape(input) {
            return Err(EngineError::parse(input, "expected YYYY-MM-DD"));
        }
        return NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map_err(|err| EngineError::parse(input, err.to_string()));
    }

    if input.contains('T') {
        return DateTime::parse_from_rfc3339(input)
            .map(|stamp| stamp.date_naive())
            .map_err(|err| EngineError::parse(input, err.to_string()));
    }

    Err(EngineError::parse(input, "expected YYYY-MM-DD"))
}

/// Parses, deduplicates and sorts log dates, most recent first.
pub fn normalize_dates<I, S>(raw: I) -> Result<Vec<NaiveDate>, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dates = raw
        .into_iter()
        .map(|value| parse_log_date(value.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();
    Ok(dates)
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn is_plain_date_shape(input: &str) -> bool {
    input.bytes().enumerate().all(|(idx, byte)| match idx {
        4 | 7 => byte == b'-',
        _ => byte.is_ascii_digit(),
    })
}
