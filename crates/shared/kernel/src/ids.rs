use gshop_domain::Timestamp;

/// Returns a creation-time identifier strictly greater than every id in `taken`.
///
/// The token is the creation instant in milliseconds; when two records are created within the
/// same millisecond (or the clock stepped back) it is bumped past the current maximum.
#[must_use]
pub fn next_id(now: Timestamp, taken: impl IntoIterator<Item = u64>) -> u64 {
    let stamp = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    let floor = taken.into_iter().max().map_or(0, |max| max.saturating_add(1));
    stamp.max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn uses_the_clock_when_nothing_is_newer() {
        let now = Utc::now();
        let expected = u64::try_from(now.timestamp_millis()).unwrap();
        assert_eq!(next_id(now, [1, 2, 3]), expected);
    }

    #[test]
    fn bumps_past_the_newest_existing_id() {
        let now = Utc::now();
        let ahead = next_id(now + Duration::seconds(10), []);
        assert_eq!(next_id(now, [ahead]), ahead + 1);
    }
}
