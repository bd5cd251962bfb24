// Date utility functions
// Monday-first week helpers used by the day and week timelines

use chrono::{Datelike, Duration, NaiveDate};

/// Monday = 0 ... Sunday = 6
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(weekday_index(date) as i64)
}

/// The seven days of the week containing `date`, Monday first.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = start_of_week(date);
    std::array::from_fn(|offset| monday + Duration::days(offset as i64))
}

/// "Mon 10"
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a %d").to_string()
}
