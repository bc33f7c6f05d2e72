use crate::db::models::{Job, JobDetails};
use chrono::{DateTime, NaiveDate, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days from `now` until the start of the deadline day in UTC, rounded up.
/// Negative once the deadline has passed.
pub fn days_remaining(deadline: Option<NaiveDate>, now: DateTime<Utc>) -> Option<i64> {
    let deadline = deadline?.and_hms_opt(0, 0, 0)?.and_utc();
    let millis = (deadline - now).num_milliseconds();
    Some(millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) != 0))
}

pub fn to_details(job: Job, now: DateTime<Utc>) -> JobDetails {
    let days_remaining = days_remaining(job.deadline, now);
    JobDetails {
        job,
        days_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_days_remaining_rounds_up() {
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(days_remaining(date(2025, 5, 2), now), Some(1));
        assert_eq!(days_remaining(date(2025, 5, 31), now), Some(30));
    }

    #[test]
    fn test_days_remaining_at_midnight_and_past() {
        let midnight = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(days_remaining(date(2025, 5, 1), midnight), Some(0));
        assert_eq!(days_remaining(date(2025, 4, 29), midnight), Some(-2));

        let afternoon = Utc.with_ymd_and_hms(2025, 5, 1, 15, 0, 0).unwrap();
        assert_eq!(days_remaining(date(2025, 5, 1), afternoon), Some(0));
        assert_eq!(days_remaining(date(2025, 4, 30), afternoon), Some(-1));
    }

    #[test]
    fn test_days_remaining_counts_sub_second_remainder() {
        let deadline = date(2025, 5, 2);
        let just_before = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(days_remaining(deadline, just_before), Some(1));

        let just_past = Utc.with_ymd_and_hms(2025, 5, 2, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(days_remaining(deadline, just_past), Some(0));

        let last_half_second = Utc.with_ymd_and_hms(2025, 5, 1, 23, 59, 59).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(days_remaining(deadline, last_half_second), Some(1));
    }

    #[test]
    fn test_no_deadline() {
        assert_eq!(days_remaining(None, Utc::now()), None);
    }

    #[test]
    fn test_details_serialize_flat() {
        let job = Job {
            id: 3,
            title: "Financial Analyst".to_string(),
            company: "Capital Partners".to_string(),
            location: Some("Mumbai".to_string()),
            salary_range_min: Some(800000),
            salary_range_max: Some(1200000),
            job_type: Some("full-time".to_string()),
            experience: None,
            industry: Some("Finance".to_string()),
            description: None,
            requirements: None,
            posted_date: NaiveDate::from_ymd_opt(2025, 4, 28).unwrap(),
            deadline: date(2025, 5, 28),
            company_logo: None,
            application_url: None,
        };
        let now = Utc.with_ymd_and_hms(2025, 5, 27, 6, 0, 0).unwrap();
        let value = serde_json::to_value(to_details(job, now)).unwrap();
        assert_eq!(value["title"], "Financial Analyst");
        assert_eq!(value["deadline"], "2025-05-28");
        assert_eq!(value["days_remaining"], 1);
    }
}
