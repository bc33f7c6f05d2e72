use crate::db::models::{College, CollegeSort, Course};
use std::cmp::Ordering;

/// Case-insensitive substring match over a set of optional text fields
///
/// # Arguments
/// * `query` - Search text, a blank query matches everything
/// * `fields` - Candidate fields, absent ones never match
///
/// # Returns
/// * `bool` - Whether any field contains the query
pub fn matches_search(query: &str, fields: &[Option<&str>]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keeps the courses whose title or description matches `search`
pub fn filter_courses(courses: Vec<Course>, search: Option<&str>) -> Vec<Course> {
    let Some(search) = search else {
        return courses;
    };
    courses
        .into_iter()
        .filter(|course| {
            matches_search(
                search,
                &[Some(course.title.as_str()), course.description.as_deref()],
            )
        })
        .collect()
}

/// Keeps the colleges whose name, location or description matches `search`
pub fn filter_colleges(colleges: Vec<College>, search: Option<&str>) -> Vec<College> {
    let Some(search) = search else {
        return colleges;
    };
    colleges
        .into_iter()
        .filter(|college| {
            matches_search(
                search,
                &[
                    Some(college.name.as_str()),
                    college.location.as_deref(),
                    college.description.as_deref(),
                ],
            )
        })
        .collect()
}

/// Extracts the numeric amount from a free-form fee string
///
/// # Arguments
/// * `fees` - Text such as `₹40,000 per year` or `₹2.2 Lakhs per year`
///
/// # Returns
/// * `Option<f64>` - The longest numeric prefix once everything but digits and `.` is
///   removed, None if nothing parses
///
/// # Example
/// ```ignore
/// assert_eq!(extract_fee_amount("₹40,000 per year"), Some(40000.0));
/// ```
pub fn extract_fee_amount(fees: &str) -> Option<f64> {
    let numeric: String = fees
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    (1..=numeric.len())
        .rev()
        .find_map(|end| numeric[..end].parse::<f64>().ok())
}

/// Largest run of digits in a salary string, `₹16-25 LPA` gives 25. No digits gives 0.
pub fn extract_max_salary(avg_salary: &str) -> u64 {
    avg_salary
        .split(|c: char| !c.is_ascii_digit())
        .filter_map(|run| run.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

/// Orders fee amounts with unparseable values after every parsed one
fn compare_fees(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts colleges in place. `Default` keeps the storage order.
pub fn sort_colleges(colleges: &mut [College], sort: CollegeSort) {
    let fee = |college: &College| college.fees.as_deref().and_then(extract_fee_amount);
    let salary =
        |college: &College| college.avg_salary.as_deref().map_or(0, extract_max_salary);

    match sort {
        CollegeSort::Default => {}
        CollegeSort::FeesLow => colleges.sort_by(|a, b| compare_fees(fee(a), fee(b), false)),
        CollegeSort::FeesHigh => colleges.sort_by(|a, b| compare_fees(fee(a), fee(b), true)),
        CollegeSort::SalaryHigh => colleges.sort_by_key(|c| std::cmp::Reverse(salary(c))),
        CollegeSort::NameAsc => {
            colleges.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }
}
