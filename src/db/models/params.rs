use super::{CollegeChangeset, CompanyChangeset, CourseChangeset, JobChangeset, StreamChangeset};
use crate::validation::{
    validate_max_len, validate_optional_url, validate_rating, validate_required,
    validate_salary_range, validate_slug,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Checks each `(field, value, column limit)` triple
fn validate_lengths(fields: &[(&str, Option<&str>, usize)]) -> Result<(), String> {
    fields
        .iter()
        .try_for_each(|(field, value, max)| validate_max_len(field, *value, *max))
}

/// Trims a text field and drops it when blank
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Body of stream create/update requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamPayload {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

impl StreamPayload {
    pub fn validate(&self) -> Result<(), String> {
        validate_slug(&self.slug)?;
        validate_required("Name", &self.name)?;
        validate_lengths(&[
            ("Slug", Some(self.slug.as_str()), 50),
            ("Name", Some(self.name.as_str()), 100),
        ])
    }
}

impl From<StreamPayload> for StreamChangeset {
    fn from(payload: StreamPayload) -> Self {
        StreamChangeset {
            slug: payload.slug.trim().to_string(),
            name: payload.name.trim().to_string(),
            description: clean(payload.description),
        }
    }
}

/// Body of course create/update requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoursePayload {
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub eligibility: Option<String>,
    pub stream_id: Option<i32>,
    #[serde(rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
}

impl CoursePayload {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("Title", &self.title)?;
        validate_optional_url("imageUrl", self.image_url.as_deref())?;
        validate_lengths(&[
            ("Title", Some(self.title.as_str()), 200),
            ("Duration", self.duration.as_deref(), 50),
            ("Eligibility", self.eligibility.as_deref(), 200),
            ("imageUrl", self.image_url.as_deref(), 500),
        ])
    }
}

impl From<CoursePayload> for CourseChangeset {
    fn from(payload: CoursePayload) -> Self {
        CourseChangeset {
            title: payload.title.trim().to_string(),
            description: clean(payload.description),
            duration: clean(payload.duration),
            eligibility: clean(payload.eligibility),
            stream_id: payload.stream_id,
            image_url: clean(payload.image_url),
        }
    }
}

/// Body of college create/update requests.
///
/// `courses` and `companies` carry association ids. On update a missing list leaves
/// the existing associations alone while an empty list clears them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollegePayload {
    pub name: String,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub founded: Option<i32>,
    pub website: Option<String>,
    #[serde(rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
    pub avg_salary: Option<String>,
    pub fees: Option<String>,
    pub application_deadline: Option<String>,
    pub application_process: Option<String>,
    pub courses: Option<Vec<i32>>,
    pub companies: Option<Vec<i32>>,
}

impl CollegePayload {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("Name", &self.name)?;
        validate_rating(self.rating)?;
        validate_optional_url("website", self.website.as_deref())?;
        validate_optional_url("imageUrl", self.image_url.as_deref())?;
        validate_lengths(&[
            ("Name", Some(self.name.as_str()), 200),
            ("Location", self.location.as_deref(), 200),
            ("website", self.website.as_deref(), 500),
            ("imageUrl", self.image_url.as_deref(), 500),
            ("Average salary", self.avg_salary.as_deref(), 100),
            ("Fees", self.fees.as_deref(), 100),
            ("Application deadline", self.application_deadline.as_deref(), 100),
        ])
    }

    /// Splits the payload into the college row and its association lists
    pub fn into_parts(self) -> (CollegeChangeset, Option<Vec<i32>>, Option<Vec<i32>>) {
        let changeset = CollegeChangeset {
            name: self.name.trim().to_string(),
            location: clean(self.location),
            rating: self.rating,
            description: clean(self.description),
            founded: self.founded,
            website: clean(self.website),
            image_url: clean(self.image_url),
            avg_salary: clean(self.avg_salary),
            fees: clean(self.fees),
            application_deadline: clean(self.application_deadline),
            application_process: clean(self.application_process),
        };
        (changeset, self.courses, self.companies)
    }
}

/// Body of company create/update requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyPayload {
    pub name: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

impl CompanyPayload {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("Name", &self.name)?;
        validate_optional_url("website", self.website.as_deref())?;
        validate_optional_url("logo_url", self.logo_url.as_deref())?;
        validate_lengths(&[
            ("Name", Some(self.name.as_str()), 200),
            ("website", self.website.as_deref(), 500),
            ("logo_url", self.logo_url.as_deref(), 500),
        ])
    }
}

impl From<CompanyPayload> for CompanyChangeset {
    fn from(payload: CompanyPayload) -> Self {
        CompanyChangeset {
            name: payload.name.trim().to_string(),
            website: clean(payload.website),
            logo_url: clean(payload.logo_url),
        }
    }
}

/// Body of job create/update requests. `posted_date` is only read on create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPayload {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub salary_range_min: Option<i32>,
    pub salary_range_max: Option<i32>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub posted_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub company_logo: Option<String>,
    pub application_url: Option<String>,
}

impl JobPayload {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("Title", &self.title)?;
        validate_required("Company", &self.company)?;
        validate_salary_range(self.salary_range_min, self.salary_range_max)?;
        validate_optional_url("company_logo", self.company_logo.as_deref())?;
        validate_optional_url("application_url", self.application_url.as_deref())?;
        validate_lengths(&[
            ("Title", Some(self.title.as_str()), 200),
            ("Company", Some(self.company.as_str()), 200),
            ("Location", self.location.as_deref(), 200),
            ("Job type", self.job_type.as_deref(), 50),
            ("Experience", self.experience.as_deref(), 50),
            ("Industry", self.industry.as_deref(), 100),
            ("company_logo", self.company_logo.as_deref(), 500),
            ("application_url", self.application_url.as_deref(), 500),
        ])
    }

    /// Splits the payload into the updatable columns and the requested posted date
    pub fn into_parts(self) -> (JobChangeset, Option<NaiveDate>) {
        let changeset = JobChangeset {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: clean(self.location),
            salary_range_min: self.salary_range_min,
            salary_range_max: self.salary_range_max,
            job_type: clean(self.job_type),
            experience: clean(self.experience),
            industry: clean(self.industry),
            description: clean(self.description),
            requirements: clean(self.requirements),
            deadline: self.deadline,
            company_logo: clean(self.company_logo),
            application_url: clean(self.application_url),
        };
        (changeset, self.posted_date)
    }
}

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Query parameters for `GET /api/courses`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseQuery {
    /// Numeric stream id
    pub stream_id: Option<i32>,
    /// Stream slug such as `science`
    pub stream: Option<String>,
    pub search: Option<String>,
}

/// Sort orders offered on the college listing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollegeSort {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "fees-low")]
    FeesLow,
    #[serde(rename = "fees-high")]
    FeesHigh,
    #[serde(rename = "salary-high")]
    SalaryHigh,
    #[serde(rename = "name-asc")]
    NameAsc,
}

/// Query parameters for `GET /api/colleges`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeQuery {
    pub course_id: Option<i32>,
    pub search: Option<String>,
    pub sort: Option<CollegeSort>,
}

/// Sort orders offered on the job listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobSort {
    #[serde(rename = "recent")]
    Recent,
    #[serde(rename = "salary-high")]
    SalaryHigh,
    #[serde(rename = "deadline")]
    Deadline,
}

/// Query parameters for `GET /api/jobs`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilters {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary_min: Option<i32>,
    /// Matched against title, company and description
    pub keyword: Option<String>,
    pub job_type: Option<String>,
    pub industry: Option<String>,
    pub sort: Option<JobSort>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_payload_accepts_both_image_spellings() {
        let camel: CoursePayload =
            serde_json::from_str(r#"{"title":"BBA","imageUrl":"https://x.io/a.png"}"#).unwrap();
        let snake: CoursePayload =
            serde_json::from_str(r#"{"title":"BBA","image_url":"https://x.io/a.png"}"#).unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.image_url.as_deref(), Some("https://x.io/a.png"));
    }

    #[test]
    fn test_course_changeset_cleans_blank_fields() {
        let payload = CoursePayload {
            title: "  B.Com ".to_string(),
            description: Some("   ".to_string()),
            duration: Some("3 Years".to_string()),
            eligibility: None,
            stream_id: Some(2),
            image_url: Some(String::new()),
        };
        let changeset = CourseChangeset::from(payload);
        assert_eq!(changeset.title, "B.Com");
        assert_eq!(changeset.description, None);
        assert_eq!(changeset.duration.as_deref(), Some("3 Years"));
        assert_eq!(changeset.image_url, None);
    }

    #[test]
    fn test_college_payload_validation() {
        let mut payload: CollegePayload = serde_json::from_str(
            r#"{"name":"SRCC","rating":4.7,"website":"https://www.srcc.edu/","courses":[1,2]}"#,
        )
        .unwrap();
        assert_eq!(payload.validate(), Ok(()));

        payload.rating = Some(7.0);
        assert!(payload.validate().is_err());

        payload.rating = None;
        payload.name = " ".to_string();
        assert_eq!(payload.validate(), Err("Name cannot be empty".to_string()));
    }

    #[test]
    fn test_college_payload_association_lists() {
        let payload: CollegePayload =
            serde_json::from_str(r#"{"name":"AIIMS","companies":[]}"#).unwrap();
        let (changeset, courses, companies) = payload.into_parts();
        assert_eq!(changeset.name, "AIIMS");
        assert_eq!(courses, None);
        assert_eq!(companies, Some(vec![]));
    }

    #[test]
    fn test_job_payload_validation() {
        let payload: JobPayload = serde_json::from_str(
            r#"{"title":"Data Scientist","company":"Analytics Plus",
                "salary_range_min":2200000,"salary_range_max":1500000}"#,
        )
        .unwrap();
        assert_eq!(
            payload.validate(),
            Err("Minimum salary cannot be greater than maximum salary".to_string())
        );
    }

    #[test]
    fn test_overlong_fields_rejected() {
        let mut college: CollegePayload =
            serde_json::from_str(r#"{"name":"SRCC","fees":"₹45,000 per year"}"#).unwrap();
        assert_eq!(college.validate(), Ok(()));
        college.fees = Some("9".repeat(101));
        assert_eq!(
            college.validate(),
            Err("Fees must be at most 100 characters".to_string())
        );

        let stream = StreamPayload {
            slug: "a".repeat(51),
            name: "Long".to_string(),
            description: None,
        };
        assert_eq!(
            stream.validate(),
            Err("Slug must be at most 50 characters".to_string())
        );

        let job: JobPayload = serde_json::from_str(&format!(
            r#"{{"title":"Analyst","company":"Capital Partners","job_type":"{}"}}"#,
            "x".repeat(51)
        ))
        .unwrap();
        assert_eq!(
            job.validate(),
            Err("Job type must be at most 50 characters".to_string())
        );
    }

    #[test]
    fn test_job_payload_dates() {
        let payload: JobPayload = serde_json::from_str(
            r#"{"title":"Analyst","company":"Capital Partners",
                "posted_date":"2025-04-28","deadline":"2025-05-28"}"#,
        )
        .unwrap();
        let (changeset, posted) = payload.into_parts();
        assert_eq!(posted, NaiveDate::from_ymd_opt(2025, 4, 28));
        assert_eq!(changeset.deadline, NaiveDate::from_ymd_opt(2025, 5, 28));
    }

    #[test]
    fn test_query_param_names() {
        let query: JobFilters =
            serde_json::from_str(r#"{"salaryMin":500000,"jobType":"full-time","sort":"salary-high"}"#)
                .unwrap();
        assert_eq!(query.salary_min, Some(500000));
        assert_eq!(query.job_type.as_deref(), Some("full-time"));
        assert_eq!(query.sort, Some(JobSort::SalaryHigh));

        let query: CollegeQuery =
            serde_json::from_str(r#"{"courseId":3,"sort":"fees-low"}"#).unwrap();
        assert_eq!(query.course_id, Some(3));
        assert_eq!(query.sort, Some(CollegeSort::FeesLow));
    }
}
