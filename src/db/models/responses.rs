use serde::{Deserialize, Serialize};

use super::{College, Company, Course, Job, Stream};

/// Status field of error bodies
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Operation encountered an error
    Error,
}

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status will always be Error for this type
    pub status: Status,
    /// Detailed error message explaining what went wrong
    pub error: String,
}

/// Result of an admin create/update/delete
#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Id of the created record, absent for updates and deletes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub message: String,
}

impl MutationResponse {
    pub fn created(id: i32, entity: &str) -> Self {
        Self {
            id: Some(id),
            message: format!("{entity} added successfully"),
        }
    }

    pub fn updated(entity: &str) -> Self {
        Self {
            id: None,
            message: format!("{entity} updated successfully"),
        }
    }

    pub fn deleted(entity: &str) -> Self {
        Self {
            id: None,
            message: format!("{entity} deleted successfully"),
        }
    }
}

/// A college together with its recruiters and offered courses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeDetails {
    #[serde(flatten)]
    pub college: College,
    /// Names of companies recruiting from the college
    pub companies: Vec<String>,
    /// Ids of courses offered by the college
    pub courses: Vec<i32>,
}

/// A job listing with its computed deadline countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetails {
    #[serde(flatten)]
    pub job: Job,
    /// Whole days until the deadline, negative once it has passed
    pub days_remaining: Option<i64>,
}

/// Row counts for the admin dashboard
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_streams: i64,
    pub total_courses: i64,
    pub total_colleges: i64,
    pub total_companies: i64,
    pub total_jobs: i64,
    pub total_users: i64,
}

/// Public view of the logged in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
    pub role: String,
}

/// Response of `POST /api/auth/login`
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Wrapper for successful responses
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuccessResponse {
    Streams(Vec<Stream>),
    Stream(Stream),
    Courses(Vec<Course>),
    Course(Course),
    Colleges(Vec<College>),
    College(CollegeDetails),
    Companies(Vec<Company>),
    Jobs(Vec<JobDetails>),
    Job(JobDetails),
    Mutation(MutationResponse),
    Stats(DashboardStats),
}

/// Main API response wrapper
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

macro_rules! impl_success_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for SuccessResponse {
                fn from(value: $ty) -> Self {
                    SuccessResponse::$variant(value)
                }
            }
        )*
    };
}

impl_success_from!(
    Vec<Stream> => Streams,
    Stream => Stream,
    Vec<Course> => Courses,
    Course => Course,
    Vec<College> => Colleges,
    CollegeDetails => College,
    Vec<Company> => Companies,
    Vec<JobDetails> => Jobs,
    JobDetails => Job,
    MutationResponse => Mutation,
    DashboardStats => Stats,
);

impl From<SuccessResponse> for ApiResponse {
    fn from(value: SuccessResponse) -> Self {
        ApiResponse::Success(value)
    }
}

impl From<ErrorResponse> for ApiResponse {
    fn from(value: ErrorResponse) -> Self {
        ApiResponse::Error(value)
    }
}
