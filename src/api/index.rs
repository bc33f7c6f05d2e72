use axum::Json;
use serde_json::{json, Value};
use std::sync::OnceLock;

/// Static JSON response for the index endpoint
static INDEX_JSON: OnceLock<Value> = OnceLock::new();

/// Handler for the index endpoint that provides API documentation
///
/// # Endpoint: GET /
///
/// # Returns
/// * `Json<Value>` - JSON response containing API endpoint documentation
pub fn index() -> Json<Value> {
    let value = INDEX_JSON.get_or_init(|| {
        json!({
            "endpoints": [
                {
                    "path": "/",
                    "method": "GET",
                    "description": "API endpoint documentation",
                    "params": {}
                },
                {
                    "path": "/health",
                    "method": "GET",
                    "description": "Liveness probe",
                    "params": {}
                },
                {
                    "path": "/api/test",
                    "method": "GET",
                    "description": "Check the database connection and list its tables",
                    "params": {}
                },
                {
                    "path": "/api/streams",
                    "method": "GET",
                    "description": "List academic streams",
                    "params": {}
                },
                {
                    "path": "/api/streams/:id",
                    "method": "GET",
                    "description": "Get a stream",
                    "params": {
                        "id": {
                            "type": "integer",
                            "required": true,
                            "description": "Stream id"
                        }
                    }
                },
                {
                    "path": "/api/courses",
                    "method": "GET",
                    "description": "List courses",
                    "params": {
                        "streamId": {
                            "type": "integer",
                            "required": false,
                            "description": "Only courses of this stream"
                        },
                        "stream": {
                            "type": "string",
                            "required": false,
                            "description": "Only courses of the stream with this slug"
                        },
                        "search": {
                            "type": "string",
                            "required": false,
                            "description": "Case-insensitive match on title and description"
                        }
                    }
                },
                {
                    "path": "/api/courses/:id",
                    "method": "GET",
                    "description": "Get a course",
                    "params": {
                        "id": {
                            "type": "integer",
                            "required": true,
                            "description": "Course id"
                        }
                    }
                },
                {
                    "path": "/api/courses/:id/colleges",
                    "method": "GET",
                    "description": "Colleges offering a course",
                    "params": {
                        "id": {
                            "type": "integer",
                            "required": true,
                            "description": "Course id"
                        }
                    }
                },
                {
                    "path": "/api/colleges/by-course/:courseId",
                    "method": "GET",
                    "description": "Colleges offering a course",
                    "params": {
                        "courseId": {
                            "type": "integer",
                            "required": true,
                            "description": "Course id"
                        }
                    }
                },
                {
                    "path": "/api/colleges",
                    "method": "GET",
                    "description": "List colleges",
                    "params": {
                        "courseId": {
                            "type": "integer",
                            "required": false,
                            "description": "Only colleges offering this course"
                        },
                        "search": {
                            "type": "string",
                            "required": false,
                            "description": "Case-insensitive match on name, location and description"
                        },
                        "sort": {
                            "type": "string",
                            "required": false,
                            "description": "default, fees-low, fees-high, salary-high or name-asc"
                        }
                    }
                },
                {
                    "path": "/api/colleges/:id",
                    "method": "GET",
                    "description": "Get a college with its recruiting companies and course ids",
                    "params": {
                        "id": {
                            "type": "integer",
                            "required": true,
                            "description": "College id"
                        }
                    }
                },
                {
                    "path": "/api/companies",
                    "method": "GET",
                    "description": "List companies",
                    "params": {}
                },
                {
                    "path": "/api/jobs",
                    "method": "GET",
                    "description": "Search job listings",
                    "params": {
                        "title": {
                            "type": "string",
                            "required": false,
                            "description": "Case-insensitive substring of the title"
                        },
                        "company": {
                            "type": "string",
                            "required": false,
                            "description": "Case-insensitive substring of the company"
                        },
                        "location": {
                            "type": "string",
                            "required": false,
                            "description": "Case-insensitive substring of the location"
                        },
                        "salaryMin": {
                            "type": "integer",
                            "required": false,
                            "description": "Minimum of the salary range is at least this"
                        },
                        "keyword": {
                            "type": "string",
                            "required": false,
                            "description": "Matched against title, company and description"
                        },
                        "jobType": {
                            "type": "string",
                            "required": false,
                            "description": "Exact job type"
                        },
                        "industry": {
                            "type": "string",
                            "required": false,
                            "description": "Exact industry"
                        },
                        "sort": {
                            "type": "string",
                            "required": false,
                            "description": "recent, salary-high or deadline"
                        }
                    }
                },
                {
                    "path": "/api/jobs/:id",
                    "method": "GET",
                    "description": "Get a job listing with days remaining until its deadline",
                    "params": {
                        "id": {
                            "type": "integer",
                            "required": true,
                            "description": "Job id"
                        }
                    }
                },
                {
                    "path": "/api/auth/login",
                    "method": "POST",
                    "description": "Admin login",
                    "params": {
                        "username": {
                            "type": "string",
                            "required": true,
                            "description": "Admin username"
                        },
                        "password": {
                            "type": "string",
                            "required": true,
                            "description": "Admin password"
                        }
                    }
                },
                {
                    "path": "/api/{streams,courses,colleges,companies,jobs}",
                    "method": "POST",
                    "description": "Create a record, also served under /api/admin",
                    "params": {}
                },
                {
                    "path": "/api/{streams,courses,colleges,companies,jobs}/:id",
                    "method": "PUT",
                    "description": "Replace a record, also served under /api/admin",
                    "params": {
                        "id": {
                            "type": "integer",
                            "required": true,
                            "description": "Record id"
                        }
                    }
                },
                {
                    "path": "/api/{streams,courses,colleges,companies,jobs}/:id",
                    "method": "DELETE",
                    "description": "Delete a record, also served under /api/admin",
                    "params": {
                        "id": {
                            "type": "integer",
                            "required": true,
                            "description": "Record id"
                        }
                    }
                },
                {
                    "path": "/api/admin/stats",
                    "method": "GET",
                    "description": "Row counts for the admin dashboard",
                    "params": {}
                }
            ]
        })
    });

    Json(value.clone())
}
