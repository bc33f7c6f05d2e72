use crate::schema::{colleges, companies, courses, jobs, streams, users};
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Identifiable, Queryable, Selectable)]
#[diesel(table_name = streams, primary_key(id))]
pub struct Stream {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Insertable, AsChangeset)]
#[diesel(table_name = streams, treat_none_as_null = true)]
pub struct StreamChangeset {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Identifiable, Queryable, Selectable)]
#[diesel(table_name = courses, primary_key(id))]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub eligibility: Option<String>,
    pub stream_id: Option<i32>,
    #[serde(rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Insertable, AsChangeset)]
#[diesel(table_name = courses, treat_none_as_null = true)]
pub struct CourseChangeset {
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub eligibility: Option<String>,
    pub stream_id: Option<i32>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Identifiable, Queryable, Selectable)]
#[diesel(table_name = colleges, primary_key(id))]
pub struct College {
    pub id: i32,
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
}

#[derive(Clone, Debug, Insertable, AsChangeset)]
#[diesel(table_name = colleges, treat_none_as_null = true)]
pub struct CollegeChangeset {
    pub name: String,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub founded: Option<i32>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    pub avg_salary: Option<String>,
    pub fees: Option<String>,
    pub application_deadline: Option<String>,
    pub application_process: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Identifiable, Queryable, Selectable)]
#[diesel(table_name = companies, primary_key(id))]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Clone, Debug, Insertable, AsChangeset)]
#[diesel(table_name = companies, treat_none_as_null = true)]
pub struct CompanyChangeset {
    pub name: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Identifiable, Queryable, Selectable)]
#[diesel(table_name = jobs, primary_key(id))]
pub struct Job {
    pub id: i32,
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
    pub posted_date: NaiveDate,
    pub deadline: Option<NaiveDate>,
    pub company_logo: Option<String>,
    pub application_url: Option<String>,
}

/// Job columns an update may touch. `posted_date` is fixed at creation.
#[derive(Clone, Debug, Insertable, AsChangeset)]
#[diesel(table_name = jobs, treat_none_as_null = true)]
pub struct JobChangeset {
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
    pub deadline: Option<NaiveDate>,
    pub company_logo: Option<String>,
    pub application_url: Option<String>,
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = jobs)]
pub struct NewJob {
    #[diesel(embed)]
    pub fields: JobChangeset,
    pub posted_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Identifiable, Queryable, Selectable)]
#[diesel(table_name = users, primary_key(id))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}
