use super::DbClient;
use crate::db::models::{Job, JobChangeset, JobFilters, JobSort, NewJob};
use crate::errors::ApiError;
use crate::schema::jobs;
use crate::Result;
use chrono::{NaiveDate, Utc};
use diesel::pg::Pg;
use diesel::{
    BoolExpressionMethods, ExpressionMethods, NullableExpressionMethods, PgSortExpressionMethods,
    PgTextExpressionMethods, QueryDsl, SelectableHelper,
};
use diesel_async::RunQueryDsl;
use tracing::{error, info};

/// Wraps a user supplied fragment for a substring `ILIKE`, escaping the pattern characters
pub(crate) fn contains_pattern(fragment: &str) -> String {
    let escaped = fragment
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Non-blank, trimmed filter value
fn filter_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Builds the listing query for every filter that is set, in the requested order
pub(crate) fn filtered_jobs(filters: &JobFilters) -> jobs::BoxedQuery<'static, Pg> {
    let mut query = jobs::table.into_boxed();

    if let Some(title) = filter_value(&filters.title) {
        query = query.filter(jobs::title.ilike(contains_pattern(title)));
    }
    if let Some(company) = filter_value(&filters.company) {
        query = query.filter(jobs::company.ilike(contains_pattern(company)));
    }
    if let Some(location) = filter_value(&filters.location) {
        query = query.filter(jobs::location.ilike(contains_pattern(location)));
    }
    if let Some(salary_min) = filters.salary_min {
        query = query.filter(jobs::salary_range_min.ge(salary_min));
    }
    if let Some(keyword) = filter_value(&filters.keyword) {
        let pattern = contains_pattern(keyword);
        query = query.filter(
            jobs::title
                .ilike(pattern.clone())
                .or(jobs::company.ilike(pattern.clone()))
                .or(jobs::description.assume_not_null().ilike(pattern)),
        );
    }
    if let Some(job_type) = filter_value(&filters.job_type) {
        query = query.filter(jobs::job_type.eq(job_type.to_string()));
    }
    if let Some(industry) = filter_value(&filters.industry) {
        query = query.filter(jobs::industry.eq(industry.to_string()));
    }

    match filters.sort.unwrap_or(JobSort::Recent) {
        JobSort::Recent => query.order((jobs::posted_date.desc(), jobs::id.desc())),
        JobSort::SalaryHigh => query.order((
            jobs::salary_range_max.desc().nulls_last(),
            jobs::id.asc(),
        )),
        JobSort::Deadline => query.order((jobs::deadline.asc().nulls_last(), jobs::id.asc())),
    }
}

/// DbClient helper functions for the jobs table
impl DbClient {
    /// Lists jobs matching every filter that is set
    pub async fn get_jobs(&self, filters: &JobFilters) -> Result<Vec<Job>> {
        let conn = &mut self.get_db_conn().await?;

        filtered_jobs(filters)
            .select(Job::as_select())
            .load::<Job>(conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch jobs: {}", e);
                ApiError::Diesel(e)
            })
    }

    pub async fn get_job(&self, job_id: i32) -> Result<Job> {
        let conn = &mut self.get_db_conn().await?;
        jobs::table
            .find(job_id)
            .select(Job::as_select())
            .first::<Job>(conn)
            .await
            .map_err(|e| match e {
                diesel::result::Error::NotFound => ApiError::NotFound("Job not found".into()),
                e => e.into(),
            })
    }

    /// Inserts a job, stamping today's date unless `posted_date` is given
    pub async fn insert_job(
        &self,
        payload: JobChangeset,
        posted_date: Option<NaiveDate>,
    ) -> Result<i32> {
        let conn = &mut self.get_db_conn().await?;

        info!("Inserting job: {} at {}", payload.title, payload.company);
        let new_job = NewJob {
            fields: payload,
            posted_date: posted_date.unwrap_or_else(|| Utc::now().date_naive()),
        };
        diesel::insert_into(jobs::table)
            .values(&new_job)
            .returning(jobs::id)
            .get_result::<i32>(conn)
            .await
            .map_err(Into::into)
    }

    /// Replaces a job's columns. The posted date is kept.
    pub async fn update_job(&self, job_id: i32, payload: &JobChangeset) -> Result<()> {
        let conn = &mut self.get_db_conn().await?;

        let updated = diesel::update(jobs::table.find(job_id))
            .set(payload)
            .execute(conn)
            .await?;
        if updated == 0 {
            return Err(ApiError::NotFound("Job not found".into()));
        }
        Ok(())
    }

    pub async fn delete_job(&self, job_id: i32) -> Result<()> {
        let conn = &mut self.get_db_conn().await?;

        let deleted = diesel::delete(jobs::table.find(job_id))
            .execute(conn)
            .await?;
        if deleted == 0 {
            return Err(ApiError::NotFound("Job not found".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern(" analyst "), "%analyst%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("full_time"), "%full\\_time%");
    }

    #[test]
    fn test_filter_value_skips_blanks() {
        assert_eq!(filter_value(&Some("  ".to_string())), None);
        assert_eq!(filter_value(&Some(" Delhi ".to_string())), Some("Delhi"));
        assert_eq!(filter_value(&None), None);
    }

    #[test]
    fn test_filtered_jobs_sql() {
        let filters = JobFilters {
            title: Some("analyst".to_string()),
            keyword: Some("finance".to_string()),
            salary_min: Some(500000),
            job_type: Some("full-time".to_string()),
            sort: Some(JobSort::SalaryHigh),
            ..Default::default()
        };
        let sql = diesel::debug_query::<Pg, _>(&filtered_jobs(&filters)).to_string();

        assert!(sql.contains("\"jobs\".\"title\" ILIKE $1"));
        assert!(sql.contains("\"jobs\".\"description\" ILIKE"));
        assert!(sql.contains("\"jobs\".\"salary_range_min\" >="));
        assert!(sql.contains("\"jobs\".\"job_type\" ="));
        assert!(sql.contains("\"jobs\".\"salary_range_max\" DESC NULLS LAST"));
        assert!(sql.contains("\"%analyst%\""));
    }

    #[test]
    fn test_filtered_jobs_defaults_to_recent() {
        let sql = diesel::debug_query::<Pg, _>(&filtered_jobs(&JobFilters::default())).to_string();
        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("ORDER BY \"jobs\".\"posted_date\" DESC, \"jobs\".\"id\" DESC"));
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL with the setup script applied"]
    async fn test_job_filters_are_case_insensitive() {
        dotenv::dotenv().ok();
        let db_url = std::env::var("TEST_DATABASE_URL").unwrap();
        let client = DbClient::new(&db_url, None);

        let all = client.get_jobs(&JobFilters::default()).await.unwrap();
        let first = all.iter().next().expect("seeded jobs");

        let filters = JobFilters {
            company: Some(first.company.to_uppercase()),
            ..Default::default()
        };
        let matched = client.get_jobs(&filters).await.unwrap();
        assert!(matched.iter().any(|job| job.id == first.id));
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL with the setup script applied"]
    async fn test_salary_filter_and_sort() {
        dotenv::dotenv().ok();
        let db_url = std::env::var("TEST_DATABASE_URL").unwrap();
        let client = DbClient::new(&db_url, None);

        let filters = JobFilters {
            salary_min: Some(1_000_000),
            sort: Some(JobSort::SalaryHigh),
            ..Default::default()
        };
        let rows = client.get_jobs(&filters).await.unwrap();
        assert!(rows
            .iter()
            .all(|job| job.salary_range_min.unwrap_or_default() >= 1_000_000));
        assert!(rows
            .windows(2)
            .all(|w| w[0].salary_range_max >= w[1].salary_range_max));
    }
}
