use super::redis::college_cache_key;
use super::DbClient;
use crate::db::models::{College, CollegeChangeset, CollegeDetails};
use crate::errors::ApiError;
use crate::schema::{college_courses, colleges, companies, company_colleges};
use crate::Result;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::{error, info};

/// Sorts and dedups association ids so the composite keys never collide
fn unique_ids(ids: &[i32]) -> Vec<i32> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

async fn link_courses(conn: &mut AsyncPgConnection, college: i32, course_ids: &[i32]) -> Result<()> {
    let rows: Vec<_> = unique_ids(course_ids)
        .into_iter()
        .map(|course| {
            (
                college_courses::college_id.eq(college),
                college_courses::course_id.eq(course),
            )
        })
        .collect();
    if rows.is_empty() {
        return Ok(());
    }

    diesel::insert_into(college_courses::table)
        .values(rows)
        .execute(conn)
        .await?;
    Ok(())
}

async fn link_companies(
    conn: &mut AsyncPgConnection,
    college: i32,
    company_ids: &[i32],
) -> Result<()> {
    let rows: Vec<_> = unique_ids(company_ids)
        .into_iter()
        .map(|company| {
            (
                company_colleges::company_id.eq(company),
                company_colleges::college_id.eq(college),
            )
        })
        .collect();
    if rows.is_empty() {
        return Ok(());
    }

    diesel::insert_into(company_colleges::table)
        .values(rows)
        .execute(conn)
        .await?;
    Ok(())
}

/// DbClient helper functions for the colleges table and its associations
impl DbClient {
    /// Retrieves all colleges, or only those offering `course_id`
    pub async fn get_colleges(&self, course_id: Option<i32>) -> Result<Vec<College>> {
        if let Some(course_id) = course_id {
            return self.get_colleges_by_course(course_id).await;
        }

        let conn = &mut self.get_db_conn().await?;
        colleges::table
            .select(College::as_select())
            .order(colleges::id.asc())
            .load::<College>(conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch colleges: {}", e);
                ApiError::Diesel(e)
            })
    }

    /// Retrieves a college with the names of its recruiters and its course ids
    pub async fn get_college_details(&self, college_id: i32) -> Result<CollegeDetails> {
        let key = college_cache_key(college_id);
        if let Some(cached) = self.get_cached_json::<CollegeDetails>(&key).await {
            return Ok(cached);
        }

        let conn = &mut self.get_db_conn().await?;

        let college = colleges::table
            .find(college_id)
            .select(College::as_select())
            .first::<College>(conn)
            .await
            .map_err(|e| match e {
                diesel::result::Error::NotFound => ApiError::NotFound("College not found".into()),
                e => e.into(),
            })?;

        let recruiter_names = companies::table
            .inner_join(company_colleges::table)
            .filter(company_colleges::college_id.eq(college_id))
            .select(companies::name)
            .order(companies::name.asc())
            .load::<String>(conn)
            .await?;

        let course_ids = college_courses::table
            .filter(college_courses::college_id.eq(college_id))
            .select(college_courses::course_id)
            .order(college_courses::course_id.asc())
            .load::<i32>(conn)
            .await?;

        let details = CollegeDetails {
            college,
            companies: recruiter_names,
            courses: course_ids,
        };
        self.put_cached_json(&key, &details).await;
        Ok(details)
    }

    /// Inserts a college and its associations in one transaction
    pub async fn insert_college(
        &self,
        payload: CollegeChangeset,
        course_ids: Vec<i32>,
        company_ids: Vec<i32>,
    ) -> Result<i32> {
        info!("Inserting college: {}", payload.name);

        self.execute_transaction("insert_college", move |conn| {
            async move {
                let new_id = diesel::insert_into(colleges::table)
                    .values(&payload)
                    .returning(colleges::id)
                    .get_result::<i32>(conn)
                    .await?;

                link_courses(conn, new_id, &course_ids).await?;
                link_companies(conn, new_id, &company_ids).await?;
                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    /// Replaces a college row and, when given, its association lists in one transaction
    pub async fn update_college(
        &self,
        college_id: i32,
        payload: CollegeChangeset,
        course_ids: Option<Vec<i32>>,
        company_ids: Option<Vec<i32>>,
    ) -> Result<()> {
        self.execute_transaction("update_college", move |conn| {
            async move {
                let updated = diesel::update(colleges::table.find(college_id))
                    .set(&payload)
                    .execute(conn)
                    .await?;
                if updated == 0 {
                    return Err(ApiError::NotFound("College not found".into()));
                }

                if let Some(course_ids) = course_ids {
                    diesel::delete(
                        college_courses::table.filter(college_courses::college_id.eq(college_id)),
                    )
                    .execute(conn)
                    .await?;
                    link_courses(conn, college_id, &course_ids).await?;
                }

                if let Some(company_ids) = company_ids {
                    diesel::delete(
                        company_colleges::table
                            .filter(company_colleges::college_id.eq(college_id)),
                    )
                    .execute(conn)
                    .await?;
                    link_companies(conn, college_id, &company_ids).await?;
                }

                Ok(())
            }
            .scope_boxed()
        })
        .await?;

        self.invalidate_cache(&[college_cache_key(college_id)]).await;
        Ok(())
    }

    /// Deletes a college. Its associations go with it through `ON DELETE CASCADE`.
    pub async fn delete_college(&self, college_id: i32) -> Result<()> {
        let conn = &mut self.get_db_conn().await?;

        let deleted = diesel::delete(colleges::table.find(college_id))
            .execute(conn)
            .await?;
        if deleted == 0 {
            return Err(ApiError::NotFound("College not found".into()));
        }

        self.invalidate_cache(&[college_cache_key(college_id)]).await;
        Ok(())
    }
}
