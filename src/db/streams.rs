use super::redis::{course_cache_key, STREAMS_CACHE_KEY};
use super::DbClient;
use crate::db::models::{Stream, StreamChangeset};
use crate::errors::ApiError;
use crate::schema::courses;
use crate::Result;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use tracing::{error, info};

/// DbClient helper functions for the streams table
impl DbClient {
    /// Retrieves every stream ordered by id
    pub async fn get_streams(&self) -> Result<Vec<Stream>> {
        use crate::schema::streams::dsl::*;

        if let Some(cached) = self.get_cached_json::<Vec<Stream>>(STREAMS_CACHE_KEY).await {
            return Ok(cached);
        }

        let conn = &mut self.get_db_conn().await?;
        let rows = streams
            .order(id.asc())
            .load::<Stream>(conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch streams: {}", e);
                ApiError::Diesel(e)
            })?;

        self.put_cached_json(STREAMS_CACHE_KEY, &rows).await;
        Ok(rows)
    }

    pub async fn get_stream(&self, stream_id: i32) -> Result<Stream> {
        use crate::schema::streams::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        streams
            .find(stream_id)
            .first::<Stream>(conn)
            .await
            .map_err(|e| match e {
                diesel::result::Error::NotFound => ApiError::NotFound("Stream not found".into()),
                e => e.into(),
            })
    }

    pub async fn insert_stream(&self, payload: &StreamChangeset) -> Result<i32> {
        use crate::schema::streams::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        info!("Inserting stream: {}", payload.slug);
        let new_id = diesel::insert_into(streams)
            .values(payload)
            .returning(id)
            .get_result::<i32>(conn)
            .await?;

        self.invalidate_cache(&[STREAMS_CACHE_KEY.to_string()]).await;
        Ok(new_id)
    }

    pub async fn update_stream(&self, stream_id: i32, payload: &StreamChangeset) -> Result<()> {
        use crate::schema::streams::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        let updated = diesel::update(streams.find(stream_id))
            .set(payload)
            .execute(conn)
            .await?;
        if updated == 0 {
            return Err(ApiError::NotFound("Stream not found".into()));
        }

        self.invalidate_cache(&[STREAMS_CACHE_KEY.to_string()]).await;
        Ok(())
    }

    /// Deletes a stream. Courses of the stream are kept with their stream cleared.
    pub async fn delete_stream(&self, stream_id: i32) -> Result<()> {
        use crate::schema::streams::dsl::*;

        let mut stale = self.stream_course_keys(stream_id).await;
        stale.push(STREAMS_CACHE_KEY.to_string());

        let conn = &mut self.get_db_conn().await?;
        let deleted = diesel::delete(streams.filter(id.eq(stream_id)))
            .execute(conn)
            .await?;
        if deleted == 0 {
            return Err(ApiError::NotFound("Stream not found".into()));
        }

        self.invalidate_cache(&stale).await;
        Ok(())
    }

    /// Cache keys of every course in the stream
    async fn stream_course_keys(&self, stream: i32) -> Vec<String> {
        if !self.cache_enabled() {
            return vec![];
        }

        let ids = match self.get_db_conn().await {
            Ok(mut conn) => courses::table
                .filter(courses::stream_id.eq(stream))
                .select(courses::id)
                .load::<i32>(&mut conn)
                .await
                .unwrap_or_default(),
            Err(_) => vec![],
        };
        ids.into_iter().map(course_cache_key).collect()
    }
}
