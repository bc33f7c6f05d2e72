use super::DbClient;
use crate::db::models::DashboardStats;
use crate::schema::{colleges, companies, courses, jobs, streams, users};
use crate::Result;
use diesel::QueryDsl;
use diesel_async::RunQueryDsl;
use tracing::info;

impl DbClient {
    /// Row counts shown on the admin dashboard
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        let conn = &mut self.get_db_conn().await?;

        let stats = DashboardStats {
            total_streams: streams::table.count().get_result(conn).await?,
            total_courses: courses::table.count().get_result(conn).await?,
            total_colleges: colleges::table.count().get_result(conn).await?,
            total_companies: companies::table.count().get_result(conn).await?,
            total_jobs: jobs::table.count().get_result(conn).await?,
            total_users: users::table.count().get_result(conn).await?,
        };
        info!("Dashboard stats: {:?}", stats);
        Ok(stats)
    }
}
