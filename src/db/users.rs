use super::DbClient;
use crate::db::models::User;
use crate::errors::ApiError;
use crate::schema::users;
use crate::Result;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

/// DbClient helper functions for the users table
impl DbClient {
    pub async fn get_user_by_username(&self, name: &str) -> Result<User> {
        let conn = &mut self.get_db_conn().await?;
        users::table
            .filter(users::username.eq(name))
            .select(User::as_select())
            .first::<User>(conn)
            .await
            .map_err(|e| match e {
                diesel::result::Error::NotFound => ApiError::NotFound("User not found".into()),
                e => e.into(),
            })
    }
}
