use axum::extract::FromRef;

use crate::db::DbClient;

/// The single username/password pair accepted by the admin login
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: DbClient,
    pub credentials: AdminCredentials,
}

impl FromRef<AppState> for DbClient {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for AdminCredentials {
    fn from_ref(state: &AppState) -> Self {
        state.credentials.clone()
    }
}
