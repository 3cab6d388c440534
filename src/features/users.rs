//! Registered user list

use crate::api::types::UserRecord;
use crate::studio::Studio;
use log::warn;
use serde::Serialize;

pub const NO_USERS_MESSAGE: &str = "No users found in database.";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading users.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "users", rename_all = "snake_case")]
pub enum UserListView {
    Users(Vec<UserRecord>),
    Empty,
    LoadError,
    ConnectionError,
}

impl UserListView {
    /// Fixed text shown in place of the list, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            UserListView::Users(_) => None,
            UserListView::Empty => Some(NO_USERS_MESSAGE),
            UserListView::LoadError => Some(LOAD_ERROR_MESSAGE),
            UserListView::ConnectionError => Some(CONNECTION_ERROR_MESSAGE),
        }
    }
}

impl Studio {
    /// Fetch and fully replace the rendered user list.
    pub async fn fetch_users(&self) -> UserListView {
        let view = match self.client.get_users().await {
            Ok(response) => match response.users {
                Some(users) if response.success => {
                    if users.is_empty() {
                        UserListView::Empty
                    } else {
                        UserListView::Users(users)
                    }
                }
                _ => UserListView::LoadError,
            },
            Err(e) => {
                warn!("Fetching users failed: {}", e);
                UserListView::ConnectionError
            }
        };

        self.with_view(|v| v.panels.users = Some(view.clone()));
        view
    }
}
