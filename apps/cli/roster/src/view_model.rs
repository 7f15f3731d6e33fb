//! Presentation state for the user list.
//!
//! Binds the three observable fields the UI renders: a loading flag, an
//! optional error message, and the fetched users. State is owned here
//! explicitly; the client holds none.

use client_core::{ApiClient, ApiClientError, UserApi};

use common::User;

use log::{error, info, warn};

/// View state for the user list screen.
pub struct UserViewModel {
    pub users: Vec<User>,
    pub is_loading: bool,
    pub error_message: Option<String>,

    service: ApiClient,
}

impl UserViewModel {
    pub fn new(service: ApiClient) -> Self {
        Self {
            users: Vec::new(),
            is_loading: false,
            error_message: None,
            service,
        }
    }

    /// Fetch the user list and publish the outcome into the bound fields.
    ///
    /// `is_loading` is raised before the request and cleared on every exit
    /// path, success or failure, so the UI can never stay stuck in a
    /// loading state. A failed fetch leaves any previously fetched users in
    /// place and sets `error_message`; a successful fetch clears it.
    pub async fn fetch_users(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        let result: Result<Vec<User>, ApiClientError> =
            self.service.execute(UserApi::GetUsers).await;

        match result {
            Ok(users) => {
                info!("Fetched {} users", users.len());
                self.users = users;
            }
            Err(fetch_error) => {
                if let ApiClientError::BadStatus { status, .. } = &fetch_error {
                    if status.is_server_error() {
                        warn!("Server-side failure: HTTP {status}");
                    } else if status.is_client_error() {
                        warn!("Request rejected: HTTP {status}");
                    }
                }
                error!("Failed to fetch users: {fetch_error}");

                // Display distinguishes the four error kinds.
                self.error_message = Some(fetch_error.to_string());
            }
        }

        self.is_loading = false;
    }
}
