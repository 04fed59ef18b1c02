/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::YadleError;
use crate::v2::{ApiClient, Bearer};
use std::sync::Arc;

/// Handle used to make the resource calls.
///
/// Cloning is cheap; all clones share the same bearer and connection.
///
/// ```no_run
/// # async fn demo() -> Result<(), yadle::v2::YadleError> {
/// use yadle::v2::Client;
/// let client = Client::login("https://example1.yadle.com", "your_username", "your_password", "your_app_id").await?;
/// let collections = client.collections().await?;
/// println!("{}", collections);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    /// Logs in and returns a client authenticated with the resulting bearer
    pub async fn login(
        server: &str,
        username: &str,
        password: &str,
        app_id: &str,
    ) -> Result<Self, YadleError> {
        let api_client = ApiClient::login(server, username, password, app_id).await?;
        Ok(Self::from_api_client(api_client))
    }

    /// Creates a client from a bearer obtained by an earlier login
    pub fn with_bearer(server: &str, app_id: &str, bearer: Bearer) -> Self {
        Self::from_api_client(ApiClient::with_bearer(server, app_id, bearer))
    }

    pub fn from_api_client(api_client: ApiClient) -> Self {
        Self {
            api_client: Arc::new(api_client),
        }
    }

    /// Lower level client for calls not covered here
    pub fn api(&self) -> &ApiClient {
        &self.api_client
    }

    pub fn bearer(&self) -> &Bearer {
        self.api_client.bearer()
    }
}
