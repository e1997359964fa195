//! Session oracle adapters and token storage

use std::rc::Rc;

use async_trait::async_trait;
use nuber_core::auth::{
    load_auth_state, log_user_out, IsLoggedInResponse, TokenSessionOracle, TokenStore,
    IS_LOGGED_IN,
};
use nuber_core::{AuthState, Config, SessionError, SessionOracle, SessionSource};

use crate::graphql::{ClientError, GraphQLClient};

impl From<ClientError> for SessionError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::NoData => SessionError::NoData,
            other => SessionError::Query(other.to_string()),
        }
    }
}

/// Oracle that sends `IS_LOGGED_IN` to the API, attaching the stored token
pub struct GraphQLSessionOracle<S> {
    client: GraphQLClient,
    store: S,
}

impl<S: TokenStore> GraphQLSessionOracle<S> {
    pub fn new(client: GraphQLClient, store: S) -> Self {
        Self { client, store }
    }
}

#[async_trait(?Send)]
impl<S: TokenStore> SessionOracle for GraphQLSessionOracle<S> {
    async fn is_logged_in(&self) -> Result<bool, SessionError> {
        let client = match self.store.token()? {
            Some(token) => self.client.clone().with_token(token),
            None => self.client.clone(),
        };

        let response: IsLoggedInResponse = client.query::<(), _>(IS_LOGGED_IN, None).await?;
        Ok(response.auth.is_logged_in)
    }
}

/// Token kept in the browser's local storage under a fixed key
#[cfg(feature = "web")]
pub struct LocalStorageTokenStore {
    key: String,
}

#[cfg(feature = "web")]
impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or_else(|| SessionError::Store("no window".to_string()))?
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| SessionError::Store("localStorage unavailable".to_string()))
    }
}

#[cfg(feature = "web")]
impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Result<Option<String>, SessionError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|_| SessionError::Store(format!("failed to read {}", self.key)))
    }

    fn store_token(&self, token: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(&self.key, token)
            .map_err(|_| SessionError::Store(format!("failed to write {}", self.key)))
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|_| SessionError::Store(format!("failed to remove {}", self.key)))
    }
}

#[cfg(feature = "web")]
fn token_store(config: &Config) -> Rc<dyn TokenStore> {
    Rc::new(LocalStorageTokenStore::new(config.token_storage_key.clone()))
}

#[cfg(not(feature = "web"))]
fn token_store(_config: &Config) -> Rc<dyn TokenStore> {
    Rc::new(nuber_core::auth::MemoryTokenStore::new())
}

/// The oracle and token store chosen by configuration
pub struct Session {
    oracle: Box<dyn SessionOracle>,
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn new(oracle: Box<dyn SessionOracle>, store: Rc<dyn TokenStore>) -> Self {
        Self { oracle, store }
    }

    pub fn from_config(config: &Config) -> Self {
        let store = token_store(config);
        let oracle: Box<dyn SessionOracle> = match config.session_source {
            SessionSource::Local => Box::new(TokenSessionOracle::new(store.clone())),
            SessionSource::Remote => Box::new(GraphQLSessionOracle::new(
                GraphQLClient::new(config.api_url.clone()),
                store.clone(),
            )),
        };

        Self::new(oracle, store)
    }

    pub async fn load(&self) -> AuthState {
        load_auth_state(self.oracle.as_ref()).await
    }

    pub fn log_out(&self) -> Result<(), SessionError> {
        log_user_out(&self.store)
    }
}
