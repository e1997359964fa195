//! Authentication state and the session oracle that produces it
//!
//! The oracle is asked once per app load. Its answer is frozen into an
//! [`AuthState`] that gates the route tree until the next load; logging in or
//! out changes the stored token and re-asks, it never mutates a live state.

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SessionError;
use crate::routes::{select_routes, Page, RouteTable};

/// Query answered by the session oracle
pub const IS_LOGGED_IN: &str = r#"
  query IsLoggedIn {
    auth {
      isLoggedIn
    }
  }
"#;

/// Response shape of [`IS_LOGGED_IN`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsLoggedInResponse {
    pub auth: AuthFlags,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthFlags {
    pub is_logged_in: bool,
}

/// Whether the current session is authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthState {
    is_logged_in: bool,
}

impl AuthState {
    pub fn new(is_logged_in: bool) -> Self {
        Self { is_logged_in }
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// The single route table this state activates
    pub fn routes(&self) -> &'static RouteTable<Page> {
        select_routes(self.is_logged_in)
    }
}

impl From<IsLoggedInResponse> for AuthState {
    fn from(response: IsLoggedInResponse) -> Self {
        Self::new(response.auth.is_logged_in)
    }
}

/// Authority answering "is the current user authenticated?"
#[async_trait(?Send)]
pub trait SessionOracle {
    async fn is_logged_in(&self) -> Result<bool, SessionError>;
}

/// Ask the oracle once and freeze the answer.
///
/// A failed query gates the app as anonymous.
pub async fn load_auth_state<O>(oracle: &O) -> AuthState
where
    O: SessionOracle + ?Sized,
{
    match oracle.is_logged_in().await {
        Ok(is_logged_in) => {
            info!(is_logged_in, "session resolved");
            AuthState::new(is_logged_in)
        }
        Err(e) => {
            warn!(error = %e, "session query failed, continuing as anonymous");
            AuthState::default()
        }
    }
}

// =============================================================================
// Token storage
// =============================================================================

/// Where the session token lives between loads
pub trait TokenStore {
    fn token(&self) -> Result<Option<String>, SessionError>;
    fn store_token(&self, token: &str) -> Result<(), SessionError>;
    fn clear_token(&self) -> Result<(), SessionError>;
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn token(&self) -> Result<Option<String>, SessionError> {
        (**self).token()
    }

    fn store_token(&self, token: &str) -> Result<(), SessionError> {
        (**self).store_token(token)
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        (**self).clear_token()
    }
}

/// In-process token store
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, SessionError> {
        self.token
            .lock()
            .map_err(|e| SessionError::Store(e.to_string()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.slot()?.clone())
    }

    fn store_token(&self, token: &str) -> Result<(), SessionError> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        *self.slot()? = None;
        Ok(())
    }
}

/// Oracle answering from the presence of a stored token
pub struct TokenSessionOracle<S> {
    store: S,
}

impl<S: TokenStore> TokenSessionOracle<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait(?Send)]
impl<S: TokenStore> SessionOracle for TokenSessionOracle<S> {
    async fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self
            .store
            .token()?
            .map(|token| !token.trim().is_empty())
            .unwrap_or(false))
    }
}

/// Persist `token`; the next oracle query reports a logged-in session.
///
/// This is where the phone verification step stores the token the API issues
/// for a confirmed code. No screen issues tokens yet, so headless sessions and
/// tests are the only callers.
pub fn log_user_in<S: TokenStore + ?Sized>(store: &S, token: &str) -> Result<(), SessionError> {
    store.store_token(token)?;
    info!("user logged in");
    Ok(())
}

/// Drop the stored token; the next oracle query reports an anonymous session
pub fn log_user_out<S: TokenStore + ?Sized>(store: &S) -> Result<(), SessionError> {
    store.clear_token()?;
    info!("user logged out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteTableKind;

    struct FailingOracle;

    #[async_trait(?Send)]
    impl SessionOracle for FailingOracle {
        async fn is_logged_in(&self) -> Result<bool, SessionError> {
            Err(SessionError::Query("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_empty_store_is_anonymous() {
        let oracle = TokenSessionOracle::new(MemoryTokenStore::new());
        let state = load_auth_state(&oracle).await;

        assert!(!state.is_logged_in());
        assert_eq!(state.routes().kind(), RouteTableKind::Anonymous);
    }

    #[tokio::test]
    async fn test_stored_token_is_logged_in() {
        let oracle = TokenSessionOracle::new(MemoryTokenStore::with_token("eyJhbGciOi"));
        let state = load_auth_state(&oracle).await;

        assert!(state.is_logged_in());
        assert_eq!(state.routes().kind(), RouteTableKind::Authenticated);
    }

    #[tokio::test]
    async fn test_blank_token_is_anonymous() {
        let oracle = TokenSessionOracle::new(MemoryTokenStore::with_token("   "));
        assert!(!oracle.is_logged_in().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_and_logout_take_effect_on_next_query() {
        let store = MemoryTokenStore::new();
        let oracle = TokenSessionOracle::new(store.clone());

        let before = load_auth_state(&oracle).await;
        log_user_in(&store, "token").unwrap();
        assert!(!before.is_logged_in(), "frozen state must not change");
        assert!(load_auth_state(&oracle).await.is_logged_in());

        log_user_out(&store).unwrap();
        assert!(!load_auth_state(&oracle).await.is_logged_in());
    }

    #[tokio::test]
    async fn test_oracle_failure_falls_back_to_anonymous() {
        let state = load_auth_state(&FailingOracle).await;
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn test_response_deserializes() {
        let response: IsLoggedInResponse =
            serde_json::from_str(r#"{"auth":{"isLoggedIn":true}}"#).unwrap();
        assert!(AuthState::from(response).is_logged_in());
    }
}
