//! GraphQL client for making requests to the API server

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl<T> GraphQLResponse<T> {
    /// First error wins; a response without data or errors is `NoData`
    pub fn into_result(self) -> Result<T, ClientError> {
        if let Some(errors) = self.errors {
            if let Some(first_error) = errors.into_iter().next() {
                return Err(ClientError::GraphQL(first_error.message));
            }
        }

        self.data.ok_or(ClientError::NoData)
    }
}

/// GraphQL error
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

/// Error type for GraphQL operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// GraphQL client for making requests
#[derive(Clone)]
pub struct GraphQLClient {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl GraphQLClient {
    /// Create a new GraphQL client
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            auth_token: None,
        }
    }

    /// Create a client with authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Execute a GraphQL query
    pub async fn query<V, R>(&self, query: &'static str, variables: Option<V>) -> Result<R, ClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        debug!(endpoint = %self.endpoint, "sending graphql query");

        let body = self.request(query, variables).send().await?.text().await?;
        let graphql_response: GraphQLResponse<R> = serde_json::from_str(&body)?;

        graphql_response.into_result()
    }

    fn request<V: Serialize>(&self, query: &'static str, variables: Option<V>) -> reqwest::RequestBuilder {
        let req = self
            .client
            .post(&self.endpoint)
            .json(&GraphQLRequest { query, variables });

        // The API reads the token from the X-JWT header
        match &self.auth_token {
            Some(token) => req.header("X-JWT", token),
            None => req,
        }
    }
}
