//! GraphQL client for making requests to the API server

use serde::{de::DeserializeOwned, Deserialize, Serialize};

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
}

impl<T> GraphQLResponse<T> {
    /// Collapse the response into its data, surfacing the first error
    pub fn into_result(self) -> Result<T, ClientError> {
        if let Some(first_error) = self.errors.and_then(|errors| errors.into_iter().next()) {
            return Err(ClientError::GraphQL(first_error.message));
        }

        self.data.ok_or(ClientError::NoData)
    }
}

/// GraphQL client for making requests
#[derive(Clone)]
pub struct GraphQLClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQLClient {
    /// Create a new GraphQL client
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Execute a GraphQL mutation
    pub async fn mutate<V, R>(&self, mutation: &'static str, variables: Option<V>) -> Result<R, ClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let request = GraphQLRequest {
            query: mutation,
            variables,
        };

        tracing::debug!(endpoint = %self.endpoint, "Sending GraphQL request");

        let response = self.client.post(&self.endpoint).json(&request).send().await?;
        let graphql_response: GraphQLResponse<R> = response.json().await?;

        graphql_response.into_result()
    }
}

/// Create a client for server-side requests (direct to API)
#[cfg(feature = "server")]
pub fn server_client() -> GraphQLClient {
    GraphQLClient::new(crate::config::Config::from_env_or_default().api_url)
}
