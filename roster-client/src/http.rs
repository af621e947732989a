//! HTTP client for network-based API calls

use reqwest::Client;
use serde::de::DeserializeOwned;

use shared::Response;
use shared::models::{Customer, Person, PersonCreate, PersonUpdate};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the Roster server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Response<T>> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Response<T>> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Response<T>> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Response<T>> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// The server serializes an envelope for every outcome, so the body is
    /// decoded regardless of status code. A body that is not an envelope is
    /// a transport-level fault.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<Response<T>> {
        let status = response.status();
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|_| {
            ClientError::InvalidResponse(format!(
                "status {}, body {:?}",
                status.as_u16(),
                text.chars().take(120).collect::<String>()
            ))
        })
    }

    // ========== People API ==========

    /// List all people
    pub async fn list_people(&self) -> Response<Vec<Person>> {
        self.get("api/people").await.unwrap_or_else(fold)
    }

    /// Get a person by id
    pub async fn get_person(&self, id: i64) -> Response<Person> {
        self.get(&format!("api/people/{}", id))
            .await
            .unwrap_or_else(fold)
    }

    /// Add a person
    pub async fn add_person(&self, full_name: Option<String>) -> Response<Person> {
        let payload = PersonCreate { full_name };
        self.post("api/people", &payload).await.unwrap_or_else(fold)
    }

    /// Update a person
    pub async fn update_person(&self, id: i64, full_name: Option<String>) -> Response<Person> {
        let payload = PersonUpdate { full_name };
        self.put(&format!("api/people/{}", id), &payload)
            .await
            .unwrap_or_else(fold)
    }

    /// Remove a person
    pub async fn remove_person(&self, id: i64) -> Response<Person> {
        self.delete(&format!("api/people/{}", id))
            .await
            .unwrap_or_else(fold)
    }

    // ========== Customer API ==========

    /// List all customers
    pub async fn list_customers(&self) -> Response<Vec<Customer>> {
        self.get("api/customers").await.unwrap_or_else(fold)
    }

    /// Get a customer by id
    pub async fn get_customer(&self, id: i64) -> Response<Customer> {
        self.get(&format!("api/customers/{}", id))
            .await
            .unwrap_or_else(fold)
    }
}

/// Fold a transport fault into an Exception envelope
///
/// The raw error text stays visible here: the client runs in the caller's
/// own process, so the HTTP-boundary leak rule does not apply.
fn fold<T>(err: ClientError) -> Response<T> {
    tracing::warn!(error = %err, "Request failed before an envelope arrived");
    Response::failure(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorKind;

    #[test]
    fn fold_produces_exception_envelope() {
        let envelope: Response<Person> =
            fold(ClientError::InvalidResponse("status 502, body \"\"".to_string()));
        assert!(!envelope.success);
        assert_eq!(envelope.kind, ErrorKind::Exception);
        assert!(envelope.messages[0].contains("502"));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:3000/"));
        assert_eq!(client.url("/api/people"), "http://localhost:3000/api/people");
        assert_eq!(client.url("api/people"), "http://localhost:3000/api/people");
    }
}
