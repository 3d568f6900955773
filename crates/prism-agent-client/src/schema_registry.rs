//! Typed client for the credential schema registry of the Prism agent.
//!
//! Schemas describe the claims a credential type carries. Each schema is
//! addressable two ways: by registry `guid`, and by its versioned
//! `{author}/{id}` coordinates, which is also the path shape the update
//! endpoint uses (note: no `/schemas` segment on that one, matching the
//! upstream surface).
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/schema-registry/schemas` | Publish a schema |
//! | GET    | `/schema-registry/schemas/{guid}` | Fetch by GUID |
//! | GET    | `/schema-registry/schemas` | Lookup with filters (paginated) |
//! | PUT    | `/schema-registry/{author}/{id}` | Publish a new version |

use uuid::Uuid;

use crate::error::PrismAgentError;
use crate::models::{
    CredentialSchemaInput, CredentialSchemaPage, CredentialSchemaResponse, SchemaLookupQuery,
};
use crate::response;

/// Client for the credential schema registry.
#[derive(Debug, Clone)]
pub struct SchemaRegistryClient {
    http: reqwest::Client,
    base_url: url::Url,
    strict: bool,
}

impl SchemaRegistryClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, strict: bool) -> Self {
        Self {
            http,
            base_url,
            strict,
        }
    }

    /// Publish a new credential schema.
    ///
    /// Calls `POST {base_url}/schema-registry/schemas`.
    pub async fn create(
        &self,
        req: &CredentialSchemaInput,
    ) -> Result<Option<CredentialSchemaResponse>, PrismAgentError> {
        let endpoint = "POST /schema-registry/schemas";
        let url = format!("{}schema-registry/schemas", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        match resp.status().as_u16() {
            201 => response::decode(endpoint, resp).await.map(Some),
            status @ (400 | 500) => Err(response::api_error(endpoint, status, resp).await),
            status => response::unexpected(self.strict, endpoint, status, resp).await,
        }
    }

    /// Fetch a schema by its registry GUID.
    ///
    /// Calls `GET {base_url}/schema-registry/schemas/{guid}`.
    pub async fn get(
        &self,
        guid: Uuid,
    ) -> Result<Option<CredentialSchemaResponse>, PrismAgentError> {
        let endpoint = format!("GET /schema-registry/schemas/{guid}");
        let url = format!("{}schema-registry/schemas/{guid}", self.base_url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        match resp.status().as_u16() {
            200 => response::decode(&endpoint, resp).await.map(Some),
            status @ (400 | 404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }

    /// Look up schemas matching the given filters.
    ///
    /// Calls `GET {base_url}/schema-registry/schemas` with whichever of
    /// `author`, `name`, `version`, `tags`, `offset`, `limit` and `order`
    /// the query sets.
    pub async fn lookup(
        &self,
        query: &SchemaLookupQuery,
    ) -> Result<Option<CredentialSchemaPage>, PrismAgentError> {
        let endpoint = "GET /schema-registry/schemas";
        let url = format!("{}schema-registry/schemas", self.base_url);

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(author) = &query.author {
            params.push(("author", author.clone()));
        }
        if let Some(name) = &query.name {
            params.push(("name", name.clone()));
        }
        if let Some(version) = &query.version {
            params.push(("version", version.clone()));
        }
        if let Some(tags) = &query.tags {
            params.push(("tags", tags.clone()));
        }
        if let Some(offset) = query.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(order) = &query.order {
            params.push(("order", order.clone()));
        }

        let mut req = self.http.get(&url);
        if !params.is_empty() {
            req = req.query(&params);
        }

        let resp = req.send().await.map_err(|e| PrismAgentError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        match resp.status().as_u16() {
            200 => response::decode(endpoint, resp).await.map(Some),
            status @ (400 | 500) => Err(response::api_error(endpoint, status, resp).await),
            status => response::unexpected(self.strict, endpoint, status, resp).await,
        }
    }

    /// Publish a new version of an existing schema.
    ///
    /// Calls `PUT {base_url}/schema-registry/{author}/{id}` where `id` is
    /// the stable schema ID shared by all versions (not the per-version
    /// GUID). The request's `version` must be strictly greater than the
    /// latest published one.
    pub async fn update(
        &self,
        author: &str,
        id: &str,
        req: &CredentialSchemaInput,
    ) -> Result<Option<CredentialSchemaResponse>, PrismAgentError> {
        let endpoint = format!("PUT /schema-registry/{author}/{id}");
        let url = format!("{}schema-registry/{author}/{id}", self.base_url);

        let resp = self
            .http
            .put(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        match resp.status().as_u16() {
            200 => response::decode(&endpoint, resp).await.map(Some),
            status @ (400 | 404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }
}
