// Rust guideline compliant 2026-10-17

//! Directory fetching for business groups.
//!
//! A [`Directory`] returns a fresh snapshot of every known entity on each
//! call. [`HttpDirectory`] is the production implementation backed by the
//! groups endpoint of the management API.

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{BusinessGroup, Identifiable, Labelled, ResourceType};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// Query suffix requesting expanded group documents.
pub const GROUPS_PATH: &str = "/groups?documentType=true&expand=true";

/// Source of directory snapshots.
pub trait Directory {
    /// Entity type held by the directory.
    type Item: Identifiable + Labelled;

    /// Returns the resource type tag used in error messages.
    fn resource_type(&self) -> ResourceType;

    /// Fetches the full, unfiltered list of entities in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    fn fetch(&self) -> Result<Vec<Self::Item>, FetchError>;
}

/// Business group directory served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpDirectory {
    /// Creates a directory for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let url = format!("{}{}", base_url.trim_end_matches('/'), GROUPS_PATH);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        Ok(Self { client, url })
    }

    /// Creates a directory from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(&config.url, Duration::from_secs(config.timeout_secs))
    }

    /// Returns the full request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Directory for HttpDirectory {
    type Item = BusinessGroup;

    fn resource_type(&self) -> ResourceType {
        ResourceType::BusinessGroup
    }

    fn fetch(&self) -> Result<Vec<BusinessGroup>, FetchError> {
        debug!(url = %self.url, "fetching business groups");
        let transport = |source| FetchError::Transport {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(transport)?;
        let groups = decode_groups(&body)?;
        debug!(url = %self.url, count = groups.len(), "fetched business groups");
        Ok(groups)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GroupsPayload {
    List(Vec<BusinessGroup>),
    Query(QueryResult),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResult {
    #[serde(default)]
    document_links: Vec<String>,
    documents: BTreeMap<String, BusinessGroup>,
}

/// Decodes a groups response body.
///
/// Accepts a bare JSON array of `{id, label}` objects, or a document query
/// result whose `documents` map is ordered by `documentLinks`. Links without
/// a matching document are skipped. Without links, documents are returned
/// sorted by their link.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON in either shape.
pub fn decode_groups(body: &[u8]) -> Result<Vec<BusinessGroup>, serde_json::Error> {
    match serde_json::from_slice(body)? {
        GroupsPayload::List(groups) => Ok(groups),
        GroupsPayload::Query(QueryResult {
            document_links,
            mut documents,
        }) => {
            if document_links.is_empty() {
                return Ok(documents.into_values().collect());
            }
            Ok(document_links
                .iter()
                .filter_map(|link| documents.remove(link))
                .collect())
        }
    }
}
