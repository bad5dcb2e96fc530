//! Authenticated, paginated access to the component endpoints.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use storytypes_typegen::schema::{ComponentGroup, RawComponent};

/// Public Storyblok API root.
pub const DEFAULT_BASE_URL: &str = "https://api.storyblok.com/v1";

/// Listing endpoints page size.
const PER_PAGE: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("a Storyblok oauth token is required")]
    MissingToken,
    #[error("a Storyblok space id is required")]
    MissingSpace,
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// A connection to one Storyblok space's management endpoints.
pub struct Client {
    agent: ureq::Agent,
    token: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ComponentsEnvelope {
    #[serde(default)]
    components: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
struct GroupsEnvelope {
    #[serde(default)]
    component_groups: Vec<ComponentGroup>,
}

impl Client {
    /// Create a client. Fails fast when the token is empty so a misconfigured
    /// run never reaches the network.
    pub fn new(token: impl Into<String>) -> Result<Self, ClientError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ClientError::MissingToken);
        }
        Ok(Self {
            agent: ureq::agent(),
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root. Used by tests and self-hosted
    /// proxies.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// All component groups of a space, in API order.
    pub fn component_groups(&self, space_id: &str) -> Result<Vec<ComponentGroup>, ClientError> {
        self.fetch_all::<GroupsEnvelope, _>(space_id, "component_groups", |envelope| {
            envelope.component_groups
        })
    }

    /// All component definitions of a space, in API order. This order is
    /// surfaced verbatim in the generated declarations.
    pub fn components(&self, space_id: &str) -> Result<Vec<RawComponent>, ClientError> {
        self.fetch_all::<ComponentsEnvelope, _>(space_id, "components", |envelope| {
            envelope.components
        })
    }

    fn fetch_all<E, T>(
        &self,
        space_id: &str,
        path: &str,
        items: impl Fn(E) -> Vec<T>,
    ) -> Result<Vec<T>, ClientError>
    where
        E: DeserializeOwned,
    {
        if space_id.trim().is_empty() {
            return Err(ClientError::MissingSpace);
        }

        let url = self.endpoint(space_id, path);
        let mut all = Vec::new();

        for page in 1.. {
            let envelope: E = self.get_page(&url, page)?;
            let batch = items(envelope);
            let len = batch.len();
            all.extend(batch);
            if len < PER_PAGE {
                break;
            }
        }

        tracing::debug!(url = %url, count = all.len(), "fetched listing");
        Ok(all)
    }

    fn get_page<E: DeserializeOwned>(&self, url: &str, page: usize) -> Result<E, ClientError> {
        let response = self
            .agent
            .get(url)
            .set("Authorization", &self.token)
            .query("page", &page.to_string())
            .query("per_page", &PER_PAGE.to_string())
            .call()
            .map_err(|source| ClientError::Network {
                url: url.to_string(),
                source: Box::new(source),
            })?;

        response.into_json().map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }

    fn endpoint(&self, space_id: &str, path: &str) -> String {
        format!("{}/spaces/{}/{}", self.base_url, space_id, path)
    }
}
