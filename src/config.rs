//! Client configuration for NCBI E-utilities requests

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const DEFAULT_TOOL: &str = "pubmed-paper-fetcher";

/// Number of PMIDs requested from ESearch per run
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// Every field is optional. Unset values fall back to the public NCBI endpoint,
/// a crate-versioned user agent and transport-level timeouts.
///
/// # Example
///
/// ```
/// use pubmed_paper_fetcher::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key_here")
///     .with_email("researcher@example.org")
///     .with_tool("MyTool");
///
/// assert_eq!(config.build_api_params().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// NCBI API key, sent as `api_key`
    pub api_key: Option<String>,
    /// Contact email, sent as `email`
    pub email: Option<String>,
    /// Tool name, sent as `tool`
    pub tool: Option<String>,
    /// Override for the E-utilities base URL
    pub base_url: Option<String>,
    /// Override for the HTTP user agent
    pub user_agent: Option<String>,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// `retmax` sent to ESearch
    pub search_limit: usize,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            api_key: None,
            email: None,
            tool: None,
            base_url: None,
            user_agent: None,
            timeout: None,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Point the client at another E-utilities host (mock servers, mirrors)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("{}/{}", DEFAULT_TOOL, env!("CARGO_PKG_VERSION")))
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Identification parameters NCBI asks every E-utilities caller to send
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref api_key) = self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }

        if let Some(ref email) = self.email {
            params.push(("email".to_string(), email.clone()));
        }

        // Tool is only sent alongside another identifier
        if !params.is_empty() || self.tool.is_some() {
            params.push(("tool".to_string(), self.effective_tool().to_string()));
        }

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
