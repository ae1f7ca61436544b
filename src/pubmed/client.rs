use crate::config::ClientConfig;
use crate::error::{FetcherError, Result};
use crate::pubmed::models::ExtractedRecord;
use crate::pubmed::parser::{MetadataDocument, parse_metadata_document};
use crate::pubmed::responses::ESearchResult;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

/// Client for the two E-utilities endpoints the fetcher needs
///
/// Requests are sent one at a time and never retried.
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_paper_fetcher::PubMedClient;
    ///
    /// let client = PubMedClient::new()?;
    /// # Ok::<(), pubmed_paper_fetcher::FetcherError>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_paper_fetcher::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@example.org");
    ///
    /// let client = PubMedClient::with_config(config)?;
    /// # Ok::<(), pubmed_paper_fetcher::FetcherError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, config))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return matching PMIDs in service order
    ///
    /// At most [`ClientConfig::search_limit`] ids are requested. The query is
    /// passed through as-is.
    ///
    /// # Errors
    ///
    /// * `FetcherError::RequestError` - If the HTTP request fails
    /// * `FetcherError::ApiError` - On a non-2xx status or an ESearch `ERROR` field
    /// * `FetcherError::JsonError` - If the body is not the expected JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_paper_fetcher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let pmids = client.search_articles("crispr therapeutics").await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_articles(&self, query: &str) -> Result<Vec<String>> {
        let url = self.esearch_url(query);

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        if let Some(error_msg) = search_result.esearchresult.error {
            return Err(FetcherError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let pmids = search_result.esearchresult.idlist;
        info!(
            results_found = pmids.len(),
            total_count = search_result.esearchresult.count.as_deref().unwrap_or("unknown"),
            "Search completed"
        );

        Ok(pmids)
    }

    /// Fetch EFetch XML for `pmids` in one request and parse it
    ///
    /// An empty slice returns an empty document without touching the network.
    ///
    /// # Errors
    ///
    /// * `FetcherError::RequestError` - If the HTTP request fails
    /// * `FetcherError::ApiError` - On a non-2xx status
    /// * `FetcherError::XmlError` - If the body is not well-formed EFetch XML
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_details<S: AsRef<str>>(&self, pmids: &[S]) -> Result<MetadataDocument> {
        if pmids.is_empty() {
            debug!("No PMIDs to fetch");
            return Ok(MetadataDocument::default());
        }

        let url = self.efetch_url(pmids);

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        let document = parse_metadata_document(&xml_text)?;
        info!(
            requested = pmids.len(),
            parsed = document.len(),
            "Fetched article records"
        );

        Ok(document)
    }

    /// Search, fetch and extract one record per returned article
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_paper_fetcher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     for record in client.search_and_extract("monoclonal antibody").await? {
    ///         println!("{}: {}", record.pubmed_id, record.company_affiliations);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn search_and_extract(&self, query: &str) -> Result<Vec<ExtractedRecord>> {
        let pmids = self.search_articles(query).await?;
        let document = self.fetch_details(pmids.as_slice()).await?;

        Ok(document.records())
    }

    fn esearch_url(&self, query: &str) -> String {
        format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmode=json&retmax={}",
            self.base_url,
            urlencoding::encode(query),
            self.config.search_limit
        )
    }

    fn efetch_url<S: AsRef<str>>(&self, pmids: &[S]) -> String {
        let id_list = pmids
            .iter()
            .map(|id| id.as_ref())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            urlencoding::encode(&id_list)
        )
    }

    /// Send a GET with the NCBI identification parameters appended
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();

        for (key, value) in self.config.build_api_params() {
            final_url.push('&');
            final_url.push_str(&key);
            final_url.push('=');
            final_url.push_str(&urlencoding::encode(&value));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(FetcherError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}
