use crate::domain::models::{JobListing, Page, PositionFunction};
use crate::http::Transport;
use crate::pagination::{POSITION_FUNCTIONS_PAGE_SIZE, PageSize, build_query_url};
use anyhow::Result;
use log::{debug, info};

const POSITION_FUNCTIONS_PATH: &str = "job/position-functions/";
const JOB_LISTINGS_PATH: &str = "job/listings/";

/// Client for the job feed endpoints.
///
/// Every fetch builds a URL from the base URL and hands it to the transport;
/// transport errors are returned to the caller exactly as produced.
pub struct ListingsClient<T> {
    base_url: String,
    transport: T,
    page_size: PageSize,
}

impl<T: Transport> ListingsClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            page_size: PageSize::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.value()
    }

    /// Accepts "all", "25" or "5". Any other input leaves the setting as is.
    pub fn set_page_size(&mut self, value: &str) {
        match PageSize::parse(value) {
            Some(page_size) => {
                debug!("Page size set to {}", page_size.value());
                self.page_size = page_size;
            }
            None => debug!("Ignoring unrecognized page size {:?}", value),
        }
    }

    /// Fetch the first 100 position functions
    pub async fn fetch_position_functions(&self) -> Result<Page<PositionFunction>> {
        info!("Fetching position functions");
        let url = self.position_functions_url();
        self.transport.get(&url).await
    }

    /// Fetch the first page of job listings using the stored page size
    pub async fn fetch_job_listings(&self) -> Result<Page<JobListing>> {
        self.fetch_job_listings_with(self.page_size).await
    }

    /// Fetch the first page of job listings with an explicit page size
    pub async fn fetch_job_listings_with(&self, page_size: PageSize) -> Result<Page<JobListing>> {
        info!("Fetching job listings (page size {})", page_size.value());
        let url = self.job_listings_url(page_size);
        self.transport.get(&url).await
    }

    /// Search position functions. The query goes into the URL unescaped.
    pub async fn fetch_filtered_position_functions(&self, query: &str) -> Result<Page<JobListing>> {
        info!("Searching position functions for {:?}", query);
        let url = self.filtered_position_functions_url(query);
        self.transport.get(&url).await
    }

    // --- URL builders ---

    fn position_functions_url(&self) -> String {
        build_query_url(
            &self.base_url,
            POSITION_FUNCTIONS_PATH,
            &[("page_size", POSITION_FUNCTIONS_PAGE_SIZE.to_string())],
        )
    }

    fn job_listings_url(&self, page_size: PageSize) -> String {
        build_query_url(
            &self.base_url,
            JOB_LISTINGS_PATH,
            &[
                ("include_open", "False".to_string()),
                ("page", "1".to_string()),
                ("page_size", page_size.value().to_string()),
                ("use_mojob_feed_filter", "True".to_string()),
                ("use_pagination", "True".to_string()),
            ],
        )
    }

    fn filtered_position_functions_url(&self, query: &str) -> String {
        build_query_url(
            &self.base_url,
            POSITION_FUNCTIONS_PATH,
            &[("search", query.to_string())],
        )
    }
}
