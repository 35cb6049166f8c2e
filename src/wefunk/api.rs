use crate::util::http::{CLIENT, USER_AGENT};
use crate::wefunk::error::{WefunkError, WefunkResult};
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use std::time::Duration;
use tower::limit::RateLimit;
use tower::{Service, ServiceBuilder, ServiceExt};

/// Anything that can hand out the text of a page by url.
pub trait PageSource {
    async fn fetch_page(&mut self, url: &str) -> WefunkResult<String>;
}

pub struct WefunkApi {
    client: Client,
    service: RateLimit<Client>,
    headers: HeaderMap,
}

impl WefunkApi {
    pub fn new(requests_per_second: u64) -> WefunkResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, USER_AGENT.parse()?);

        let client = CLIENT.clone();

        let service = ServiceBuilder::new()
            .rate_limit(requests_per_second, Duration::from_secs(1))
            .service(client.clone());

        Ok(Self {
            client,
            service,
            headers,
        })
    }
}

impl PageSource for WefunkApi {
    async fn fetch_page(&mut self, url: &str) -> WefunkResult<String> {
        debug!("Fetching {url}");

        let req = self
            .client
            .request(Method::GET, url)
            .headers(self.headers.clone())
            .build()?;

        let res = self.service.ready().await?.call(req).await?;

        if !res.status().is_success() {
            return Err(WefunkError::NoSuccessStatusCode(
                url.to_string(),
                res.status(),
                res.text().await?,
            ));
        }

        // decodes with the charset from the content type header
        let text = res.text().await?;

        debug!("Fetched {} bytes from {url}", text.len());

        Ok(text)
    }
}
