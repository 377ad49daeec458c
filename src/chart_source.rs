use futures::future::BoxFuture;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

use crate::chart_query::ChartQuery;
use crate::config::HarvestConfig;
use crate::{Error, Result};

/// One chart entry exactly as the API returned it.
pub type SongRecord = Map<String, Value>;

/// Something that can answer a [`ChartQuery`] with chart entries.
pub trait ChartSource {
    fn fetch<'a>(&'a self, query: &'a ChartQuery) -> BoxFuture<'a, Result<Vec<SongRecord>>>;
}

/// The chart API over HTTP.
pub struct HttpChartSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChartSource {
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(header_map(&config.headers)?)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    async fn get_records(&self, query: &ChartQuery) -> Result<Vec<SongRecord>> {
        let url = query.url(&self.endpoint)?;
        debug!("GET {url}");

        let records = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(records)
    }
}

impl ChartSource for HttpChartSource {
    fn fetch<'a>(&'a self, query: &'a ChartQuery) -> BoxFuture<'a, Result<Vec<SongRecord>>> {
        Box::pin(self.get_records(query))
    }
}

fn header_map(headers: &[(&str, &str)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for &(name, value) in headers {
        let invalid = |reason: String| Error::Header {
            name: name.to_string(),
            reason,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
