use serde::Serialize;

use crate::Result;

/// Query sent to the chart API for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQuery {
    pub product_id: String,
    pub date: Option<String>,
    pub date_from: String,
    pub date_to: String,
    pub order: String,
    pub order_by: String,
    pub items_per_page: u32,
    pub position: Option<u32>,
}

impl ChartQuery {
    /// Query covering the whole calendar year.
    pub fn for_year(year: i32) -> Self {
        Self {
            product_id: "2".to_string(),
            date: None,
            date_from: format!("{year}-01-01"),
            date_to: format!("{year}-12-31"),
            order: "asc".to_string(),
            order_by: "position".to_string(),
            items_per_page: 100,
            position: None,
        }
    }

    /// Full request URL with the query JSON-encoded into the `query` parameter.
    pub fn url(&self, endpoint: &str) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(format!("{endpoint}?query={}", urlencoding::encode(&json)))
    }
}
