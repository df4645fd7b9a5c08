use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;

/// One bar as Alpaca serializes it (single-letter field names).
#[derive(Deserialize, Debug)]
pub struct AlpacaBar {
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "v")]
    pub volume: f64,
    #[serde(rename = "n")]
    pub trade_count: u64,
    #[serde(rename = "vw")]
    pub vwap: f64,
}

/// One page of the `/v2/stocks/bars` response.
///
/// `bars` maps each requested symbol to its bars; a symbol with no data in
/// the range is simply absent (or maps to an empty vector).
#[derive(Deserialize, Debug)]
pub struct AlpacaResponse {
    #[serde(default)]
    pub bars: IndexMap<String, Vec<AlpacaBar>>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_format() {
        let payload = r#"{
            "bars": {
                "AAPL": [
                    {"t": "2022-01-03T05:00:00Z", "o": 177.83, "h": 182.88,
                     "l": 177.71, "c": 182.01, "v": 104487900, "n": 773691,
                     "vw": 181.41}
                ]
            },
            "next_page_token": null
        }"#;

        let response: AlpacaResponse = serde_json::from_str(payload).unwrap();
        let bars = &response.bars["AAPL"];
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].close, 182.01);
        assert_eq!(bars[0].timestamp.date_naive().to_string(), "2022-01-03");
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn deserializes_empty_result() {
        let payload = r#"{"bars": {}, "next_page_token": null}"#;
        let response: AlpacaResponse = serde_json::from_str(payload).unwrap();
        assert!(response.bars.is_empty());
    }
}
