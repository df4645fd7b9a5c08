use serde::{Deserialize, Serialize};

use crate::models::request::{BarsRequest, ProviderParams};

/// Specifies the corporate action adjustment for stock data.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    #[default]
    Raw,
    Split,
    Dividend,
    All,
}

impl Adjustment {
    fn as_str(&self) -> &'static str {
        match self {
            Adjustment::Raw => "raw",
            Adjustment::Split => "split",
            Adjustment::Dividend => "dividend",
            Adjustment::All => "all",
        }
    }
}

/// Specifies the source feed for stock data.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Feed {
    #[default]
    Sip,
    Iex,
    Otc,
}

impl Feed {
    fn as_str(&self) -> &'static str {
        match self {
            Feed::Sip => "sip",
            Feed::Iex => "iex",
            Feed::Otc => "otc",
        }
    }
}

/// Specifies the sort order for the bars.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
    #[default]
    Asc,
    Desc,
}

impl Sort {
    fn as_str(&self) -> &'static str {
        match self {
            Sort::Asc => "asc",
            Sort::Desc => "desc",
        }
    }
}

/// Alpaca-specific parameters for a bars request.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct AlpacaBarsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<Adjustment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<Feed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
}

/// Builds the query string for the Alpaca `/v2/stocks/bars` endpoint.
///
/// The timeframe is pinned to `1Day`: this adapter serves the daily
/// analysis pipeline and nothing else. Dates are sent as calendar days;
/// Alpaca treats `end` as inclusive when given in this form.
pub fn construct_query(req: &BarsRequest) -> Vec<(String, String)> {
    let mut query = vec![
        ("symbols".to_string(), req.symbol.clone()),
        ("timeframe".to_string(), "1Day".to_string()),
        ("start".to_string(), req.start.format("%Y-%m-%d").to_string()),
        ("end".to_string(), req.end.format("%Y-%m-%d").to_string()),
    ];

    if let ProviderParams::Alpaca(alpaca) = &req.provider_specific {
        if let Some(adjustment) = &alpaca.adjustment {
            query.push(("adjustment".to_string(), adjustment.as_str().to_string()));
        }
        if let Some(feed) = &alpaca.feed {
            query.push(("feed".to_string(), feed.as_str().to_string()));
        }
        if let Some(currency) = &alpaca.currency {
            query.push(("currency".to_string(), currency.clone()));
        }
        if let Some(limit) = alpaca.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(sort) = &alpaca.sort {
            query.push(("sort".to_string(), sort.as_str().to_string()));
        }
    }

    query
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn req() -> BarsRequest {
        BarsRequest::new(
            "AAPL",
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2022, 12, 31).unwrap(),
        )
    }

    #[test]
    fn query_has_daily_timeframe_and_range() {
        let query = construct_query(&req());
        assert!(query.contains(&("symbols".to_string(), "AAPL".to_string())));
        assert!(query.contains(&("timeframe".to_string(), "1Day".to_string())));
        assert!(query.contains(&("start".to_string(), "2022-01-01".to_string())));
        assert!(query.contains(&("end".to_string(), "2022-12-31".to_string())));
    }

    #[test]
    fn query_includes_alpaca_overrides() {
        let mut request = req();
        request.provider_specific = ProviderParams::Alpaca(AlpacaBarsParams {
            adjustment: Some(Adjustment::Split),
            limit: Some(500),
            sort: Some(Sort::Desc),
            ..Default::default()
        });

        let query = construct_query(&request);
        assert!(query.contains(&("adjustment".to_string(), "split".to_string())));
        assert!(query.contains(&("limit".to_string(), "500".to_string())));
        assert!(query.contains(&("sort".to_string(), "desc".to_string())));
    }

    #[test]
    fn query_omits_unset_overrides() {
        let query = construct_query(&req());
        assert!(!query.iter().any(|(k, _)| k == "adjustment" || k == "feed"));
    }
}
