use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use shared_utils::env::get_env_var;
use snafu::ResultExt;
use tracing::{debug, info};

use crate::{
    models::{bar::PriceBar, request::BarsRequest, series::PriceSeries},
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, InvalidApiKeySnafu, MissingEnvVarSnafu,
        ProviderError, ProviderInitError, ReqwestSnafu,
        alpaca_rest::{
            params::construct_query,
            response::{AlpacaBar, AlpacaResponse},
        },
    },
};

const BASE_URL: &str = "https://data.alpaca.markets/v2/stocks/bars";

pub struct AlpacaProvider {
    client: Client,
    limiter: DefaultDirectRateLimiter,
    _api_key: SecretString,
    _secret_key: SecretString,
}

impl AlpacaProvider {
    /// Creates a new Alpaca provider.
    ///
    /// Reads API keys from the `APCA_API_KEY_ID` and `APCA_API_SECRET_KEY`
    /// environment variables.
    pub fn new() -> Result<Self, ProviderInitError> {
        let api_key = SecretString::new(get_env_var("APCA_API_KEY_ID").context(MissingEnvVarSnafu)?.into());
        let secret_key =
            SecretString::new(get_env_var("APCA_API_SECRET_KEY").context(MissingEnvVarSnafu)?.into());

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "APCA-API-KEY-ID",
            header::HeaderValue::from_str(api_key.expose_secret()).context(InvalidApiKeySnafu)?,
        );
        headers.insert(
            "APCA-API-SECRET-KEY",
            header::HeaderValue::from_str(secret_key.expose_secret())
                .context(InvalidApiKeySnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        // Alpaca's free data tier allows 200 requests per minute.
        let limiter = RateLimiter::direct(Quota::per_minute(nonzero!(200u32)));

        Ok(Self {
            client,
            limiter,
            _api_key: api_key,
            _secret_key: secret_key,
        })
    }

    /// Fetches one page of bars, honoring the request rate limit.
    async fn fetch_page(
        &self,
        req: &BarsRequest,
        page_token: Option<&str>,
    ) -> Result<AlpacaResponse, ProviderError> {
        let mut query = construct_query(req);
        if let Some(token) = page_token {
            query.push(("page_token".to_string(), token.to_string()));
        }

        self.limiter.until_ready().await;

        let response = self
            .client
            .get(BASE_URL)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu { message }.fail();
        }

        response.json::<AlpacaResponse>().await.context(ReqwestSnafu)
    }
}

#[async_trait::async_trait]
impl DataProvider for AlpacaProvider {
    async fn fetch_daily_bars(&self, req: &BarsRequest) -> Result<PriceSeries, ProviderError> {
        debug!(symbol = %req.symbol, start = %req.start, end = %req.end, "requesting daily bars");

        let mut alpaca_bars: Vec<AlpacaBar> = Vec::new();
        let mut next_page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(req, next_page_token.as_deref()).await?;
            pages += 1;

            // Only the requested symbol is of interest; Alpaca omits the key
            // entirely when the range holds no data.
            if let Some(bars) = page.bars.into_iter().find_map(|(symbol, bars)| {
                (symbol == req.symbol).then_some(bars)
            }) {
                alpaca_bars.extend(bars);
            }

            match page.next_page_token {
                Some(token) => next_page_token = Some(token),
                None => break,
            }
        }

        let bars: Vec<PriceBar> = alpaca_bars
            .into_iter()
            .map(|ab| PriceBar {
                date: ab.timestamp.date_naive(),
                open: ab.open,
                high: ab.high,
                low: ab.low,
                close: ab.close,
                volume: ab.volume,
            })
            .collect();

        info!(
            symbol = %req.symbol,
            bars = bars.len(),
            pages,
            "fetched daily bars"
        );

        Ok(PriceSeries::from_bars(req.symbol.clone(), bars))
    }
}
