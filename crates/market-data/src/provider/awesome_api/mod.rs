//! AwesomeAPI quote provider.
//!
//! Serves the latest USD-BRL quote from the public `economia.awesomeapi.com.br`
//! service. No API key, no rate-limit headers.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use cotacao_core::quotes::{Quote, QuoteSource};
use cotacao_core::{Deadline, FetchError};

pub use models::{decode_quote, AwesomeQuote};

pub const BASE_URL: &str = "https://economia.awesomeapi.com.br";
const LATEST_QUOTE_PATH: &str = "/json/last/USD-BRL";
const PAIR_KEY: &str = "USDBRL";

/// Client for the AwesomeAPI `/json/last` endpoint.
///
/// The underlying `reqwest::Client` is built once and shared by every request
/// so connections to the provider are pooled.
pub struct AwesomeApiProvider {
    client: Client,
    base_url: String,
}

impl AwesomeApiProvider {
    /// Fails only if the HTTP client cannot be built (TLS backend setup).
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("cotacao/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, LATEST_QUOTE_PATH)
    }

    /// GETs the endpoint and reads the whole body.
    ///
    /// `timeout` mirrors the remaining request budget so reqwest gives up on
    /// its own as well; its timeouts are reported as deadline expiry.
    async fn get_body(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "HTTP error: {} from {}",
                status, url
            )));
        }

        response.text().await.map_err(map_request_error)
    }
}

fn map_request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::DeadlineExceeded
    } else {
        FetchError::Transport(format!("Request failed: {}", e))
    }
}

#[async_trait]
impl QuoteSource for AwesomeApiProvider {
    #[instrument(name = "AwesomeApiFetch", skip_all)]
    async fn fetch(&self, deadline: &Deadline) -> Result<Quote, FetchError> {
        let url = self.url();
        debug!(
            "Requesting {} quote from {} with {:?} left",
            PAIR_KEY,
            url,
            deadline.remaining()
        );

        let body = deadline
            .run(self.get_body(&url, deadline.remaining()))
            .await??;

        let quote = decode_quote(&body, PAIR_KEY)?;
        debug!(bid = %quote.bid, ask = %quote.ask, "Decoded provider quote");
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::time::Instant;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BODY: &str = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar/Real","high":"5.10","low":"5.00","varBid":"0.02","pctChange":"0.4","bid":"5.05","ask":"5.06","timestamp":"1700000000","create_date":"2023-11-14 10:00:00"}}"#;

    async fn create_mock_server(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(LATEST_QUOTE_PATH))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        mock_server
    }

    fn budget() -> Deadline {
        Deadline::after(Duration::from_millis(500))
    }

    #[tokio::test]
    async fn test_successful_quote_fetch() {
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(BODY)).await;

        let provider = AwesomeApiProvider::new(&mock_server.uri()).unwrap();
        let quote = provider.fetch(&budget()).await.unwrap();

        assert_eq!(quote.code, "USD");
        assert_eq!(quote.high.to_string(), "5.10");
        assert_eq!(quote.bid, dec!(5.05));
        assert_eq!(quote.ask, dec!(5.06));
        assert_eq!(quote.pct_change, dec!(0.4));
    }

    #[test]
    fn test_base_url_trailing_slash_is_ignored() {
        let provider = AwesomeApiProvider::new("http://localhost:9000/").unwrap();
        assert_eq!(provider.url(), "http://localhost:9000/json/last/USD-BRL");
    }

    #[test]
    fn test_new_builds_client_for_default_endpoint() {
        let provider = AwesomeApiProvider::new(BASE_URL).unwrap();
        assert_eq!(
            provider.url(),
            "https://economia.awesomeapi.com.br/json/last/USD-BRL"
        );
    }

    #[tokio::test]
    async fn test_slow_provider_reports_deadline_exceeded() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(BODY)
                .set_delay(Duration::from_secs(2)),
        )
        .await;

        let provider = AwesomeApiProvider::new(&mock_server.uri()).unwrap();
        let started = Instant::now();
        let result = provider
            .fetch(&Deadline::after(Duration::from_millis(100)))
            .await;

        assert_eq!(result.unwrap_err(), FetchError::DeadlineExceeded);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_expired_deadline_sends_no_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(0)
            .mount(&mock_server)
            .await;

        let provider = AwesomeApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.fetch(&Deadline::after(Duration::ZERO)).await;

        assert_eq!(result.unwrap_err(), FetchError::DeadlineExceeded);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        // Reserve a port, then free it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let provider = AwesomeApiProvider::new(&format!("http://127.0.0.1:{}", port)).unwrap();
        let result = provider.fetch(&budget()).await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn test_server_error_status_is_transport_failure() {
        let mock_server = create_mock_server(ResponseTemplate::new(500)).await;

        let provider = AwesomeApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.fetch(&budget()).await;

        match result {
            Err(FetchError::Transport(message)) => {
                assert!(message.starts_with("HTTP error: 500 Internal Server Error"))
            }
            other => panic!("expected transport failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_pair_key_is_decode_failure() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200).set_body_string(r#"{"status":404,"code":"CoinNotExists"}"#),
        )
        .await;

        let provider = AwesomeApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.fetch(&budget()).await;

        assert_eq!(
            result.unwrap_err(),
            FetchError::Decode("No USDBRL quote found in provider response".to_string())
        );
    }

    #[tokio::test]
    async fn test_non_numeric_bid_is_decode_failure() {
        let body = BODY.replace(r#""bid":"5.05""#, r#""bid":"five""#);
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(body)).await;

        let provider = AwesomeApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.fetch(&budget()).await;

        assert!(matches!(result, Err(FetchError::Decode(ref m)) if m.contains("'bid'")));
    }
}
