use crate::{
    models::{ApiResponse, StockAnalysisResult, StockInput},
    utils::{Logger, Timer},
};
use async_trait::async_trait;
use thiserror::Error;

/// Path of the analysis endpoint, relative to the configured base URL.
pub const ANALYSIS_PATH: &str = "/api/stock";

/// Base URL used when `BANDARMOLOGY_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Message shown when the service reports failure without an error field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Terjadi kesalahan saat menganalisis saham";

/// Failure of one analysis request.
///
/// Both kinds carry a displayable message and are surfaced identically to
/// the user; the split exists so callers and logs can tell a service-level
/// rejection from a broken call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The service responded but reported failure.
    #[error("{0}")]
    Application(String),
    /// The call itself failed: connection error or a non-JSON body.
    #[error("{0}")]
    Transport(String),
}

/// Seam over the analysis endpoint, so the orchestrator can be driven by a
/// stub in tests.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn analyze(&self, input: &StockInput) -> Result<StockAnalysisResult, AnalysisError>;
}

/// HTTP client for the analysis endpoint
pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
    logger: Logger,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        // No request timeout is configured: an unresolved call keeps the
        // orchestrator in Loading until it is superseded.
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            logger: Logger::new("ANALYSIS"),
        }
    }

    /// Build a client from `BANDARMOLOGY_API_URL` (with `.env` support),
    /// falling back to the local development URL.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("BANDARMOLOGY_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ANALYSIS_PATH)
    }
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn analyze(&self, input: &StockInput) -> Result<StockAnalysisResult, AnalysisError> {
        let timer = Timer::start("analysis request");

        self.logger.debug(&format!(
            "POST {} ({} {} to {})",
            self.endpoint(),
            input.emiten,
            input.from_date,
            input.to_date
        ));

        let response = self
            .client
            .post(self.endpoint())
            .json(input)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        // The envelope carries its own success flag, so the HTTP status is
        // not consulted: error bodies still parse into an application
        // failure, and only an unparseable body is a transport failure.
        let envelope: ApiResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        timer.log_elapsed("ANALYSIS");

        resolve_envelope(envelope)
    }
}

/// Map a response envelope to the request outcome.
fn resolve_envelope(envelope: ApiResponse) -> Result<StockAnalysisResult, AnalysisError> {
    match envelope.success {
        Some(true) => envelope
            .data
            .ok_or_else(|| AnalysisError::Application(FALLBACK_ERROR_MESSAGE.to_string())),
        _ => Err(AnalysisError::Application(
            envelope
                .error
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BrokerAccumulation, DerivedMetrics, MarketSnapshot};

    fn sample_result() -> StockAnalysisResult {
        StockAnalysisResult {
            input: StockInput::new("BBCA", "2024-01-01", "2024-01-31"),
            stockbit_data: BrokerAccumulation {
                bandar: Some("YP".to_string()),
                barang_bandar: Some(1_250_000.0),
                rata_rata_bandar: Some(8_750.0),
            },
            market_data: MarketSnapshot {
                harga: Some(9_000.0),
                offer_teratas: Some(9_050.0),
                bid_terbawah: Some(8_950.0),
                fraksi: Some(25.0),
                total_bid: Some(1_250_000.0),
                total_offer: Some(1_000_000.0),
            },
            calculated: DerivedMetrics {
                total_papan: Some(22_500.0),
                rata_rata_bid_ofer: Some(11_250.0),
                a: Some(1.25),
                p: Some(0.8),
                target_realistis1: Some(9_500.0),
                target_max: Some(10_000.0),
            },
        }
    }

    #[test]
    fn successful_envelope_yields_payload_data() {
        let envelope = ApiResponse {
            success: Some(true),
            data: Some(sample_result()),
            error: None,
        };

        assert_eq!(resolve_envelope(envelope).unwrap(), sample_result());
    }

    #[test]
    fn failed_envelope_carries_payload_error() {
        let envelope = ApiResponse {
            success: Some(false),
            data: None,
            error: Some("Emiten tidak ditemukan".to_string()),
        };

        assert_eq!(
            resolve_envelope(envelope),
            Err(AnalysisError::Application("Emiten tidak ditemukan".to_string()))
        );
    }

    #[test]
    fn missing_success_flag_falls_back_to_generic_message() {
        let envelope = ApiResponse {
            success: None,
            data: None,
            error: None,
        };

        assert_eq!(
            resolve_envelope(envelope),
            Err(AnalysisError::Application(FALLBACK_ERROR_MESSAGE.to_string()))
        );
    }

    #[test]
    fn successful_envelope_without_data_falls_back_to_generic_message() {
        let envelope = ApiResponse {
            success: Some(true),
            data: None,
            error: None,
        };

        assert_eq!(
            resolve_envelope(envelope),
            Err(AnalysisError::Application(FALLBACK_ERROR_MESSAGE.to_string()))
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let client = AnalysisClient::new("http://127.0.0.1:9");
        let input = StockInput::for_date("BBCA", "2024-01-01");

        match client.analyze(&input).await {
            Err(AnalysisError::Transport(_)) => {}
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
