use serde::{Deserialize, Serialize};

/// Parameters of one analysis request. Immutable once sent: the orchestrator
/// clones it into the outgoing request and never mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInput {
    pub emiten: String,
    pub from_date: String, // Format: YYYY-MM-DD
    pub to_date: String,   // Format: YYYY-MM-DD
}

impl StockInput {
    pub fn new(emiten: &str, from_date: &str, to_date: &str) -> Self {
        Self {
            emiten: emiten.to_string(),
            from_date: from_date.to_string(),
            to_date: to_date.to_string(),
        }
    }

    /// Input covering a single trading day, used by the external-selection
    /// path where only a ticker is known.
    pub fn for_date(emiten: &str, date: &str) -> Self {
        Self::new(emiten, date, date)
    }
}

/// Broker accumulation figures as reported by the data provider.
///
/// Every numeric field is optional: the provider omits fields it could not
/// derive, and the report renders those as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerAccumulation {
    /// Broker code of the dominant accumulator.
    pub bandar: Option<String>,
    /// Accumulated quantity held by that broker, in lots.
    pub barang_bandar: Option<f64>,
    /// Average accumulation price of that broker.
    pub rata_rata_bandar: Option<f64>,
}

/// Current order-book snapshot for the instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Last traded price.
    pub harga: Option<f64>,
    /// Best (lowest) offer price.
    pub offer_teratas: Option<f64>,
    /// Best (highest) bid price.
    pub bid_terbawah: Option<f64>,
    /// Minimum price increment for the instrument.
    pub fraksi: Option<f64>,
    /// Total bid volume, in shares.
    pub total_bid: Option<f64>,
    /// Total offer volume, in shares.
    pub total_offer: Option<f64>,
}

/// Values derived server-side from the broker and market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub total_papan: Option<f64>,
    pub rata_rata_bid_ofer: Option<f64>,
    pub a: Option<f64>,
    pub p: Option<f64>,
    pub target_realistis1: Option<f64>,
    pub target_max: Option<f64>,
}

/// Complete analysis payload for one request. Treated as an opaque value:
/// replaced wholesale on each new request, never field-mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAnalysisResult {
    pub input: StockInput,
    pub stockbit_data: BrokerAccumulation,
    pub market_data: MarketSnapshot,
    pub calculated: DerivedMetrics,
}

/// Response envelope of the analysis endpoint.
///
/// `success` is optional so that a malformed or absent flag maps to the
/// failure path instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub success: Option<bool>,
    pub data: Option<StockAnalysisResult>,
    pub error: Option<String>,
}
