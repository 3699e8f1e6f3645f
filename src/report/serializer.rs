use crate::models::StockAnalysisResult;
use crate::report::format::{format_gain, format_opt, MISSING_PLACEHOLDER};

// IDX convention: one lot is 100 shares. Bid/offer totals arrive in shares
// and are displayed in lots.
const SHARES_PER_LOT: f64 = 100.0;

/// Serialize an analysis result into the clipboard report.
///
/// Pure and deterministic: the same result always yields the same text, and
/// missing fields degrade to placeholders instead of failing.
pub fn serialize(result: &StockAnalysisResult) -> String {
    let input = &result.input;
    let broker = &result.stockbit_data;
    let market = &result.market_data;
    let calculated = &result.calculated;

    let mut lines = Vec::new();

    lines.push(format!("Analisis Saham {}", input.emiten.to_uppercase()));
    lines.push(format!("Periode: {} s/d {}", input.from_date, input.to_date));

    lines.push(String::new());
    lines.push("== Data Bandar ==".to_string());
    lines.push(format!(
        "Bandar: {}",
        broker.bandar.as_deref().unwrap_or(MISSING_PLACEHOLDER)
    ));
    lines.push(format!(
        "Barang Bandar: {} lot",
        format_opt(broker.barang_bandar)
    ));
    lines.push(format!(
        "Rata-rata Bandar: {}",
        format_opt(broker.rata_rata_bandar)
    ));

    lines.push(String::new());
    lines.push("== Data Pasar ==".to_string());
    lines.push(format!("Harga: {}", format_opt(market.harga)));
    lines.push(format!("Offer Teratas: {}", format_opt(market.offer_teratas)));
    lines.push(format!("Bid Terbawah: {}", format_opt(market.bid_terbawah)));
    lines.push(format!("Fraksi: {}", format_opt(market.fraksi)));
    lines.push(format!(
        "Total Bid: {} lot",
        format_opt(market.total_bid.map(|v| v / SHARES_PER_LOT))
    ));
    lines.push(format!(
        "Total Offer: {} lot",
        format_opt(market.total_offer.map(|v| v / SHARES_PER_LOT))
    ));

    lines.push(String::new());
    lines.push("== Perhitungan ==".to_string());
    lines.push(format!("Total Papan: {}", format_opt(calculated.total_papan)));
    lines.push(format!(
        "Rata-rata Bid/Offer: {}",
        format_opt(calculated.rata_rata_bid_ofer)
    ));
    lines.push(format!("A: {}", format_opt(calculated.a)));
    lines.push(format!("P: {}", format_opt(calculated.p)));

    lines.push(String::new());
    lines.push("== Target ==".to_string());
    lines.push(format!(
        "Target Realistis: {} ({})",
        format_opt(calculated.target_realistis1),
        format_gain(calculated.target_realistis1, market.harga)
    ));
    lines.push(format!(
        "Target Max: {} ({})",
        format_opt(calculated.target_max),
        format_gain(calculated.target_max, market.harga)
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BrokerAccumulation, DerivedMetrics, MarketSnapshot, StockInput};

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
    fn report_has_fixed_structure() {
        let report = serialize(&sample_result());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Analisis Saham BBCA");
        assert_eq!(lines[1], "Periode: 2024-01-01 s/d 2024-01-31");
        assert!(lines.contains(&"== Data Bandar =="));
        assert!(lines.contains(&"== Data Pasar =="));
        assert!(lines.contains(&"== Perhitungan =="));
        assert!(lines.contains(&"== Target =="));
    }

    #[test]
    fn ticker_is_upper_cased_in_header() {
        let mut result = sample_result();
        result.input.emiten = "bbca".to_string();

        let report = serialize(&result);
        assert!(report.starts_with("Analisis Saham BBCA"));
    }

    #[test]
    fn broker_section_uses_grouped_digits() {
        let report = serialize(&sample_result());

        assert!(report.contains("Bandar: YP"));
        assert!(report.contains("Barang Bandar: 1.250.000 lot"));
        assert!(report.contains("Rata-rata Bandar: 8.750"));
    }

    #[test]
    fn bid_and_offer_totals_are_converted_to_lots() {
        let report = serialize(&sample_result());

        assert!(report.contains("Total Bid: 12.500 lot"));
        assert!(report.contains("Total Offer: 10.000 lot"));
    }

    #[test]
    fn target_gain_over_current_price_is_annotated() {
        let report = serialize(&sample_result());

        assert!(report.contains("Target Realistis: 9.500 (+5.56%)"));
        assert!(report.contains("Target Max: 10.000 (+11.11%)"));
    }

    #[test]
    fn target_below_current_price_keeps_plus_prefix() {
        let mut result = sample_result();
        result.calculated.target_realistis1 = Some(8_500.0);

        let report = serialize(&result);
        assert!(report.contains("Target Realistis: 8.500 (+-5.56%)"));
    }

    #[test]
    fn missing_broker_quantity_renders_placeholder() {
        let mut result = sample_result();
        result.stockbit_data.barang_bandar = None;

        let report = serialize(&result);
        assert!(report.contains("Barang Bandar: - lot"));
    }

    #[test]
    fn missing_market_data_degrades_to_placeholders() {
        let mut result = sample_result();
        result.market_data = MarketSnapshot {
            harga: None,
            offer_teratas: None,
            bid_terbawah: None,
            fraksi: None,
            total_bid: None,
            total_offer: None,
        };

        let report = serialize(&result);
        assert!(report.contains("Harga: -"));
        assert!(report.contains("Total Bid: - lot"));
        // Without a current price no gain can be computed.
        assert!(report.contains("Target Realistis: 9.500 (-)"));
    }

    #[test]
    fn serialization_is_deterministic() {
        let result = sample_result();
        assert_eq!(serialize(&result), serialize(&result));
    }
}
