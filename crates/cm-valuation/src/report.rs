//! Text Reports
//!
//! Renders breakdowns and comparisons as console text with unicode bar
//! charts. Rendering never changes a computed value; printing is left to
//! the caller.

use crate::compare::Verdict;
use crate::model::{AssetClass, ComparisonReport};
use crate::valuation::{BitcoinBreakdown, ResourceBreakdown, RiskBand, SustainabilityBand};

/// Width of a full-scale bar, in characters
pub const BAR_WIDTH: usize = 30;

const RULE_WIDTH: usize = 50;

/// Unicode bar proportional to `value / max`.
///
/// Non-positive or non-finite inputs render as an empty bar; values above
/// `max` render full width.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if !value.is_finite() || !max.is_finite() || value <= 0.0 || max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max).min(1.0) * width as f64).round() as usize;
    "█".repeat(filled.max(1))
}

/// Half-circle gauge rendered flat: `[██████░░░░] 60/100`
pub fn gauge(score: f64, width: usize) -> String {
    let clamped = if score.is_finite() { score.clamp(0.0, 100.0) } else { 0.0 };
    let filled = (clamped / 100.0 * width as f64).round() as usize;
    format!(
        "[{}{}] {:.0}/100",
        "█".repeat(filled),
        "░".repeat(width - filled),
        score
    )
}

/// Share of each risk slice (depletion, inflation, centralization, stable)
/// as a percentage of the summed slice magnitudes.
///
/// Slices can be negative once risk leaves the 0-100 range, so magnitudes
/// are used to keep the shares summing to 100.
pub fn risk_shares(breakdown: &BitcoinBreakdown) -> [(&'static str, f64); 4] {
    let slices = [
        ("Depletion", breakdown.depletion_risk),
        ("Inflation", breakdown.inflation_risk),
        ("Centralization", breakdown.centralization_risk),
        ("Stable", breakdown.stable_share),
    ];
    let total: f64 = slices.iter().map(|(_, v)| v.abs()).sum();

    slices.map(|(label, v)| {
        let share = if total > 0.0 { v.abs() / total * 100.0 } else { 0.0 };
        (label, share)
    })
}

/// Single-asset report for Bitcoin
pub fn bitcoin_report(breakdown: &BitcoinBreakdown) -> String {
    let band = RiskBand::from_risk(breakdown.risk);
    let mut out = String::from("=== BITCOIN CM ANALYSIS ===\n");

    out.push_str(&format!("Stock-to-Flow Ratio: {:.2}\n", breakdown.stock_to_flow));
    out.push_str(&format!("CM Value Index: {:.2}\n", breakdown.value));
    out.push_str(&format!("Risk Score: {:.1}/100\n", breakdown.risk));
    out.push_str(&format!("Interpretation: {}\n", band.description()));

    let metrics = [
        ("S/F Ratio", breakdown.stock_to_flow),
        ("Energy Security", breakdown.energy_security),
        ("CM Value", breakdown.value),
    ];
    out.push_str("\nCM Metrics\n");
    push_bars(&mut out, &metrics, max_of(&metrics));

    out.push_str("\nRisk Breakdown\n");
    for (label, share) in risk_shares(breakdown) {
        out.push_str(&format!("  {:<16} {:>5.1}%\n", label, share));
    }

    out
}

/// Single-asset report for oil or water
pub fn resource_report(breakdown: &ResourceBreakdown) -> String {
    let band = SustainabilityBand::from_score(breakdown.sustainability);
    let title = breakdown.kind.label().to_uppercase();
    let unit = breakdown.kind.unit();
    let net_trillions = breakdown.total_net_value / 1e12;
    let mut out = format!("=== {} CM ANALYSIS ===\n", title);

    out.push_str(&format!("Total Net Value: ${:.2} trillion\n", net_trillions));
    out.push_str(&format!("Net Value per {}: ${:.4}\n", unit, breakdown.net_value_per_unit));
    out.push_str(&format!("CM Value Index: {:.2}\n", breakdown.value));
    out.push_str(&format!("Years to Depletion: {:.1}\n", breakdown.depletion_years));
    out.push_str(&format!("Sustainability: {:.0}/100\n", breakdown.sustainability));
    out.push_str(&format!("Interpretation: {}\n", band.description()));

    let metrics = [
        ("Total Net Value (T$)", net_trillions),
        ("CM Value Index", breakdown.value),
    ];
    out.push_str(&format!("\n{} CM Metrics\n", title));
    push_bars(&mut out, &metrics, max_of(&metrics));

    out.push_str(&format!("\nSustainability Index\n  {}\n", gauge(breakdown.sustainability, 20)));

    out
}

/// Three-way comparison report
pub fn comparison_report(report: &ComparisonReport) -> String {
    let mut out = String::from("=== CM SYSTEM COMPARISON ===\n");

    let values: Vec<_> = AssetClass::ALL
        .iter()
        .map(|a| (a.label(), report.values[a.index()]))
        .collect();
    let risks: Vec<_> = AssetClass::ALL
        .iter()
        .map(|a| (a.label(), report.risks[a.index()]))
        .collect();

    out.push_str("\nCM Value Comparison\n");
    push_bars(&mut out, &values, max_of(&values));
    out.push_str("\nRisk Comparison (0-100)\n");
    push_bars(&mut out, &risks, 100.0);

    out.push_str(&"═".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!("Highest CM Value: {}\n", report.best_value()));
    out.push_str(&format!("Lowest Risk: {}\n", report.lowest_risk()));
    out.push_str(&format!("CONCLUSION: {}\n", Verdict::from_report(report)));

    out.push_str("\nINVESTMENT INSIGHT:\n");
    for (i, asset) in AssetClass::ALL.iter().enumerate() {
        out.push_str(&format!("{}. {}: {}\n", i + 1, asset, insight(*asset)));
    }

    out
}

/// Fixed one-line characterization of an asset class
pub fn insight(asset: AssetClass) -> &'static str {
    match asset {
        AssetClass::Bitcoin => "Digital scarcity premium with volatility risk",
        AssetClass::Oil => "Energy wealth with geopolitical uncertainty",
        AssetClass::Water => "Essential utility with sustainability concerns",
    }
}

fn max_of(rows: &[(&str, f64)]) -> f64 {
    rows.iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max)
}

fn push_bars(out: &mut String, rows: &[(&str, f64)], max: f64) {
    for (label, value) in rows {
        out.push_str(&format!(
            "  {:<20} {:<width$} {:>12.2}\n",
            label,
            bar(*value, max, BAR_WIDTH),
            value,
            width = BAR_WIDTH
        ));
    }
}
