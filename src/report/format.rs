/// Placeholder rendered for absent or non-finite numeric values.
pub const MISSING_PLACEHOLDER: &str = "-";

/// Format a number with Indonesian digit grouping: `.` as thousands
/// separator, `,` as decimal comma, two fractional digits when the value is
/// not integral.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return MISSING_PLACEHOLDER.to_string();
    }

    let rounded = (value.abs() * 100.0).round() / 100.0;
    let int_part = rounded.trunc() as u64;
    let frac_part = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let mut out = String::new();
    if value < 0.0 && (int_part > 0 || frac_part > 0) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if frac_part > 0 {
        out.push_str(&format!(",{:02}", frac_part));
    }
    out
}

/// Render an optional numeric field, placeholder when absent.
pub fn format_opt(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_grouped(v),
        _ => MISSING_PLACEHOLDER.to_string(),
    }
}

/// Gain of a target over the current price, two decimals, always prefixed
/// with `+`. The prefix is unconditional: a target below the current price
/// renders as `+-5.56%`.
pub fn format_gain(target: Option<f64>, current_price: Option<f64>) -> String {
    match (target, current_price) {
        (Some(target), Some(price)) => {
            let gain = ((target - price) / price) * 100.0;
            if gain.is_finite() {
                format!("+{:.2}%", gain)
            } else {
                MISSING_PLACEHOLDER.to_string()
            }
        }
        _ => MISSING_PLACEHOLDER.to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
