use chrono::{DateTime, NaiveDate, Utc};

// Jakarta is a fixed UTC+7 offset; no DST to account for.
const JAKARTA_UTC_OFFSET_HOURS: i64 = 7;

/// Parse an input-field date string (YYYY-MM-DD) to UTC DateTime
pub fn parse_input_date(date_str: &str) -> anyhow::Result<DateTime<Utc>> {
    let naive_date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?;
    let datetime = naive_date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("Invalid time components"))?;
    Ok(datetime.and_utc())
}

/// Format DateTime to the input-field date format (YYYY-MM-DD)
pub fn format_input_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in Jakarta time, in the format the input fields expect.
/// Used for both ends of the range when a ticker selection arrives without
/// explicit dates.
pub fn default_analysis_date() -> String {
    let jakarta_now = Utc::now() + chrono::Duration::hours(JAKARTA_UTC_OFFSET_HOURS);
    format_input_date(jakarta_now)
}
