use anyhow::Result;
use chrono::NaiveDate;

/// Parse a calendar date argument like '2025-10-30'.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    let formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for format in &formats {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    Err(anyhow::anyhow!(
        "Invalid date: '{}'\n\nSupported formats:\n  • ISO: '2025-10-30'\n  • Slashed: '2025/10/30'",
        input
    ))
}
