use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Money as printed on the invoice: two decimals, thousands separators.
pub fn fmt_money(amount: f64) -> String {
    let rendered = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Per-row weights keep three decimals on the printed grid.
pub fn fmt_weight(weight: f64) -> String {
    format!("{:.3}", weight)
}

/// Invoice dates print as dd/mm/YYYY. Unparseable or missing dates fall
/// back to today rather than failing generation.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%d/%m/%Y").to_string();
    }
    Utc::now().format("%d/%m/%Y").to_string()
}
