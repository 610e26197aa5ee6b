/// Shown instead of an amount when the price is NaN or infinite.
pub const UNKNOWN_PRICE: &str = "-,-- €";

/// 以 es-ES 格式顯示歐元金額，例如 `1.299,00 €`
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return UNKNOWN_PRICE.to_string();
    }

    let fixed = format!("{:.2}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let rounds_to_zero = whole.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
    let sign = if price < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!("{}{},{} €", sign, grouped, fraction)
}

/// Amount saved against the original price, only when it is actually higher.
pub fn savings(price: f64, original_price: Option<f64>) -> Option<f64> {
    original_price
        .filter(|original| *original > price)
        .map(|original| original - price)
}

pub fn discount_percent(price: f64, original_price: Option<f64>) -> Option<u32> {
    let original = original_price.filter(|original| *original > 0.0)?;
    let saved = savings(price, Some(original))?;
    Some((saved / original * 100.0).round() as u32)
}
