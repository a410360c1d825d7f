//! Dollar formatting for display strings

/// `$1234.50`: two decimals, no grouping. Negative amounts read `$-5.00`.
pub fn currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// `$1,234.50`: two decimals with comma thousands separators
pub fn currency_grouped(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    if !amount.is_finite() {
        return format!("${}", fixed);
    }

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("${}{}.{}", sign, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
