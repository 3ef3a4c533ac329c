/// Formats a whole number with dot thousands separators (pt-BR)
///
/// # Examples
/// ```
/// use contracts::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Formats a value as Brazilian reais: `R$ 1.234,56`
///
/// # Examples
/// ```
/// use contracts::shared::format::format_currency;
/// assert_eq!(format_currency(1234.5), "R$ 1.234,50");
/// assert_eq!(format_currency(-3.0), "-R$ 3,00");
/// ```
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R$ {},{:02}",
        sign,
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

/// Truncates a display name to `max` characters, appending "..." when cut
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() > max {
        let cut: String = label.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        label.to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
