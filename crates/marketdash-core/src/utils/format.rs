use std::fmt::Display;

/// Currency prefix for amounts (Bangladeshi taka)
pub const CURRENCY: &str = "৳";

/// Placeholder for unknown values
pub const DASH: &str = "—";

/// Escape text for interpolation into HTML content or attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `৳<amount>`, or `৳—` when there is no amount
pub fn money<T: Display>(amount: Option<T>) -> String {
    match amount {
        Some(a) => format!("{}{}", CURRENCY, a),
        None => format!("{}{}", CURRENCY, DASH),
    }
}

/// The value as text, or `—`
pub fn or_dash<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| DASH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_money() {
        assert_eq!(money(Some(500)), "৳500");
        assert_eq!(money(None::<i32>), "৳—");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some(3)), "3");
        assert_eq!(or_dash(None::<&str>), "—");
    }
}
