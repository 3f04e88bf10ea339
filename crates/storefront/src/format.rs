//! Currency display.

/// Formats an amount the way `fr-FR` shows euros: `1 234,50 €`.
///
/// Thousands are grouped with U+202F (narrow no-break space) and the symbol
/// is preceded by U+00A0.
pub fn format_eur(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let (units, cents) = (cents / 100, cents % 100);

    let digits = units.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202F}');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && (units > 0 || cents > 0) {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{cents:02}\u{00A0}€")
}
