//! Currency formatting, parsing and validation for estimated costs.
//!
//! Amounts are pounds sterling. Estimated costs are stored as free display
//! text, so formatting never fails: text that is neither prefixed with the
//! symbol nor numeric is returned unchanged.

/// Symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: char = '£';

/// Input accepted by [`format_currency`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for Amount<'_> {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<i32> for Amount<'_> {
    fn from(value: i32) -> Self {
        Amount::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for Amount<'a> {
    fn from(value: &'a str) -> Self {
        Amount::Text(value)
    }
}

impl<'a> From<&'a String> for Amount<'a> {
    fn from(value: &'a String) -> Self {
        Amount::Text(value)
    }
}

/// Render an amount as `£N.NN`.
///
/// Text already starting with the symbol is returned as is; numeric text is
/// reformatted to two decimal places; anything else is returned unchanged.
///
/// ```rust
/// use msk_core::format::currency::format_currency;
///
/// assert_eq!(format_currency(85.5), "£85.50");
/// assert_eq!(format_currency("£85.00"), "£85.00");
/// assert_eq!(format_currency("not-a-number"), "not-a-number");
/// ```
pub fn format_currency<'a>(value: impl Into<Amount<'a>>) -> String {
    match value.into() {
        Amount::Number(number) => format!("{CURRENCY_SYMBOL}{number:.2}"),
        Amount::Text(text) if text.starts_with(CURRENCY_SYMBOL) => text.to_string(),
        Amount::Text(text) => match parse_number_prefix(text) {
            Some(number) => format!("{CURRENCY_SYMBOL}{number:.2}"),
            None => text.to_string(),
        },
    }
}

/// Extract the numeric value of a currency string.
///
/// Returns `None` when no number can be read.
pub fn parse_currency(text: &str) -> Option<f64> {
    let cleaned = text.replace(CURRENCY_SYMBOL, "");
    parse_number_prefix(cleaned.trim())
}

/// Whether `text` has the shape `[£]digits[.dd]`.
///
/// More than two decimal places is rejected.
pub fn is_valid_currency(text: &str) -> bool {
    let amount = text.strip_prefix(CURRENCY_SYMBOL).unwrap_or(text);
    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (amount, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, |f| f.len() == 2 && all_digits(f))
}

/// Read the longest leading decimal number, ignoring leading whitespace and
/// any trailing text.
fn parse_number_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole_end = digits_from(end);
    let mut digit_count = whole_end - end;
    end = whole_end;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        let fraction_len = fraction_end - (end + 1);
        if digit_count > 0 || fraction_len > 0 {
            digit_count += fraction_len;
            end = fraction_end;
        }
    }
    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    s[..end].parse().ok()
}
