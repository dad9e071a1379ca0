//! Canonicalization of raw field captures.
//!
//! Applied to every extracted document field, in order: strip OCR noise
//! characters, apply the field-specific canonical form, then reject values
//! of 2 characters or fewer.

use std::sync::LazyLock;

use regex::Regex;
use rx_protocol::FieldMap;

/// Characters OCR commonly emits as artifacts.
const NOISE: &[char] = &['|', '@', '#', '$', '%', '^', '&', '*'];

/// Values with this many characters or fewer (after trimming) are dropped.
const MAX_TRIVIAL_LEN: usize = 2;

/// Two-digit years below this pivot are read as 20xx, the rest as 19xx.
const YEAR_PIVOT: u32 = 50;

static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})[-/](\d{1,2})[-/](\d{2,4})").unwrap());

/// Stateless field value normalizer.
pub struct ValueNormalizer;

impl ValueNormalizer {
    /// Canonical form of `raw` for `field`, or `None` if the value is trivial.
    pub fn normalize(field: &str, raw: &str) -> Option<String> {
        let cleaned = strip_noise(raw);
        let cleaned = cleaned.trim();

        let value = match field {
            "date_of_birth" | "expiry_date" => {
                canonical_date(cleaned).unwrap_or_else(|| cleaned.to_string())
            }
            "phone" => canonical_phone(cleaned).unwrap_or_else(|| cleaned.to_string()),
            "name" => title_case(cleaned),
            _ => cleaned.to_string(),
        };

        if value.trim().chars().count() <= MAX_TRIVIAL_LEN {
            tracing::trace!(field, raw, "trivial value rejected");
            return None;
        }
        Some(value)
    }

    /// Normalize every entry of a raw field map, dropping rejected values.
    pub fn normalize_all(raw: &FieldMap) -> FieldMap {
        raw.iter()
            .filter_map(|(field, value)| {
                Self::normalize(field, value).map(|v| (field.clone(), v))
            })
            .collect()
    }
}

/// Remove every noise character.
pub fn strip_noise(value: &str) -> String {
    value.chars().filter(|c| !NOISE.contains(c)).collect()
}

/// First `M-D-Y` / `M/D/Y` triple in `value` as `MM/DD/YYYY`.
///
/// Two-digit years pivot at 50; other year widths are kept verbatim.
pub fn canonical_date(value: &str) -> Option<String> {
    let caps = RE_DATE.captures(value)?;
    let (month, day, year) = (&caps[1], &caps[2], &caps[3]);

    let year = if year.len() == 2 {
        let yy: u32 = year.parse().ok()?;
        let century = if yy < YEAR_PIVOT { 2000 } else { 1900 };
        (century + yy).to_string()
    } else {
        year.to_string()
    };

    Some(format!("{month:0>2}/{day:0>2}/{year}"))
}

/// `(XXX) XXX-XXXX` when `value` holds exactly 10 digits.
pub fn canonical_phone(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return None;
    }
    Some(format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}

/// Capitalize each whitespace-separated word, lowercasing the rest of it.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
