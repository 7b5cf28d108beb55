// crates/communedb-core/src/text.rs

//! Text cleanup shared by every loader: match-key folding, locale numeric
//! parsing, and repair of legacy 8-bit exports.

use std::borrow::Cow;

/// Convert a commune name into the canonical matching key.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Orléans` -> `Orleans`)
/// 2\) Uppercase
/// 3\) Drop every character outside `{A–Z, space, hyphen}`
/// 4\) Trim leading/trailing whitespace
///
/// The transliteration uses the `deunicode` crate, so multi-character
/// foldings (`œ` → `OE`) survive the filter. Applying the function to its
/// own output is a no-op, which keeps repeated normalization safe.
///
/// # Examples
///
/// ```rust
/// use communedb_core::text::normalize_key;
///
/// assert_eq!(normalize_key("Orléans"), "ORLEANS");
/// assert_eq!(normalize_key("  L'Haÿ-les-Roses "), "LHAY-LES-ROSES");
/// assert_eq!(normalize_key("ORLEANS"), "ORLEANS");
/// ```
pub fn normalize_key(s: &str) -> String {
    deunicode::deunicode(s)
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == ' ' || *c == '-')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Compares two names for equality after normalization with
/// [`normalize_key`]. Matches strings differing only in case or diacritics.
pub fn equals_key(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}

/// Parse a French-formatted numeric token (`"20 000"`, `"12,5"`, `"-3,5"`).
///
/// Space-like thousands separators (ASCII space, NBSP, narrow NBSP) are
/// stripped and the decimal comma becomes a point before parsing. Returns
/// `None` for empty or non-numeric input, so an absent measure stays
/// distinguishable from a legitimate zero.
///
/// # Examples
///
/// ```rust
/// use communedb_core::text::parse_locale_f64;
///
/// assert_eq!(parse_locale_f64("20 000"), Some(20_000.0));
/// assert_eq!(parse_locale_f64("12,5"), Some(12.5));
/// assert_eq!(parse_locale_f64("n/a"), None);
/// ```
pub fn parse_locale_f64(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Zero-pad a commune code to the fixed 5-character INSEE form.
///
/// Sources that stored the code numerically drop the leading zero of the
/// Ain–Ariège departments (`"1001"` for `"01001"`). Codes already 5 wide,
/// including the Corsican `"2A004"` form, pass through unchanged.
pub fn pad_commune_code(raw: &str) -> String {
    let code = raw.trim();
    if code.len() >= 5 {
        code.to_string()
    } else {
        format!("{code:0>5}")
    }
}

/// Title-case an uppercase INSEE short name for display.
///
/// The first letter after each non-alphabetic boundary is uppercased, the
/// rest lowered: `"SAINT-ETIENNE"` → `"Saint-Etienne"`, `"L'ABERGEMENT"` →
/// `"L'Abergement"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}

/// Repair text from exports whose CP850 bytes were decoded as
/// windows-1252 (`"Libell‚"` showing where `"Libellé"` was meant).
///
/// The table covers the accented letters that occur in the commune and
/// candidate columns of the interior-ministry extracts, in both the
/// windows-1252 and the raw-C1-control renderings of the same byte.
/// Characters that cannot be recovered (remaining C1 controls, replacement
/// characters) are dropped. Never fails.
pub fn repair_legacy(s: &str) -> Cow<'_, str> {
    if !s.chars().any(is_suspect) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\u{201a}' | '\u{0082}' => out.push('é'),
            '\u{0192}' | '\u{0083}' => out.push('â'),
            '\u{2026}' | '\u{0085}' => out.push('à'),
            '\u{2021}' | '\u{0087}' => out.push('ç'),
            '\u{02c6}' | '\u{0088}' => out.push('ê'),
            '\u{2030}' | '\u{0089}' => out.push('ë'),
            '\u{0160}' | '\u{008a}' => out.push('è'),
            '\u{2039}' | '\u{008b}' => out.push('ï'),
            '\u{0152}' | '\u{008c}' => out.push('î'),
            '\u{0090}' => out.push('É'),
            c if ('\u{0080}'..='\u{009f}').contains(&c) => {}
            '\u{fffd}' => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn is_suspect(c: char) -> bool {
    matches!(
        c,
        '\u{0080}'..='\u{009f}'
            | '\u{201a}'
            | '\u{0192}'
            | '\u{2026}'
            | '\u{2021}'
            | '\u{02c6}'
            | '\u{2030}'
            | '\u{0160}'
            | '\u{2039}'
            | '\u{0152}'
            | '\u{fffd}'
    )
}
