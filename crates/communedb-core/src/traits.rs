// crates/communedb-core/src/traits.rs

use crate::text::normalize_key;

/// Name-based matching helpers for types that expose a canonical display
/// name.
///
/// Centralizes accent-insensitive and case-insensitive comparisons based
/// on [`normalize_key`]. Implementors provide a `&str` view of their
/// canonical name via [`NameMatch::name_str`] and get:
/// - [`NameMatch::is_named`] — equality on the normalized key
/// - [`NameMatch::name_contains`] — substring match on the normalized key
///
/// # Examples
/// ```rust
/// use communedb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Orléans").is_named("ORLEANS"));
/// assert!(Place("Saint-Étienne").name_contains("etienne"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        normalize_key(self.name_str()) == normalize_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        normalize_key(self.name_str()).contains(&normalize_key(q))
    }
}
