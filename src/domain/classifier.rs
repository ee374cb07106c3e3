//! Symbol Classifier: analyzability and stable node identity.

use crate::domain::symbol::Symbol;

pub use crate::domain::symbol::is_analyzable;

/// Node Id = `symbol.fullyQualifiedDisplayString() + "@" + locationString(primaryLocation)`.
///
/// Disambiguates overloads, same-named overrides in different types, and
/// same-named parameters on different methods — the location suffix carries
/// the weight the display string alone cannot.
pub fn node_id(symbol: &Symbol) -> String {
    let location = symbol
        .primary_location()
        .map(|l| l.location_string())
        .unwrap_or_default();
    format!("{}@{}", symbol.display_string(), location)
}
