//! Aggregation of selected notes into a combined fragrance profile.

use crate::catalog::{Catalog, ScentProfile};

/// Sum the attribute values of `notes` against `catalog`.
///
/// Pure and total: a name missing from the catalog contributes zero, and the
/// sum saturates rather than wrapping. Callers recompute after every
/// selection change instead of caching.
#[must_use]
pub fn blend(notes: &[String], catalog: &Catalog) -> ScentProfile {
    notes.iter().fold(ScentProfile::default(), |acc, name| {
        acc.saturating_add(catalog.note(name).copied().unwrap_or_default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "scent_notes": {
                    "Rose": { "fruity": 1, "sweet": 3, "citrus": 0, "woody": 0 },
                    "Cedar": { "fruity": 0, "sweet": 0, "citrus": 0, "woody": 5 }
                },
                "palettes": {}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_selection_blends_to_zero() {
        let totals = blend(&[], &catalog());
        assert!(totals.is_zero());
    }

    #[test]
    fn rose_plus_cedar_sums_per_attribute() {
        let notes = ["Rose".to_string(), "Cedar".to_string()];
        let totals = blend(&notes, &catalog());
        assert_eq!(
            totals,
            ScentProfile {
                fruity: 1,
                sweet: 3,
                citrus: 0,
                woody: 5
            }
        );
    }

    #[test]
    fn unknown_note_contributes_nothing() {
        let notes = ["Rose".to_string(), "Nutmeg".to_string()];
        let totals = blend(&notes, &catalog());
        assert_eq!(totals.fruity, 1);
        assert_eq!(totals.woody, 0);
    }

    #[test]
    fn blend_saturates_instead_of_wrapping() {
        let catalog = Catalog::from_json(
            r#"{
                "scent_notes": { "Overload": { "sweet": 4294967295 } },
                "palettes": {}
            }"#,
        )
        .unwrap();
        let notes = ["Overload".to_string()];
        let once = blend(&notes, &catalog);
        let twice = once.saturating_add(once);
        assert_eq!(twice.sweet, u32::MAX);
    }
}
