//! Selectable catalogs for the agent and model dropdowns.

/// One selectable entry in a dropdown catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable identifier, persisted to localStorage.
    pub id: &'static str,
    /// Label shown on the dropdown trigger and in the menu.
    pub label: &'static str,
    /// Longer description, used as the item tooltip.
    pub description: &'static str,
}

/// Look up an entry by id.
pub fn find(entries: &'static [CatalogEntry], id: &str) -> Option<&'static CatalogEntry> {
    entries.iter().find(|entry| entry.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[CatalogEntry] = &[
        CatalogEntry {
            id: "a",
            label: "Alpha",
            description: "first",
        },
        CatalogEntry {
            id: "b",
            label: "Beta",
            description: "second",
        },
    ];

    #[test]
    fn test_find_by_id() {
        assert_eq!(find(ENTRIES, "b").map(|e| e.label), Some("Beta"));
        assert_eq!(find(ENTRIES, "missing"), None);
    }
}
