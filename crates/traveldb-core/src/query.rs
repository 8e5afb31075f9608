// crates/traveldb-core/src/query.rs

//! Keyword normalization.
//!
//! A raw search term is lower-cased and trimmed, then mapped through a small
//! synonym table onto one of the three recognized categories. Anything that
//! does not land on a category stays free text and is matched by substring.

use std::fmt;

/// One of the three recognized top-level groupings in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Beaches,
    Temples,
    Countries,
}

impl Category {
    /// The canonical keyword tag for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Beaches => "beaches",
            Category::Temples => "temples",
            Category::Countries => "countries",
        }
    }

    /// Capitalized label used as the results header.
    pub fn label(self) -> &'static str {
        match self {
            Category::Beaches => "Beaches",
            Category::Temples => "Temples",
            Category::Countries => "Countries",
        }
    }

    /// All categories, for hint text in the no-results view.
    pub const ALL: [Category; 3] = [Category::Beaches, Category::Temples, Category::Countries];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The result of normalizing a raw search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyword {
    /// The term mapped onto a recognized category.
    Category(Category),
    /// Unmapped free text, trimmed but otherwise as typed.
    Free(String),
}

impl Keyword {
    /// Normalize a raw keyword: trim, lower-case, and map known synonyms
    /// (`beach`→`beaches`, `temple`→`temples`, `country`→`countries`) onto
    /// their category. Everything else stays free text carrying the trimmed
    /// original, so substring matching sees what the user actually typed.
    pub fn normalize(raw: &str) -> Keyword {
        let normalized = raw.trim().to_lowercase();

        match normalized.as_str() {
            "beach" | "beaches" => Keyword::Category(Category::Beaches),
            "temple" | "temples" => Keyword::Category(Category::Temples),
            "country" | "countries" => Keyword::Category(Category::Countries),
            _ => Keyword::Free(raw.trim().to_string()),
        }
    }
}
