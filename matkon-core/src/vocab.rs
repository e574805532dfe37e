//! Fixed Hebrew vocabularies the generator is constrained to.

/// Measurement units accepted in full recipe drafts.
pub const RECIPE_UNITS: &[&str] = &[
    "ליטר", "מ\"ל", "ק\"ג", "גרם", "יחידה", "כוס", "כף", "כפית",
];

/// Measurement units accepted in ingredients-only extraction.
/// A strict subset of [`RECIPE_UNITS`]: cups are too ambiguous to extract.
pub const EXTRACTION_UNITS: &[&str] = &[
    "ליטר", "מ\"ל", "ק\"ג", "גרם", "יחידה", "כף", "כפית",
];

/// Recipe categories.
pub const CATEGORIES: &[&str] = &[
    "ארוחת בוקר",
    "ארוחת צהריים",
    "ארוחת ערב",
    "קינוח",
    "נשנוש",
    "מנת פתיחה",
    "מרק",
    "סלט",
    "פסטה",
    "בשרי",
    "דגים",
    "צמחוני",
];

/// Dietary and cuisine tags.
pub const TAGS: &[&str] = &[
    "כשר",
    "טבעוני",
    "ללא גלוטן",
    "ללא חלב",
    "דל פחממות",
    "קיטו",
    "פלאו",
    "ים-תיכוני",
    "אסיאתי",
    "מקסיקני",
    "איטלקי",
];

/// Difficulty levels.
pub const DIFFICULTIES: &[&str] = &["קל", "בינוני", "קשה"];
