//! Static word lists shared by the keyword classifier and the language detector.
//! All entries are lowercase; callers case-fold the text before matching.

/// Meat, fish and other slaughter-derived markers, in Spanish and English.
pub const NON_VEGETARIAN_TERMS: &[&str] = &[
    "carne", "pollo", "cerdo", "pescado", "mariscos", "gelatina", "cochinilla", "ternera",
    "cordero", "jamón", "anchoas", "atún", "bacalao", "meat", "chicken", "pork", "fish",
    "seafood", "gelatin", "carmine", "beef", "turkey", "lamb", "bacon", "ham", "anchovies",
    "tuna",
];

/// Dairy, egg and honey markers: animal-derived but compatible with a
/// vegetarian diet.
pub const DAIRY_EGG_HONEY_TERMS: &[&str] = &[
    "leche", "queso", "mantequilla", "huevo", "miel", "lactosa", "caseína", "suero", "nata",
    "yogur", "requesón", "milk", "cheese", "butter", "egg", "honey", "lactose", "casein", "whey",
    "cream", "yogurt",
];

/// Every marker that rules out a vegan diet.
pub fn non_vegan_terms() -> impl Iterator<Item = &'static str> {
    NON_VEGETARIAN_TERMS
        .iter()
        .chain(DAIRY_EGG_HONEY_TERMS)
        .copied()
}

/// English packaging and ingredient vocabulary. A single hit marks the text
/// as needing translation before analysis.
pub const TRANSLATION_MARKERS: &[&str] = &[
    "water", "sugar", "flour", "milk", "egg", "butter", "oil", "salt", "wheat", "corn", "soy",
    "contains", "may contain", "ingredients", "natural flavor", "artificial flavor",
    "preservative", "emulsifier", "stabilizer", "antioxidant", "color", "colour", "vitamin",
    "mineral", "rehydrated", "skimmed", "lactose-free", "vanilla", "essence", "inulin",
    "prebiotic", "natural", "fibre", "fiber", "maltodextrin", "sweeteners", "free", "powder",
    "extract", "concentrate", "modified", "starch", "and", "or", "with", "from", "added", "less",
    "than",
];
