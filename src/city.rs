pub const CITIES: [&str; 15] = [
    "Paris",
    "Lyon",
    "Marseille",
    "Lille",
    "Bordeaux",
    "Toulouse",
    "Nice",
    "Nantes",
    "Strasbourg",
    "Montpellier",
    "Rennes",
    "Grenoble",
    "Toulon",
    "Dijon",
    "Angers",
];

/// Catalog entries starting with `prefix`, ignoring case, in catalog order.
pub fn suggest(prefix: &str) -> Vec<&'static str> {
    let prefix = prefix.trim().to_lowercase();
    CITIES
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().starts_with(&prefix))
        .collect()
}
