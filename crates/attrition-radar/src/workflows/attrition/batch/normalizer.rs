/// Canonical column key: invisible characters stripped, lowercase, with runs
/// of whitespace, hyphens and dots folded into a single underscore.
pub(crate) fn normalize_field(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split(|ch: char| ch.is_whitespace() || ch == '-' || ch == '.' || ch == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_field;

    #[test]
    fn folds_case_whitespace_and_separators() {
        assert_eq!(normalize_field("\u{feff} Tenure  Years "), "tenure_years");
        assert_eq!(normalize_field("TRAINING-COUNT"), "training_count");
        assert_eq!(normalize_field("absence__count"), "absence_count");
        assert_eq!(normalize_field("name"), "name");
        assert_eq!(normalize_field("   "), "");
    }
}
