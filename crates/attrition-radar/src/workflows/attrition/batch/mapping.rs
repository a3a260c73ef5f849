use super::normalizer::normalize_field;
use std::collections::HashMap;
use std::sync::OnceLock;

pub(crate) const NAME: &str = "name";
pub(crate) const DEPARTMENT: &str = "department";
pub(crate) const TITLE: &str = "title";
pub(crate) const TENURE_YEARS: &str = "tenure_years";
pub(crate) const DEVELOPMENT_PLAN: &str = "participated_in_development_plan";
pub(crate) const TRAINING_COUNT: &str = "training_count";
pub(crate) const ABSENCE_COUNT: &str = "absence_count";

/// Required columns, in the order a schema error reports them.
pub(crate) const REQUIRED_FIELDS: [&str; 7] = [
    NAME,
    DEPARTMENT,
    TITLE,
    TENURE_YEARS,
    DEVELOPMENT_PLAN,
    TRAINING_COUNT,
    ABSENCE_COUNT,
];

static FIELD_ALIASES: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

/// Resolve a raw column header to its canonical field, if it names one.
pub(crate) fn canonical_field(raw: &str) -> Option<&'static str> {
    field_aliases().get(&normalize_field(raw)).copied()
}

fn field_aliases() -> &'static HashMap<String, &'static str> {
    FIELD_ALIASES.get_or_init(|| {
        const ALIASES: &[(&str, &str)] = &[
            ("Employee Name", NAME),
            ("Full Name", NAME),
            ("Employee", NAME),
            ("Dept", DEPARTMENT),
            ("Area", DEPARTMENT),
            ("Job Title", TITLE),
            ("Role", TITLE),
            ("Position", TITLE),
            ("Tenure", TENURE_YEARS),
            ("Years of Service", TENURE_YEARS),
            ("Tenure (years)", TENURE_YEARS),
            ("Development Plan", DEVELOPMENT_PLAN),
            ("Participated in PDI", DEVELOPMENT_PLAN),
            ("PDI", DEVELOPMENT_PLAN),
            ("Trainings", TRAINING_COUNT),
            ("Training Sessions", TRAINING_COUNT),
            ("Absences", ABSENCE_COUNT),
            ("Absence Days", ABSENCE_COUNT),
        ];

        let mut map = HashMap::with_capacity(REQUIRED_FIELDS.len() + ALIASES.len());
        for field in REQUIRED_FIELDS {
            map.insert(normalize_field(field), field);
        }
        for (alias, field) in ALIASES {
            map.insert(normalize_field(alias), *field);
        }
        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_canonical_names_and_aliases() {
        assert_eq!(canonical_field("Tenure_Years"), Some(TENURE_YEARS));
        assert_eq!(canonical_field(" job title "), Some(TITLE));
        assert_eq!(canonical_field("PDI"), Some(DEVELOPMENT_PLAN));
        assert_eq!(canonical_field("Absences"), Some(ABSENCE_COUNT));
        assert_eq!(canonical_field("favorite color"), None);
    }
}
