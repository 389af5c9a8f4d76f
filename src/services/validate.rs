use std::collections::BTreeSet;

#[derive(Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: BTreeSet<String>,
    pub invalid: BTreeSet<String>,
    pub all_valid: bool,
}

/// Partition a keyword set against the taxonomy. Pure: no I/O, no side
/// effects. A `None` taxonomy means validation is disabled and everything
/// passes; an empty taxonomy invalidates everything.
pub fn validate(keywords: &BTreeSet<String>, taxonomy: Option<&BTreeSet<String>>) -> ValidationResult {
    match taxonomy {
        None => ValidationResult {
            valid: keywords.clone(),
            invalid: BTreeSet::new(),
            all_valid: true,
        },
        Some(terms) => {
            let valid: BTreeSet<String> = keywords.intersection(terms).cloned().collect();
            let invalid: BTreeSet<String> = keywords.difference(terms).cloned().collect();
            let all_valid = invalid.is_empty();
            ValidationResult {
                valid,
                invalid,
                all_valid,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate;
    use std::collections::BTreeSet;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_taxonomy_means_everything_valid() {
        let result = validate(&set(&["api", "security"]), None);
        assert!(result.all_valid);
        assert_eq!(result.valid, set(&["api", "security"]));
        assert!(result.invalid.is_empty());
    }

    #[test]
    fn empty_taxonomy_invalidates_every_keyword() {
        let result = validate(&set(&["api"]), Some(&set(&[])));
        assert!(!result.all_valid);
        assert_eq!(result.invalid, set(&["api"]));

        let empty = validate(&set(&[]), Some(&set(&[])));
        assert!(empty.all_valid);
    }

    #[test]
    fn partitions_are_disjoint_and_cover_the_input() {
        let keywords = set(&["api", "architecture", "security"]);
        let taxonomy = set(&["api", "architecture"]);
        let result = validate(&keywords, Some(&taxonomy));

        assert_eq!(result.valid, set(&["api", "architecture"]));
        assert_eq!(result.invalid, set(&["security"]));
        assert!(!result.all_valid);

        let union: BTreeSet<String> = result.valid.union(&result.invalid).cloned().collect();
        assert_eq!(union, keywords);
        assert!(result.valid.intersection(&result.invalid).next().is_none());
    }
}
