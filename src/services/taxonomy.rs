use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

/// `` `:keyword-name` `` declarations inside the taxonomy document.
static DECLARATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`:([^`]+)`").unwrap());

/// Load the recognized-keyword set from a taxonomy document.
///
/// `None` means validation is disabled (missing file or load failure) and is
/// deliberately distinct from `Some(empty)`: an empty taxonomy invalidates
/// every keyword. That strictness is documented behavior; the warning below
/// keeps it from being a silent surprise.
pub fn load_taxonomy(path: &Path) -> Option<BTreeSet<String>> {
    if !path.exists() {
        warn!(
            "taxonomy {} not found; keyword validation disabled",
            path.display()
        );
        return None;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(
                "failed to read taxonomy {}: {}; keyword validation disabled",
                path.display(),
                e
            );
            return None;
        }
    };

    let terms: BTreeSet<String> = DECLARATION_RE
        .captures_iter(&content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    if terms.is_empty() {
        warn!(
            "taxonomy {} declares no keywords; every extracted keyword will fail validation",
            path.display()
        );
    }
    Some(terms)
}
