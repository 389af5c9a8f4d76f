use crate::domain::models::Document;
use std::collections::BTreeMap;

/// Map every keyword seen across `documents` to the sorted list of document
/// paths containing it. Multi-project runs union their document sets before
/// calling this, so one mapping covers the whole scope.
pub fn build_index(documents: &[Document]) -> BTreeMap<String, Vec<String>> {
    let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for doc in documents {
        let path = doc.path.to_string_lossy().to_string();
        for keyword in &doc.keywords {
            index.entry(keyword.clone()).or_default().push(path.clone());
        }
    }
    for paths in index.values_mut() {
        paths.sort();
        paths.dedup();
    }
    index
}
