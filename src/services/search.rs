use crate::domain::models::Document;
use crate::extract::read_content;

/// Documents referencing the given ADR, by bare 5-digit id.
pub fn find_by_adr(documents: &[Document], id: &str) -> Vec<String> {
    matching(documents, |doc| doc.refs.adr.contains(id))
}

/// Documents referencing the given requirement, full `REQ-...` id.
pub fn find_by_req(documents: &[Document], id: &str) -> Vec<String> {
    matching(documents, |doc| doc.refs.req.contains(id))
}

/// Documents referencing the given run note, full `RunNotes-...` id.
pub fn find_by_runnote(documents: &[Document], id: &str) -> Vec<String> {
    matching(documents, |doc| doc.refs.runnote.contains(id))
}

/// Documents annotated with the exact keyword.
pub fn find_by_keyword(documents: &[Document], keyword: &str) -> Vec<String> {
    matching(documents, |doc| doc.keywords.contains(keyword))
}

/// Plain case-sensitive substring match over raw file text. No regex, no
/// tokenization; the simplest correct behavior, documented as such.
/// Unreadable files are warned by the reader and skipped.
pub fn find_by_content(documents: &[Document], needle: &str) -> Vec<String> {
    matching(documents, |doc| {
        read_content(&doc.path)
            .map(|content| content.contains(needle))
            .unwrap_or(false)
    })
}

fn matching(documents: &[Document], predicate: impl Fn(&Document) -> bool) -> Vec<String> {
    let mut paths: Vec<String> = documents
        .iter()
        .filter(|doc| predicate(doc))
        .map(|doc| doc.path.to_string_lossy().to_string())
        .collect();
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::{find_by_adr, find_by_keyword, find_by_req, find_by_runnote};
    use crate::domain::models::Document;
    use crate::extract::extract_cross_refs;
    use std::path::PathBuf;

    fn doc(path: &str, content: &str, keywords: &[&str]) -> Document {
        Document {
            path: PathBuf::from(path),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            refs: extract_cross_refs(content),
        }
    }

    #[test]
    fn finds_documents_by_each_reference_variant() {
        let docs = vec![
            doc("a.md", "decided in [ADR-00042]", &[]),
            doc(
                "b.md",
                "covers REQ-AUTH-001 and RunNotes-2025-01-15-Feature",
                &[],
            ),
        ];

        assert_eq!(find_by_adr(&docs, "00042"), vec!["a.md"]);
        assert_eq!(find_by_req(&docs, "REQ-AUTH-001"), vec!["b.md"]);
        assert_eq!(
            find_by_runnote(&docs, "RunNotes-2025-01-15-Feature"),
            vec!["b.md"]
        );
        assert!(find_by_adr(&docs, "99999").is_empty());
    }

    #[test]
    fn keyword_search_is_exact_and_sorted() {
        let docs = vec![
            doc("z.md", "", &["api"]),
            doc("a.md", "", &["api", "security"]),
        ];
        assert_eq!(find_by_keyword(&docs, "api"), vec!["a.md", "z.md"]);
        assert!(find_by_keyword(&docs, "ap").is_empty());
    }
}
