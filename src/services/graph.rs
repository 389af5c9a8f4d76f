use crate::domain::models::{Document, GraphEdge, GraphExport};
use std::collections::{BTreeMap, BTreeSet};

/// Build the keyword co-occurrence graph: one edge per unordered keyword
/// pair, weighted by the number of documents in which both appear. Edges
/// below `min_weight` are dropped; nodes cover every keyword of every
/// document in scope so isolated keywords still show up. Node and edge
/// ordering is lexicographic, which keeps the serialization diff-stable.
pub fn build_graph(documents: &[Document], min_weight: usize) -> GraphExport {
    let mut nodes: BTreeSet<String> = BTreeSet::new();
    let mut weights: BTreeMap<(String, String), usize> = BTreeMap::new();

    for doc in documents {
        nodes.extend(doc.keywords.iter().cloned());
        let keywords: Vec<&String> = doc.keywords.iter().collect();
        for (i, a) in keywords.iter().enumerate() {
            for b in keywords.iter().skip(i + 1) {
                // BTreeSet iteration is ordered, so (a, b) is already the
                // canonical form of the unordered pair.
                *weights
                    .entry(((*a).clone(), (*b).clone()))
                    .or_insert(0) += 1;
            }
        }
    }

    let edges: Vec<GraphEdge> = weights
        .into_iter()
        .filter(|(_, weight)| *weight >= min_weight)
        .map(|((a, b), weight)| GraphEdge { a, b, weight })
        .collect();

    GraphExport {
        nodes: nodes.into_iter().collect(),
        edges,
    }
}

/// Render the graph as DOT text for external graph tooling. Undirected
/// (`--` edges); `weights` adds a label per edge. Output ordering follows
/// the export's, so identical inputs produce byte-identical text.
pub fn render_dot(graph: &GraphExport, weights: bool) -> String {
    let mut out = String::from("graph doctags_cooccurrence {\n");
    for node in &graph.nodes {
        out.push_str(&format!("  \"{}\";\n", escape(node)));
    }
    for edge in &graph.edges {
        if weights {
            out.push_str(&format!(
                "  \"{}\" -- \"{}\" [label=\"{}\"];\n",
                escape(&edge.a),
                escape(&edge.b),
                edge.weight
            ));
        } else {
            out.push_str(&format!(
                "  \"{}\" -- \"{}\";\n",
                escape(&edge.a),
                escape(&edge.b)
            ));
        }
    }
    out.push_str("}\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('"', "\\\"")
}
