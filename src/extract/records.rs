//! Sibling-stream segmentation into key/value records
//!
//! The source pages mark up records as a flat run of siblings: a marker
//! element (e.g. `strong`) starts a key, the following sibling carries the
//! value, and a separator element (e.g. `hr`) closes a record. There is no
//! schema to validate against, so everything short of a missing input
//! degrades into partial records instead of failing.

use indexmap::IndexMap;

use crate::dom::Node;
use crate::error::ExtractError;

/// One extracted record; keys keep document order
pub type Record = IndexMap<String, String>;

/// Which element kinds delimit keys and records.
///
/// Supplied by the caller: marker and separator tags are a convention of
/// the document, not something the segmenter should hard-code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentConfig {
    pub marker: String,
    pub separator: String,
}

impl SegmentConfig {
    pub fn new(marker: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            separator: separator.into(),
        }
    }
}

/// Split a sibling sequence into records.
///
/// Single forward pass. A separator flushes the record under construction
/// (empty spans emit nothing), a marker contributes one key/value pair via
/// lookahead, and every other node is ignored. A trailing non-empty record
/// is flushed when the sequence ends.
///
/// Duplicate keys within one record overwrite: the author intent behind a
/// repeated label is ambiguous, and keeping the last value loses less than
/// rejecting the document.
pub fn segment(nodes: &[&Node], config: &SegmentConfig) -> Result<Vec<Record>, ExtractError> {
    if nodes.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let mut results = Vec::new();
    let mut current = Record::new();

    for (position, node) in nodes.iter().enumerate() {
        if node.is_element(&config.separator) {
            if !current.is_empty() {
                results.push(std::mem::take(&mut current));
            }
            continue;
        }

        if node.is_element(&config.marker) {
            let key = normalize_key(&node.text());
            // Lookahead only peeks: the value node stays in the main pass,
            // so a separator sitting in value position is still honored.
            let value = lookahead_value(&nodes[position + 1..]);
            current.insert(key, value);
        }
    }

    if !current.is_empty() {
        results.push(current);
    }

    Ok(results)
}

/// Peek past a marker for its value.
///
/// At most one whitespace-only text sibling is skipped. An element value
/// contributes its aggregated descendant text (values are often wrapped in
/// styling elements); a text value is taken as is. A marker at the end of
/// the chain gets an empty value rather than an error.
fn lookahead_value(rest: &[&Node]) -> String {
    let mut siblings = rest.iter();
    let mut next = siblings.next();
    if next.is_some_and(|node| node.is_whitespace()) {
        next = siblings.next();
    }
    match next {
        Some(node) => normalize_value(&node.text()),
        None => String::new(),
    }
}

/// Marker text to record key: trim, drop a trailing colon, lowercase,
/// spaces to underscores
fn normalize_key(text: &str) -> String {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed);
    trimmed.to_lowercase().replace(' ', "_")
}

/// Value text: trim surrounding whitespace, drop embedded line breaks
fn normalize_value(text: &str) -> String {
    text.trim().replace(['\n', '\r'], "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_document;

    fn config() -> SegmentConfig {
        SegmentConfig::new("strong", "hr")
    }

    fn marker(label: &str) -> Node {
        Node::element("strong", vec![Node::text_node(label)])
    }

    fn refs(nodes: &[Node]) -> Vec<&Node> {
        nodes.iter().collect()
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(segment(&[], &config()), Err(ExtractError::EmptyInput));
    }

    #[test]
    fn test_no_markers_yields_no_records() {
        let nodes = [
            Node::element("p", vec![Node::text_node("preamble")]),
            Node::text_node("\n"),
        ];
        let records = segment(&refs(&nodes), &config()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_leading_separator_emits_nothing() {
        let nodes = [
            Node::element("hr", vec![]),
            marker("Task:"),
            Node::text_node("Essay"),
        ];
        let records = segment(&refs(&nodes), &config()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["task"], "Essay");
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let nodes = [
            marker("Task:"),
            Node::text_node("Essay"),
            marker("Task:"),
            Node::text_node("Report"),
        ];
        let records = segment(&refs(&nodes), &config()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["task"], "Report");
    }

    #[test]
    fn test_whitespace_sibling_is_skipped() {
        let nodes = [
            marker("Due Date:"),
            Node::text_node("\n"),
            Node::element("span", vec![Node::text_node("30 Oct")]),
        ];
        let records = segment(&refs(&nodes), &config()).unwrap();
        assert_eq!(records[0]["due_date"], "30 Oct");
    }

    #[test]
    fn test_trailing_marker_gets_empty_value() {
        let nodes = [marker("Weighting:")];
        let records = segment(&refs(&nodes), &config()).unwrap();
        assert_eq!(records[0]["weighting"], "");
    }

    #[test]
    fn test_separator_splits_records() {
        let nodes = [
            marker("Task:"),
            Node::text_node("Essay"),
            Node::element("hr", vec![]),
            marker("Task:"),
            Node::text_node("Exam"),
            Node::element("hr", vec![]),
        ];
        let records = segment(&refs(&nodes), &config()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["task"], "Essay");
        assert_eq!(records[1]["task"], "Exam");
    }

    #[test]
    fn test_content_after_last_separator_is_kept() {
        let nodes = [
            marker("Task:"),
            Node::text_node("Essay"),
            Node::element("hr", vec![]),
            marker("Task:"),
            Node::text_node("Exam"),
        ];
        let records = segment(&refs(&nodes), &config()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["task"], "Exam");
    }

    #[test]
    fn test_value_newlines_are_stripped() {
        let nodes = [marker("Description:"), Node::text_node("  two\nlines  ")];
        let records = segment(&refs(&nodes), &config()).unwrap();
        assert_eq!(records[0]["description"], "twolines");
    }

    #[test]
    fn test_keys_keep_document_order() {
        let nodes = [
            marker("Task:"),
            Node::text_node("Essay"),
            marker("Due Date:"),
            Node::text_node("30 Oct"),
            marker("Weighting:"),
            Node::text_node("40%"),
        ];
        let records = segment(&refs(&nodes), &config()).unwrap();
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, ["task", "due_date", "weighting"]);
    }

    #[test]
    fn test_segment_from_parsed_html() {
        let html = r#"
        <div id="assessmentDetail">
            <strong>Task:</strong> <span>Essay</span>
            <strong>Weighting:</strong> 40%
            <hr>
            <strong>Task:</strong> Final Exam
            <strong>Weighting:</strong> 60%
        </div>
        "#;

        let root = parse_document(html);
        let detail = root.find_by_id("assessmentDetail").unwrap();
        let siblings: Vec<&Node> = detail.children().iter().collect();

        let records = segment(&siblings, &config()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["task"], "Essay");
        assert_eq!(records[0]["weighting"], "40%");
        assert_eq!(records[1]["task"], "Final Exam");
        assert_eq!(records[1]["weighting"], "60%");
    }
}
