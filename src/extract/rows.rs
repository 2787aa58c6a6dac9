//! Row matching in tabular documents
//!
//! Locates the link cell of the first table row whose columns carry the
//! expected texts. Matching is exact (after trimming), never substring:
//! the source tables use fixed vocabularies where "St Lucia" and
//! "St Lucia (Online)" are different offerings.

use crate::dom::Node;
use crate::error::ExtractError;

/// One column-position/expected-text pair; a row must satisfy all of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowConstraint {
    pub column: usize,
    pub expected: String,
}

impl RowConstraint {
    pub fn new(column: usize, expected: impl Into<String>) -> Self {
        Self {
            column,
            expected: expected.into(),
        }
    }
}

/// Find the href of the first row satisfying every constraint.
///
/// Cells are the element children of a row, in document order. A row with
/// too few cells to cover the constraints and the link column is simply not
/// a match. The link position is a convention of the document, so the caller
/// supplies `link_column` rather than having it inferred.
pub fn find_link(
    rows: &[&Node],
    constraints: &[RowConstraint],
    link_column: usize,
) -> Result<String, ExtractError> {
    for row in rows {
        let cells: Vec<&Node> = row
            .children()
            .iter()
            .filter(|child| child.name().is_some())
            .collect();

        if cells.len() <= link_column {
            continue;
        }

        let matched = constraints.iter().all(|constraint| {
            cells
                .get(constraint.column)
                .is_some_and(|cell| cell.text().trim() == constraint.expected.trim())
        });

        if !matched {
            continue;
        }

        // First match wins; a matched row without a usable anchor is a
        // structural defect, not a reason to keep scanning.
        return cells[link_column]
            .find("a")
            .and_then(|anchor| anchor.attr("href"))
            .map(str::to_string)
            .ok_or(ExtractError::LinkNotFound {
                column: link_column,
            });
    }

    Err(ExtractError::NoMatchingRow)
}
