//! Plain text rendering for reflowed documents.

use crate::model::Document;

/// Render a reflowed document to flattened plain text.
///
/// Pages are concatenated in document order. Each block ends with a blank
/// separator line and header lines carry a leading `#` marker, so the
/// trailing separator of the final block is trimmed off.
pub fn to_text(doc: &Document) -> String {
    let mut output = doc.plain_text();
    let trimmed = output.trim_end().len();
    output.truncate(trimmed);
    output
}
