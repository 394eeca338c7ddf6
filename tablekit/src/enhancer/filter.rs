//! The filter and highlight pass.

use log::debug;
use regex::{Regex, RegexBuilder};
use tabledom::{Span, Table};

/// Run one filter pass over the whole body.
///
/// Row visibility is set from plain substring containment of the lower-cased
/// query in the row's space-joined, lower-cased cell text. With `highlight`
/// on, every cell's display is recomputed from its original text: matched
/// substrings become emphasized spans, an empty query restores the plain
/// display. Re-running with the same query is a no-op in effect, and markers
/// from a previous query never survive because display is never derived from
/// display.
pub(super) fn apply(table: &mut Table, query: &str, highlight: bool) {
    let needle = query.to_lowercase();
    let matcher = if highlight && !needle.is_empty() {
        build_matcher(query)
    } else {
        None
    };

    let mut shown = 0usize;
    for row in table.rows_mut() {
        let haystack = row
            .cells()
            .iter()
            .map(|cell| cell.text().to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let matched = needle.is_empty() || haystack.contains(&needle);
        row.set_visible(matched);
        if matched {
            shown += 1;
        }

        if let Some(re) = &matcher {
            for cell in row.cells_mut() {
                let spans = highlight_spans(re, cell.text());
                cell.set_display(spans);
            }
        } else if highlight {
            for cell in row.cells_mut() {
                cell.reset_display();
            }
        }
    }

    debug!("filter {query:?}: {shown}/{} rows visible", table.len());
}

/// Case-insensitive matcher for the literal query text. The query is escaped
/// so metacharacters typed by the user match literally instead of breaking
/// the pass.
fn build_matcher(query: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Split `text` into plain/emphasized spans around the matcher's hits.
fn highlight_spans(re: &Regex, text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for found in re.find_iter(text) {
        if found.start() > last {
            spans.push(Span::plain(&text[last..found.start()]));
        }
        spans.push(Span::emphasized(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        spans.push(Span::plain(&text[last..]));
    }
    if spans.is_empty() {
        spans.push(Span::plain(text));
    }

    spans
}
