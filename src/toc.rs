//! Table of contents built from the headings of a rendered article.

use maud::{html, Markup};
use serde::Serialize;

/// A heading as it appears in the document, in document order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeadingRecord {
    pub depth: u8,
    pub text: String,
    pub slug: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct TocNode {
    pub depth: u8,
    pub text: String,
    pub slug: String,
    pub children: Vec<TocNode>,
}

impl From<HeadingRecord> for TocNode {
    fn from(heading: HeadingRecord) -> Self {
        Self {
            depth: heading.depth,
            text: heading.text,
            slug: heading.slug,
            children: vec![],
        }
    }
}

/// Inclusive window of heading depths that make it into the table of contents.
///
/// Headings at or above `min_level` always open a new top-level entry.
/// Headings deeper than `max_level` are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TocOptions {
    pub min_level: u8,
    pub max_level: u8,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
        }
    }
}

/// Builds the nested table of contents from a flat heading sequence.
///
/// Open entries are kept on a stack, shallowest first. An entry is attached
/// to its parent (or to the result, for top-level entries) once it is
/// closed, which happens when a heading of the same or a shallower depth
/// shows up, when a new top-level entry starts, or at the end of input.
/// Depth gaps are kept as-is: an `h4` right under an `h2` becomes its child.
pub(crate) fn create_toc_items<I>(headings: I, options: &TocOptions) -> Vec<TocNode>
where
    I: IntoIterator<Item = HeadingRecord>,
{
    let mut toc_items = vec![];
    let mut stack: Vec<TocNode> = vec![];

    for heading in headings {
        let item = TocNode::from(heading);

        while stack.last().is_some_and(|open| open.depth >= item.depth) {
            close_last(&mut stack, &mut toc_items);
        }

        if item.depth <= options.min_level {
            // hard reset: whatever is still open is finished
            while !stack.is_empty() {
                close_last(&mut stack, &mut toc_items);
            }
            stack.push(item);
        } else if !stack.is_empty() && item.depth <= options.max_level {
            stack.push(item);
        }
    }

    while !stack.is_empty() {
        close_last(&mut stack, &mut toc_items);
    }

    toc_items
}

// the bottom of the stack is always a top-level entry
fn close_last(stack: &mut Vec<TocNode>, toc_items: &mut Vec<TocNode>) {
    if let Some(item) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(item),
            None => toc_items.push(item),
        }
    }
}

/// Renders the table of contents as nested ordered lists.
/// Returns an empty string when there is nothing to show.
pub(crate) fn render_toc(items: &[TocNode]) -> String {
    if items.is_empty() {
        return String::new();
    }
    render_list(items).into_string()
}

fn render_list(items: &[TocNode]) -> Markup {
    html! {
        ol.toc-list {
            @for item in items {
                li.{ "toc-depth-" (item.depth) } {
                    a href={ "#" (item.slug) } { (item.text) }
                    @if !item.children.is_empty() {
                        (render_list(&item.children))
                    }
                }
            }
        }
    }
}
