use std::collections::HashMap;

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use crate::toc::HeadingRecord;

#[derive(Debug)]
pub(crate) struct RenderedMarkdown {
    pub html: String,
    pub headings: Vec<HeadingRecord>,
}

/// GitHub-style heading anchors, unique within one document.
#[derive(Debug, Default)]
pub(crate) struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn slug(&mut self, value: &str) -> String {
        let original = slugify(value);
        let mut slug = original.clone();
        while self.occurrences.contains_key(&slug) {
            let count = self.occurrences.entry(original.clone()).or_default();
            *count += 1;
            slug = format!("{original}-{count}");
        }
        self.occurrences.insert(slug.clone(), 0);
        slug
    }

    /// Marks an explicit anchor as taken so generated slugs avoid it.
    pub fn reserve(&mut self, id: &str) {
        self.occurrences.entry(id.to_string()).or_default();
    }
}

fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

fn heading_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}

/// Renders a Markdown body, giving every heading an anchor id.
/// An explicit `{#id}` attribute is kept as the heading's slug.
pub(crate) fn render_markdown(body: &str) -> RenderedMarkdown {
    let mut events: Vec<Event> = Parser::new_ext(body, options()).collect();
    let mut slugger = Slugger::default();
    let mut headings = vec![];

    for event in events.iter() {
        if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
            slugger.reserve(id);
        }
    }

    for i in 0..events.len() {
        let Event::Start(Tag::Heading { level, .. }) = &events[i] else {
            continue;
        };
        let depth = *level as u8;
        let text = heading_text(&events[i + 1..]);

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            if id.is_none() {
                *id = Some(slugger.slug(&text).into());
            }
            let slug = id.as_deref().unwrap_or_default().to_string();
            headings.push(HeadingRecord { depth, text, slug });
        }
    }

    let mut html = String::new();
    html::push_html(&mut html, events.into_iter());

    RenderedMarkdown { html, headings }
}
