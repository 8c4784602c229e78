use atom_syndication::{Entry, Feed, FixedDateTime, Link, Text};
use chrono::{NaiveDate, NaiveTime};

use crate::{
    content::BlogEntry,
    i18n::{use_translations, UiKey, DEFAULT_LOCALE},
    posts::sort_post,
};

fn to_datetime(date: NaiveDate) -> FixedDateTime {
    date.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

fn link(href: String, rel: &str) -> Link {
    let mut link = Link::default();
    link.set_href(href);
    link.set_rel(rel);
    link
}

/// Atom feed over the posts of every locale, newest first.
pub(crate) fn build_feed(posts: &[BlogEntry], site: &str) -> Feed {
    let t = use_translations(Some(DEFAULT_LOCALE.as_str()));
    let site = site.trim_end_matches('/');

    let mut posts: Vec<&BlogEntry> = posts.iter().collect();
    posts.sort_by(sort_post);

    let entries: Vec<Entry> = posts
        .iter()
        .map(|post| {
            let url = format!("{site}/{}/", post.id);
            let mut entry = Entry::default();
            entry.set_title(post.data.title.as_str());
            entry.set_id(url.clone());
            entry.set_updated(to_datetime(post.data.last_modified()));
            entry.set_published(post.data.published_at.map(to_datetime));
            entry.set_summary(Some(Text::plain(post.data.description.as_str())));
            entry.set_links(vec![link(url, "alternate")]);
            entry
        })
        .collect();

    let mut feed = Feed::default();
    feed.set_title(t(UiKey::Title));
    feed.set_subtitle(Some(Text::plain(t(UiKey::Description))));
    feed.set_id(format!("{site}/"));
    feed.set_updated(
        entries
            .iter()
            .map(|e| *e.updated())
            .max()
            .unwrap_or_default(),
    );
    feed.set_links(vec![
        link(format!("{site}/"), "alternate"),
        link(format!("{site}/rss.xml"), "self"),
    ]);
    feed.set_entries(entries);
    feed
}
