use std::io::Write;

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::i18n::Locale;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// A generated page. `path` is relative to the locale directory, or to the
/// site root for pages outside any locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SitemapPage {
    pub locale: Option<Locale>,
    pub path: String,
}

impl SitemapPage {
    fn url(&self, site: &str) -> String {
        match self.locale {
            Some(locale) => format!("{site}/{locale}/{}", self.path),
            None => format!("{site}/{}", self.path),
        }
    }
}

fn write_text<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> anyhow::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Writes a sitemap where every localized page links to its translations.
pub(crate) fn write_sitemap<W: Write>(
    out: W,
    site: &str,
    pages: &[SitemapPage],
) -> anyhow::Result<()> {
    let site = site.trim_end_matches('/');
    let mut writer = Writer::new(out);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS), ("xmlns:xhtml", XHTML_NS)]),
    ))?;

    for page in pages {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text(&mut writer, "loc", &page.url(site))?;

        let alternates: Vec<(Locale, String)> = match page.locale {
            Some(_) => pages
                .iter()
                .filter(|p| p.path == page.path)
                .filter_map(|p| p.locale.map(|locale| (locale, p.url(site))))
                .collect(),
            None => vec![],
        };
        if alternates.len() > 1 {
            for (locale, href) in alternates.iter() {
                writer.write_event(Event::Empty(BytesStart::new("xhtml:link").with_attributes([
                    ("rel", "alternate"),
                    ("hreflang", locale.hreflang()),
                    ("href", href.as_str()),
                ])))?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(())
}
