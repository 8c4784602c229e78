use std::path::Path;

use anyhow::Context;
use handlebars::{handlebars_helper, Handlebars};

use crate::{
    i18n::{is_valid_locale, Locale},
    metadata::parse_date,
};

fn format_date(date: &str, locale: &str) -> String {
    let Ok(date) = parse_date(date) else {
        return date.to_string();
    };
    match locale.parse::<Locale>() {
        Ok(Locale::Ko) => date.format("%Y년 %-m월 %-d일").to_string(),
        _ => date.format("%B %-d, %Y").to_string(),
    }
}

/// Rewrites the locale segment of a site path, e.g. `/ko/post/` to `/en/post/`.
fn switch_locale(path: &str, locale: &str) -> String {
    let mut segments = path.trim_start_matches('/').splitn(2, '/');
    match (segments.next(), segments.next()) {
        (Some(first), rest) if is_valid_locale(first) => {
            format!("/{locale}/{}", rest.unwrap_or(""))
        }
        _ => format!("/{locale}/"),
    }
}

handlebars_helper!(format_date_helper: |date: str, locale: str| format_date(date, locale));
handlebars_helper!(switch_locale_helper: |path: str, locale: str| switch_locale(path, locale));
handlebars_helper!(language_name: |locale: str| locale
    .parse::<Locale>()
    .map(|l| l.language_name())
    .unwrap_or(locale)
    .to_string());

pub(crate) fn generate_renderer(template_dir: &Path) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = handlebars::Handlebars::new();
    handlebars.register_helper("format_date", Box::new(format_date_helper));
    handlebars.register_helper("switch_locale", Box::new(switch_locale_helper));
    handlebars.register_helper("language_name", Box::new(language_name));
    for name in ["index", "article", "about"] {
        handlebars
            .register_template_file(name, template_dir.join(format!("{name}.hbs")))
            .with_context(|| format!("{name}.hbs"))?;
    }
    handlebars.register_partial(
        "layout",
        std::fs::read_to_string(template_dir.join("layout.hbs")).context("layout.hbs")?,
    )?;

    Ok(handlebars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_follow_locale() {
        assert_eq!(format_date("2024-03-05", "ko"), "2024년 3월 5일");
        assert_eq!(format_date("2024-03-05", "en"), "March 5, 2024");
        assert_eq!(format_date("2024-03-05", "fr"), "March 5, 2024");
        assert_eq!(format_date("someday", "en"), "someday");
    }

    #[test]
    fn locale_switching() {
        assert_eq!(switch_locale("/ko/hello/", "en"), "/en/hello/");
        assert_eq!(switch_locale("/en/", "ko"), "/ko/");
        assert_eq!(switch_locale("/en", "ko"), "/ko/");
        assert_eq!(switch_locale("/", "ko"), "/ko/");
        assert_eq!(switch_locale("/rss.xml", "en"), "/en/");
    }

    #[test]
    fn helpers_are_usable_from_templates() {
        let dir = tempfile::tempdir().unwrap();
        let t = dir.path();
        std::fs::write(t.join("layout.hbs"), "<main>{{> @partial-block}}</main>").unwrap();
        std::fs::write(
            t.join("index.hbs"),
            "{{#> layout}}{{language_name locale}} {{format_date date locale}}{{/layout}}",
        )
        .unwrap();
        std::fs::write(t.join("article.hbs"), "{{switch_locale path \"en\"}}").unwrap();
        std::fs::write(t.join("about.hbs"), "").unwrap();

        let handlebars = generate_renderer(t).unwrap();
        let index = handlebars
            .render(
                "index",
                &serde_json::json!({ "locale": "ko", "date": "2024-01-02" }),
            )
            .unwrap();
        assert_eq!(index, "<main>한국어 2024년 1월 2일</main>");
        let article = handlebars
            .render("article", &serde_json::json!({ "path": "/ko/a/" }))
            .unwrap();
        assert_eq!(article, "/en/a/");
    }

    #[test]
    fn missing_template_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_renderer(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("index.hbs"));
    }
}
