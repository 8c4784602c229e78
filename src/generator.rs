use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;
use fs_extra::dir::CopyOptions;
use log::{debug, info, warn};

use crate::{
    content::{load_about, load_blog, AboutEntry, BlogEntry},
    context::Context,
    i18n::{Locale, DEFAULT_LOCALE},
    posts::get_localized_blog_posts,
    toc::{create_toc_items, render_toc},
};

use data::{AboutPageData, ArticlePageData, LanguageLink, ListPageData, PageData};
use feed::build_feed;
use markdown::render_markdown;
use sitemap::{write_sitemap, SitemapPage};

mod data;
mod feed;
mod markdown;
mod sitemap;

fn page_data(ctx: &Context, locale: Locale, path: String) -> PageData {
    PageData {
        locale,
        path,
        site: ctx.site.clone(),
        t: locale.ui_strings(),
        languages: Locale::ALL
            .iter()
            .map(|l| LanguageLink {
                locale: *l,
                name: l.language_name(),
                current: *l == locale,
            })
            .collect(),
    }
}

fn create_page(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let fd = File::create(path).with_context(|| format!("while creating {path:?}"))?;
    Ok(BufWriter::new(fd))
}

fn generate_article(ctx: &Context, locale: Locale, post: &BlogEntry) -> anyhow::Result<()> {
    debug!("Generating {locale}/{}", post.id);
    let rendered = render_markdown(&post.body);
    let toc = create_toc_items(rendered.headings, &ctx.toc);

    let data = ArticlePageData {
        page: page_data(ctx, locale, format!("/{locale}/{}/", post.id)),
        id: &post.id,
        meta: &post.data,
        body: rendered.html,
        toc_html: render_toc(&toc),
        toc: &toc,
    };

    let out_path = ctx
        .out_dir
        .join(locale.as_str())
        .join(&post.id)
        .join("index.html");
    let mut out = create_page(&out_path)?;
    ctx.handlebars
        .render_to_write("article", &data, &mut out)
        .with_context(|| format!("while generating from {locale}/{}", post.id))?;
    out.flush()?;
    Ok(())
}

fn generate_list(
    ctx: &Context,
    locale: Locale,
    posts: &[BlogEntry],
    out_path: &Path,
) -> anyhow::Result<()> {
    let data = ListPageData {
        page: page_data(ctx, locale, format!("/{locale}/")),
        posts,
    };
    let mut out = create_page(out_path)?;
    ctx.handlebars
        .render_to_write("index", &data, &mut out)
        .with_context(|| format!("while generating {out_path:?}"))?;
    out.flush()?;
    Ok(())
}

fn generate_about(ctx: &Context, locale: Locale, about: &AboutEntry) -> anyhow::Result<()> {
    let data = AboutPageData {
        page: page_data(ctx, locale, format!("/{locale}/about/")),
        body: render_markdown(&about.body).html,
    };
    let out_path = ctx.out_dir.join(locale.as_str()).join("about").join("index.html");
    let mut out = create_page(&out_path)?;
    ctx.handlebars
        .render_to_write("about", &data, &mut out)
        .with_context(|| format!("while generating about page for {locale}"))?;
    out.flush()?;
    Ok(())
}

pub(crate) fn generate(ctx: &Context) -> anyhow::Result<()> {
    fs_extra::dir::remove(&ctx.out_dir)?;
    fs_extra::dir::create_all(&ctx.out_dir, false)?;

    // copy `public_dir`
    let mut cp_opts = CopyOptions::new();
    cp_opts.copy_inside = true;
    cp_opts.content_only = true;
    cp_opts.overwrite = true;
    fs_extra::dir::copy(&ctx.public_dir, &ctx.out_dir, &cp_opts)
        .context("while copying public directory")?;

    let posts = load_blog(&ctx.content_dir)?;
    let about = load_about(&ctx.content_dir)?;
    info!("Loaded {} posts, {} about pages", posts.len(), about.len());

    let mut pages = vec![SitemapPage {
        locale: None,
        path: String::new(),
    }];
    let mut add_page = |locale: Locale, path: String| {
        pages.push(SitemapPage {
            locale: Some(locale),
            path,
        })
    };

    for locale in Locale::ALL {
        let localized = get_localized_blog_posts(&posts, locale.as_str());
        info!("Generating {} posts for {locale}", localized.len());

        for post in localized.iter() {
            generate_article(ctx, locale, post)?;
            add_page(locale, format!("{}/", post.id));
        }
        generate_list(
            ctx,
            locale,
            &localized,
            &ctx.out_dir.join(locale.as_str()).join("index.html"),
        )?;
        add_page(locale, String::new());
        if locale == DEFAULT_LOCALE {
            generate_list(ctx, locale, &localized, &ctx.out_dir.join("index.html"))?;
        }

        match about.iter().find(|a| a.id == locale.as_str()) {
            Some(entry) => {
                generate_about(ctx, locale, entry)?;
                add_page(locale, "about/".to_string());
            }
            None => warn!("No about page for {locale}"),
        }
    }

    // feed
    {
        let feed = build_feed(&posts, &ctx.site);
        let mut out = create_page(&ctx.out_dir.join("rss.xml"))?;
        feed.write_to(&mut out).context("while generating rss.xml")?;
        out.flush()?;
    }

    // sitemap
    {
        let mut out = create_page(&ctx.out_dir.join("sitemap.xml"))?;
        write_sitemap(&mut out, &ctx.site, &pages).context("while generating sitemap.xml")?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{renderer::generate_renderer, toc::TocOptions};
    use std::fs;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn setup(root: &Path) -> Context {
        let template = root.join("template");
        write(
            &template.join("layout.hbs"),
            "<html lang=\"{{page.locale}}\">{{> @partial-block}}</html>",
        );
        write(
            &template.join("index.hbs"),
            "{{#> layout}}{{page.t.[nav.home]}}:{{#each posts}}[{{id}}]{{/each}}{{/layout}}",
        );
        write(
            &template.join("article.hbs"),
            "{{#> layout}}<h1>{{meta.title}}</h1><nav>{{{toc_html}}}</nav>{{{body}}}{{/layout}}",
        );
        write(&template.join("about.hbs"), "{{#> layout}}{{{body}}}{{/layout}}");

        let content = root.join("content");
        write(
            &content.join("blog/ko/first.md"),
            "---\ntitle: 첫 글\ndescription: 설명\ncreatedAt: 2024-03-10\n---\n## 시작\n\n본문\n",
        );
        write(
            &content.join("blog/en/first.md"),
            "---\ntitle: First\ndescription: Desc\ncreatedAt: 2024-03-10\n---\n## Start\n\n### Detail\n\n#### Too deep\n",
        );
        write(
            &content.join("blog/en/second.md"),
            "---\ntitle: Second\ndescription: Desc\ncreatedAt: 2024-03-01\npublishedAt: 2024-04-01\n---\nBody\n",
        );
        write(&content.join("about/en.md"), "I write *things*.\n");

        write(&root.join("public/style.css"), "body {}");

        Context {
            content_dir: content,
            out_dir: root.join("out"),
            public_dir: root.join("public"),
            site: "https://example.com".to_string(),
            toc: TocOptions::default(),
            handlebars: generate_renderer(&template).unwrap(),
        }
    }

    #[test]
    fn generates_the_whole_site() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = setup(dir.path());
        // stale output is removed
        write(&ctx.out_dir.join("stale.html"), "old");

        generate(&ctx).unwrap();

        let out = &ctx.out_dir;
        assert!(!out.join("stale.html").exists());
        assert_eq!(fs::read_to_string(out.join("style.css")).unwrap(), "body {}");

        let en_index = fs::read_to_string(out.join("en/index.html")).unwrap();
        assert_eq!(en_index, "<html lang=\"en\">Blog:[second][first]</html>");
        let root_index = fs::read_to_string(out.join("index.html")).unwrap();
        assert_eq!(root_index, en_index);
        let ko_index = fs::read_to_string(out.join("ko/index.html")).unwrap();
        assert_eq!(ko_index, "<html lang=\"ko\">블로그:[first]</html>");

        let article = fs::read_to_string(out.join("en/first/index.html")).unwrap();
        assert!(article.contains("<h1>First</h1>"));
        assert!(article.contains("<a href=\"#start\">Start</a>"));
        assert!(article.contains("<a href=\"#detail\">Detail</a>"));
        assert!(!article.contains("href=\"#too-deep\""));
        assert!(article.contains("<h4 id=\"too-deep\">"));

        let about = fs::read_to_string(out.join("en/about/index.html")).unwrap();
        assert!(about.contains("<em>things</em>"));
        assert!(!out.join("ko/about/index.html").exists());

        let feed = fs::read_to_string(out.join("rss.xml")).unwrap();
        assert!(feed.contains("https://example.com/en/second/"));
        assert!(feed.contains("https://example.com/ko/first/"));

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/</loc>"));
        assert!(sitemap.contains("<loc>https://example.com/en/second/</loc>"));
        assert!(sitemap.contains("<loc>https://example.com/en/about/</loc>"));
        assert!(sitemap.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"ko-KR\" href=\"https://example.com/ko/first/\"/>"
        ));
        assert!(sitemap.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"en-US\" href=\"https://example.com/en/first/\"/>"
        ));
    }
}
