use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::{command, value_parser, Arg, ArgMatches};
use log::info;

use context::Context;
use generator::generate;
use renderer::generate_renderer;
use toc::TocOptions;

mod content;
mod context;
mod generator;
mod i18n;
mod metadata;
mod posts;
mod renderer;
mod toc;

fn path_arg<'a>(matches: &'a ArgMatches, name: &str) -> anyhow::Result<&'a PathBuf> {
    matches
        .get_one::<PathBuf>(name)
        .with_context(|| format!("{name} is required"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args([
            Arg::new("content_dir")
                .help("Directory holding the `blog` and `about` collections")
                .value_parser(value_parser!(PathBuf))
                .default_value("content"),
            Arg::new("out_dir")
                .help("Directory path of output. Existing contents will be removed.")
                .value_parser(value_parser!(PathBuf))
                .default_value("out"),
            Arg::new("public_dir")
                .help("Directory path of public. Contents will be copied as it is.")
                .value_parser(value_parser!(PathBuf))
                .default_value("public"),
            Arg::new("template_dir")
                .help("Directory of template")
                .value_parser(value_parser!(PathBuf))
                .default_value("template"),
            Arg::new("site")
                .long("site")
                .env("BLOG_SITE")
                .help("Absolute URL the site is served from, used in the feed")
                .default_value("https://imhonglu.github.io"),
            Arg::new("toc_min_level")
                .long("toc-min-level")
                .help("Headings at or above this level start a new table of contents entry")
                .value_parser(value_parser!(u8).range(1..=6))
                .default_value("2"),
            Arg::new("toc_max_level")
                .long("toc-max-level")
                .help("Headings below this level are left out of the table of contents")
                .value_parser(value_parser!(u8).range(1..=6))
                .default_value("3"),
        ])
        .get_matches();

    let content_dir = path_arg(&matches, "content_dir")?;
    if !content_dir.is_dir() {
        bail!("content_dir must be a directory.");
    }
    let out_dir = path_arg(&matches, "out_dir")?;
    if out_dir.exists() && !out_dir.is_dir() {
        bail!("if out_dir exists, it must be directory.");
    }
    let public_dir = path_arg(&matches, "public_dir")?;
    if !public_dir.is_dir() {
        bail!("public_dir must be a directory.")
    }
    let template_dir = path_arg(&matches, "template_dir")?;
    if !template_dir.is_dir() {
        bail!("template_dir must be a directory.")
    }

    let toc = TocOptions {
        min_level: *matches
            .get_one::<u8>("toc_min_level")
            .context("toc_min_level is required")?,
        max_level: *matches
            .get_one::<u8>("toc_max_level")
            .context("toc_max_level is required")?,
    };
    if toc.min_level > toc.max_level {
        bail!(
            "toc-min-level({}) must not exceed toc-max-level({}).",
            toc.min_level,
            toc.max_level
        );
    }

    let site = matches
        .get_one::<String>("site")
        .context("site is required")?
        .to_owned();

    let ctx = Context {
        content_dir: content_dir.to_owned(),
        out_dir: out_dir.to_owned(),
        public_dir: public_dir.to_owned(),
        site,
        toc,
        handlebars: generate_renderer(template_dir)?,
    };

    generate(&ctx)?;
    info!("Site written to {:?}", ctx.out_dir);

    Ok(())
}
