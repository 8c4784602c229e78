use std::path::PathBuf;

use crate::toc::TocOptions;

/// Everything a build needs, resolved from the command line.
#[derive(Debug)]
pub(crate) struct Context {
    pub content_dir: PathBuf,
    pub out_dir: PathBuf,
    pub public_dir: PathBuf,

    pub site: String,
    pub toc: TocOptions,

    pub handlebars: handlebars::Handlebars<'static>,
}
