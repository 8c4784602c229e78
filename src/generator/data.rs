use serde::Serialize;
use serde_json::{Map, Value};

use crate::{content::BlogEntry, i18n::Locale, metadata::BlogPostData, toc::TocNode};

#[derive(Serialize, Debug)]
pub(crate) struct LanguageLink {
    pub locale: Locale,
    pub name: &'static str,
    pub current: bool,
}

/// Fields shared by every page.
#[derive(Serialize, Debug)]
pub(crate) struct PageData {
    pub locale: Locale,
    pub path: String,
    pub site: String,
    pub t: Map<String, Value>,
    pub languages: Vec<LanguageLink>,
}

#[derive(Serialize, Debug)]
pub(crate) struct ListPageData<'a> {
    pub page: PageData,
    pub posts: &'a [BlogEntry],
}

#[derive(Serialize, Debug)]
pub(crate) struct ArticlePageData<'a> {
    pub page: PageData,
    pub id: &'a str,
    pub meta: &'a BlogPostData,
    pub body: String,
    pub toc: &'a [TocNode],
    pub toc_html: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct AboutPageData {
    pub page: PageData,
    pub body: String,
}
