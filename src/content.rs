use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::{debug, info};
use serde::Serialize;

use crate::metadata::{split_front_matter, BlogPostData};

const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

#[derive(Serialize, Debug, Clone)]
pub(crate) struct CollectionEntry<T> {
    /// Path relative to the collection base, without extension, `/`-separated.
    pub id: String,
    pub data: T,
    #[serde(skip_serializing)]
    pub body: String,
}

pub(crate) type BlogEntry = CollectionEntry<BlogPostData>;
pub(crate) type AboutEntry = CollectionEntry<()>;

pub(crate) fn load_blog(content_dir: &Path) -> anyhow::Result<Vec<BlogEntry>> {
    load_collection(&content_dir.join("blog"), BlogPostData::from_front_matter)
}

pub(crate) fn load_about(content_dir: &Path) -> anyhow::Result<Vec<AboutEntry>> {
    load_collection(&content_dir.join("about"), |_| Ok(()))
}

/// Reads every Markdown/MDX file below `base`, ordered by id.
fn load_collection<T, F>(base: &Path, parse: F) -> anyhow::Result<Vec<CollectionEntry<T>>>
where
    F: Fn(Option<&str>) -> anyhow::Result<T>,
{
    if !base.is_dir() {
        info!("Collection directory({base:?}) does not exist. ignoring...");
        return Ok(vec![]);
    }

    let mut entries = vec![];
    let mut q = VecDeque::new();
    q.push_back(PathBuf::new());
    while let Some(path) = q.pop_front() {
        for entry in std::fs::read_dir(base.join(&path))? {
            let entry = entry?;
            let meta = entry.metadata()?;
            let relative = path.join(entry.file_name());

            if meta.is_dir() {
                q.push_back(relative);
            } else if meta.is_file() && is_content_file(&relative) {
                debug!("Loading {relative:?}");
                let content = std::fs::read_to_string(base.join(&relative))
                    .with_context(|| format!("while reading {relative:?}"))?;
                let (front_matter, body) = split_front_matter(&content)
                    .with_context(|| format!("while parsing front matter of {relative:?}"))?;
                let data = parse(front_matter.as_deref())
                    .with_context(|| format!("while validating front matter of {relative:?}"))?;
                entries.push(CollectionEntry {
                    id: entry_id(&relative),
                    data,
                    body,
                });
            } else {
                debug!("Skipping {relative:?}");
            }
        }
    }

    entries.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(entries)
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

fn entry_id(relative: &Path) -> String {
    relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
