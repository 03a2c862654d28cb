use log::warn;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::SiteError;
use crate::frontmatter;
use crate::model::{self, Recipe};

/// File extension recognized by the store
const DOCUMENT_EXT: &str = "mdx";

/// Read-only accessor for the recipe documents in a content directory.
///
/// The directory is passed in at construction; there is no ambient global
/// path. The store never mutates documents — the only write it ever performs
/// is lazily creating the content directory itself, so a fresh deployment
/// serves an empty listing instead of an error.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    content_dir: PathBuf,
}

impl RecipeStore {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Enumerate the slugs of all documents in the store.
    ///
    /// Order is directory enumeration order, not sorted. A missing content
    /// directory is created empty and yields no slugs.
    pub async fn list_slugs(&self) -> Result<Vec<String>, SiteError> {
        if !fs::try_exists(&self.content_dir).await? {
            fs::create_dir_all(&self.content_dir).await?;
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.content_dir).await?;
        let mut slugs = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                slugs.push(stem.to_string());
            }
        }
        Ok(slugs)
    }

    /// Read the raw document for `slug`, or `None` if it does not exist.
    ///
    /// Slugs that are not a single path segment are treated as not found —
    /// a request path must not escape the content directory.
    pub async fn read_document(&self, slug: &str) -> Result<Option<String>, SiteError> {
        if !valid_slug(slug) {
            return Ok(None);
        }
        match fs::read_to_string(self.document_path(slug)).await {
            Ok(source) => Ok(Some(source)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Load and normalize the recipe for `slug`.
    pub async fn recipe(&self, slug: &str) -> Result<Option<Recipe>, SiteError> {
        let source = match self.read_document(slug).await? {
            Some(source) => source,
            None => return Ok(None),
        };
        let (metadata, body) = frontmatter::parse(&source);
        Ok(Some(Recipe::from_parts(slug, &metadata, body)))
    }

    /// Load every recipe in the store, in listing order.
    ///
    /// A document that fails to read mid-listing is skipped with a warning
    /// rather than failing the whole page.
    pub async fn all_recipes(&self) -> Result<Vec<Recipe>, SiteError> {
        let mut recipes = Vec::new();
        for slug in self.list_slugs().await? {
            match self.recipe(&slug).await {
                Ok(Some(recipe)) => recipes.push(recipe),
                Ok(None) => {}
                Err(err) => warn!("Skipping recipe '{slug}': {err}"),
            }
        }
        recipes.sort_by(|a, b| model::listing_order(a, b));
        Ok(recipes)
    }

    fn document_path(&self, slug: &str) -> PathBuf {
        self.content_dir.join(format!("{slug}.{DOCUMENT_EXT}"))
    }
}

/// A slug must stay a single path segment.
fn valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}
