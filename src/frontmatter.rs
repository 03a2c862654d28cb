use log::debug;
use serde::Deserialize;
use serde_yaml::Value;

/// Raw front matter of a recipe document.
///
/// Every key is optional and unknown keys are ignored. Scalar fields accept
/// the shape variants found in real documents (for example `servings: 6` and
/// `servings: "6"`), so a single oddly-typed key never poisons the rest of
/// the block. Defaults are applied later, when the metadata is folded into a
/// [`Recipe`](crate::model::Recipe).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipeMetadata {
    pub title: Option<MetaText>,
    pub description: Option<MetaText>,
    #[serde(rename = "cookTime")]
    pub cook_time: Option<MetaText>,
    pub servings: Option<MetaServings>,
    pub difficulty: Option<MetaText>,
    pub image: Option<MetaText>,
    pub tags: Option<MetaTags>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<MetaText>,
}

/// A metadata value expected to be text.
///
/// The catch-all variant absorbs any other YAML shape so deserialization of
/// the surrounding block cannot fail on one malformed key.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MetaText {
    Text(String),
    Other(Value),
}

impl MetaText {
    /// The value as text, if it was text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaText::Text(text) => Some(text),
            MetaText::Other(_) => None,
        }
    }
}

/// A servings count, which documents write as a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MetaServings {
    Count(i64),
    Text(String),
    Other(Value),
}

impl MetaServings {
    /// The servings count, if it is a positive integer.
    pub fn as_positive(&self) -> Option<u32> {
        match self {
            MetaServings::Count(n) if *n > 0 => u32::try_from(*n).ok(),
            MetaServings::Count(_) => None,
            MetaServings::Text(text) => text.trim().parse::<u32>().ok().filter(|n| *n > 0),
            MetaServings::Other(_) => None,
        }
    }
}

/// A tag list, which documents write as a sequence or a single string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MetaTags {
    Many(Vec<Value>),
    One(String),
    Other(Value),
}

impl MetaTags {
    /// The tags as strings; non-string sequence entries are dropped.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            MetaTags::Many(values) => values
                .iter()
                .filter_map(|value| value.as_str().map(str::to_string))
                .collect(),
            MetaTags::One(tag) => vec![tag.clone()],
            MetaTags::Other(_) => Vec::new(),
        }
    }
}

/// Split a document into its front matter block and body.
///
/// The block is delimited by `---` lines at the very top of the document.
/// Returns the raw YAML between the fences (without the fences) and the body
/// after the closing fence. Documents without an opening fence, or with an
/// unterminated block, have no front matter and the whole input is body.
pub fn split(source: &str) -> (Option<&str>, &str) {
    let rest = match source.strip_prefix("---") {
        Some(rest) => rest,
        None => return (None, source),
    };
    // The opening fence must be a line of its own
    let rest = match rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) {
        Some(rest) => rest,
        None => return (None, source),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(block), body);
        }
        offset += line.len();
    }

    // No closing fence: treat the document as having no front matter
    (None, source)
}

/// Parse a document into metadata and body.
///
/// Malformed YAML never fails the pipeline: the error is logged at debug
/// level and the metadata comes back empty, leaving every field to its
/// default.
pub fn parse(source: &str) -> (RecipeMetadata, &str) {
    let (block, body) = split(source);
    let metadata = match block {
        Some(block) if !block.trim().is_empty() => {
            match serde_yaml::from_str::<RecipeMetadata>(block) {
                Ok(metadata) => metadata,
                Err(err) => {
                    debug!("Ignoring malformed front matter: {err}");
                    RecipeMetadata::default()
                }
            }
        }
        _ => RecipeMetadata::default(),
    };
    (metadata, body)
}
