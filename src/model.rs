use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;

use crate::frontmatter::RecipeMetadata;

/// Cook time used when a document does not declare one
pub const DEFAULT_COOK_TIME: &str = "30 minutes";
/// Servings used when a document does not declare a positive count
pub const DEFAULT_SERVINGS: u32 = 4;

/// A fully-populated recipe
///
/// Built fresh from a document on every request and immutable afterwards.
/// Every field is populated: absent or malformed metadata falls back to the
/// documented default, so rendering never has to handle missing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "cookTime")]
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub content: String,
}

impl Recipe {
    /// Fold parsed metadata and body into a recipe for `slug`.
    ///
    /// Never fails; every absent field takes its default. A missing title is
    /// humanized from the slug by replacing hyphens with spaces.
    pub fn from_parts(slug: &str, metadata: &RecipeMetadata, body: &str) -> Self {
        let text = |value: &Option<crate::frontmatter::MetaText>| {
            value
                .as_ref()
                .and_then(|v| v.as_text())
                .map(str::to_string)
        };

        Recipe {
            slug: slug.to_string(),
            title: text(&metadata.title).unwrap_or_else(|| slug.replace('-', " ")),
            description: text(&metadata.description).unwrap_or_default(),
            cook_time: text(&metadata.cook_time)
                .unwrap_or_else(|| DEFAULT_COOK_TIME.to_string()),
            servings: metadata
                .servings
                .as_ref()
                .and_then(|value| value.as_positive())
                .unwrap_or(DEFAULT_SERVINGS),
            difficulty: text(&metadata.difficulty),
            image: text(&metadata.image),
            tags: metadata
                .tags
                .as_ref()
                .map(|tags| tags.to_strings())
                .unwrap_or_default(),
            published_at: text(&metadata.published_at),
            content: body.to_string(),
        }
    }

    /// Publication date parsed from `published_at`.
    ///
    /// Accepts plain `YYYY-MM-DD` dates and full RFC 3339 timestamps; any
    /// other value counts as undated.
    pub fn published_date(&self) -> Option<NaiveDate> {
        let raw = self.published_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| timestamp.date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }
}

/// Listing order for the home page.
///
/// The order is total: dated recipes come first, newest first, with ties
/// broken by title; undated recipes follow, sorted by title.
pub fn listing_order(a: &Recipe, b: &Recipe) -> Ordering {
    match (a.published_date(), b.published_date()) {
        (Some(date_a), Some(date_b)) => {
            date_b.cmp(&date_a).then_with(|| a.title.cmp(&b.title))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter;

    fn recipe_from(source: &str, slug: &str) -> Recipe {
        let (metadata, body) = frontmatter::parse(source);
        Recipe::from_parts(slug, &metadata, body)
    }

    #[test]
    fn test_defaults_for_empty_metadata() {
        let recipe = recipe_from("Just a body", "garlic-herb-chicken");

        assert_eq!(recipe.title, "garlic herb chicken");
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.cook_time, DEFAULT_COOK_TIME);
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
        assert!(recipe.difficulty.is_none());
        assert!(recipe.image.is_none());
        assert!(recipe.tags.is_empty());
        assert!(recipe.published_at.is_none());
        assert_eq!(recipe.content, "Just a body");
    }

    #[test]
    fn test_each_default_is_independent() {
        // Only cookTime is missing; only cookTime should default.
        let source = "---\ntitle: Garlic Chicken\nservings: 6\n---\nbody";
        let recipe = recipe_from(source, "garlic-chicken");

        assert_eq!(recipe.title, "Garlic Chicken");
        assert_eq!(recipe.servings, 6);
        assert_eq!(recipe.cook_time, DEFAULT_COOK_TIME);
    }

    #[test]
    fn test_non_positive_servings_fall_back() {
        let recipe = recipe_from("---\nservings: 0\n---\nbody", "stew");
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
    }

    #[test]
    fn test_published_date_formats() {
        let dated = recipe_from("---\npublishedAt: \"2024-01-15\"\n---\n", "a");
        assert_eq!(
            dated.published_date(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );

        let timestamped =
            recipe_from("---\npublishedAt: \"2024-01-15T08:30:00Z\"\n---\n", "b");
        assert_eq!(
            timestamped.published_date(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );

        let garbled = recipe_from("---\npublishedAt: someday\n---\n", "c");
        assert_eq!(garbled.published_date(), None);
    }

    #[test]
    fn test_listing_order_dated_before_undated() {
        let newer = recipe_from("---\ntitle: Zesty\npublishedAt: \"2024-02-01\"\n---\n", "z");
        let older = recipe_from("---\ntitle: Aioli\npublishedAt: \"2024-01-01\"\n---\n", "a");
        let undated_a = recipe_from("---\ntitle: Apple Chicken\n---\n", "apple");
        let undated_b = recipe_from("---\ntitle: Basil Chicken\n---\n", "basil");

        let mut recipes = vec![
            undated_b.clone(),
            older.clone(),
            undated_a.clone(),
            newer.clone(),
        ];
        recipes.sort_by(listing_order);

        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Zesty", "Aioli", "Apple Chicken", "Basil Chicken"]);
    }
}
