use maud::{html, Markup};

use super::{document, footer, PageMeta};
use crate::config::SiteConfig;
use crate::model::Recipe;

/// Compose the listing page for all recipes.
pub fn list_page(config: &SiteConfig, recipes: &[Recipe]) -> Markup {
    let meta = PageMeta {
        title: format!("{} - {}", config.site.name, config.site.tagline),
        description: config.site.description.clone(),
        canonical_url: config.canonical_url(""),
        social: None,
        structured_data: None,
    };

    document(
        &meta,
        html! {
            div class="min-h-screen bg-gray-50" {
                header class="bg-white shadow-sm" {
                    div class="max-w-4xl mx-auto px-4 py-6" {
                        h1 class="text-3xl font-bold text-gray-900" { (config.site.name) }
                        p class="text-gray-600 mt-2" { (config.site.tagline) }
                    }
                }

                main class="max-w-4xl mx-auto px-4 py-8" {
                    div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3" {
                        @for recipe in recipes {
                            (recipe_card(recipe))
                        }
                    }
                }

                (footer(config))
            }
        },
    )
}

fn recipe_card(recipe: &Recipe) -> Markup {
    html! {
        article class="bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow" {
            @if let Some(image) = &recipe.image {
                div class="aspect-video bg-gray-200" {
                    img src=(image) alt=(recipe.title) class="w-full h-full object-cover";
                }
            }
            div class="p-6" {
                h2 class="text-xl font-semibold text-gray-900 mb-2" { (recipe.title) }
                p class="text-gray-600 mb-4 line-clamp-3" { (recipe.description) }
                div class="flex items-center justify-between text-sm text-gray-500 mb-4" {
                    span { "⏱️ " (recipe.cook_time) }
                    span { "👥 Serves " (recipe.servings) }
                }
                a href={ "/" (recipe.slug) } class="inline-block bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition-colors" {
                    "View Recipe"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter;

    fn sample_recipe(source: &str, slug: &str) -> Recipe {
        let (metadata, body) = frontmatter::parse(source);
        Recipe::from_parts(slug, &metadata, body)
    }

    #[test]
    fn test_list_page_shows_each_recipe() {
        let config = SiteConfig::default();
        let recipes = vec![
            sample_recipe("---\ntitle: Garlic Chicken\n---\nbody", "garlic-chicken"),
            sample_recipe("---\ntitle: Apple Chicken\n---\nbody", "apple-chicken"),
        ];

        let html = list_page(&config, &recipes).into_string();
        assert!(html.contains("Garlic Chicken"));
        assert!(html.contains("Apple Chicken"));
        assert!(html.contains("href=\"/garlic-chicken\""));
        assert!(html.contains("View Recipe"));
    }

    #[test]
    fn test_list_page_escapes_titles() {
        let config = SiteConfig::default();
        let recipes = vec![sample_recipe(
            "---\ntitle: \"Chicken <&> Waffles\"\n---\nbody",
            "chicken-waffles",
        )];

        let html = list_page(&config, &recipes).into_string();
        assert!(html.contains("Chicken &lt;&amp;&gt; Waffles"));
    }

    #[test]
    fn test_empty_listing_still_renders_chrome() {
        let config = SiteConfig::default();
        let html = list_page(&config, &[]).into_string();
        assert!(html.contains(&config.site.name));
        assert!(html.contains("All rights reserved."));
    }
}
