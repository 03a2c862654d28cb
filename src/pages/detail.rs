use maud::{html, Markup, PreEscaped};

use super::{document, footer, PageMeta, SocialCard};
use crate::config::SiteConfig;
use crate::model::Recipe;

/// Compose the detail page for one recipe.
///
/// `rendered_body` is the recipe content already rendered to HTML.
pub fn detail_page(config: &SiteConfig, recipe: &Recipe, rendered_body: &str) -> Markup {
    let meta = PageMeta {
        title: format!("{} - {}", recipe.title, config.site.name),
        description: recipe.description.clone(),
        canonical_url: config.canonical_url(&recipe.slug),
        social: Some(SocialCard {
            og_type: "article",
            image: recipe.image.clone(),
        }),
        structured_data: Some(structured_data(config, recipe)),
    };

    document(
        &meta,
        html! {
            div class="min-h-screen bg-gray-50" {
                header class="bg-white shadow-sm" {
                    div class="max-w-4xl mx-auto px-4 py-6" {
                        a href="/" class="text-blue-600 hover:text-blue-700 mb-4 inline-block" {
                            "← Back to all recipes"
                        }
                        h1 class="text-4xl font-bold text-gray-900 mb-2" { (recipe.title) }
                        p class="text-gray-600 text-lg" { (recipe.description) }
                    }
                }

                div class="bg-white border-b" {
                    div class="max-w-4xl mx-auto px-4 py-6" {
                        div class="flex flex-wrap gap-6 text-sm text-gray-600" {
                            div class="flex items-center" {
                                span class="font-medium text-gray-900" { "Cook Time:" }
                                span class="ml-2" { "⏱️ " (recipe.cook_time) }
                            }
                            div class="flex items-center" {
                                span class="font-medium text-gray-900" { "Servings:" }
                                span class="ml-2" { "👥 " (recipe.servings) }
                            }
                            @if let Some(difficulty) = &recipe.difficulty {
                                div class="flex items-center" {
                                    span class="font-medium text-gray-900" { "Difficulty:" }
                                    span class="ml-2" { "📊 " (difficulty) }
                                }
                            }
                        }
                    }
                }

                @if let Some(image) = &recipe.image {
                    div class="max-w-4xl mx-auto px-4 py-8" {
                        div class="aspect-video bg-gray-200 rounded-lg overflow-hidden" {
                            img src=(image) alt=(recipe.title) class="w-full h-full object-cover";
                        }
                    }
                }

                main class="max-w-4xl mx-auto px-4 py-8" {
                    article class="bg-white rounded-lg shadow-sm p-8" {
                        div class="prose prose-lg max-w-none" {
                            (PreEscaped(rendered_body))
                        }
                    }
                }

                (footer(config))
            }
        },
    )
}

/// schema.org Recipe block for search engines.
fn structured_data(config: &SiteConfig, recipe: &Recipe) -> String {
    let mut data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": recipe.title,
        "description": recipe.description,
        "recipeYield": format!("{} servings", recipe.servings),
        "url": config.canonical_url(&recipe.slug),
    });
    if let Some(image) = &recipe.image {
        data["image"] = serde_json::json!(image);
    }
    if !recipe.tags.is_empty() {
        data["keywords"] = serde_json::json!(recipe.tags.join(", "));
    }
    if let Some(published) = &recipe.published_at {
        data["datePublished"] = serde_json::json!(published);
    }

    // A literal "</" inside a value must not terminate the script element
    serde_json::to_string(&data)
        .unwrap_or_default()
        .replace("</", "<\\/")
}
