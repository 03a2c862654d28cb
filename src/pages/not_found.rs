use maud::{html, Markup};

use super::{document, PageMeta};
use crate::config::SiteConfig;

/// Compose the not-found page.
///
/// Served for unknown slugs, for any request that faults mid-pipeline, and
/// as the static `/404` page.
pub fn not_found_page(config: &SiteConfig) -> Markup {
    let meta = PageMeta {
        title: format!("Page Not Found - {}", config.site.name),
        description: "The page you're looking for doesn't exist.".to_string(),
        canonical_url: config.canonical_url("404"),
        social: None,
        structured_data: None,
    };

    document(
        &meta,
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center px-4" {
                div class="max-w-md w-full text-center" {
                    div class="mb-8" {
                        h1 class="text-9xl font-bold text-gray-300 mb-4" { "404" }
                        h2 class="text-2xl font-semibold text-gray-900 mb-2" { "Recipe Not Found" }
                        p class="text-gray-600 mb-8" {
                            "Looks like this recipe got lost in the kitchen! Let's get you back to our delicious collection."
                        }
                    }

                    div class="space-y-4" {
                        a href="/" class="inline-block bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700 transition-colors font-medium" {
                            "Browse All Recipes"
                        }

                        div class="text-sm text-gray-500" {
                            p { "Looking for something specific?" }
                            p { "Try browsing from our homepage" }
                        }
                    }
                }
            }
        },
    )
}
