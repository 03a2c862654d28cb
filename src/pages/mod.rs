//! Page composition: full HTML documents for the list, detail, and
//! not-found views, including head metadata for search engines and social
//! sharing.

mod detail;
mod list;
mod not_found;

pub use detail::detail_page;
pub use list::list_page;
pub use not_found::not_found_page;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::SiteConfig;

/// Head metadata for a composed page
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    /// Social-sharing card; pages without one emit only the basic tags
    pub social: Option<SocialCard>,
    /// JSON-LD structured data, already serialized
    pub structured_data: Option<String>,
}

/// Open Graph / Twitter card data
pub struct SocialCard {
    pub og_type: &'static str,
    pub image: Option<String>,
}

/// Wrap page content in a full HTML document with the given head metadata.
fn document(meta: &PageMeta, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(meta))
            body { (content) }
        }
    }
}

fn head(meta: &PageMeta) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            title { (meta.title) }
            meta name="description" content=(meta.description);
            link rel="canonical" href=(meta.canonical_url);
            meta name="viewport" content="width=device-width, initial-scale=1";

            @if let Some(social) = &meta.social {
                // Open Graph
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:url" content=(meta.canonical_url);
                meta property="og:type" content=(social.og_type);
                @if let Some(image) = &social.image {
                    meta property="og:image" content=(image);
                }

                // Twitter Card
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(meta.title);
                meta name="twitter:description" content=(meta.description);
                @if let Some(image) = &social.image {
                    meta name="twitter:image" content=(image);
                }
            }

            @if let Some(data) = &meta.structured_data {
                script type="application/ld+json" { (PreEscaped(data)) }
            }
        }
    }
}

fn footer(config: &SiteConfig) -> Markup {
    html! {
        footer class="bg-white border-t mt-16" {
            div class="max-w-4xl mx-auto px-4 py-8" {
                p class="text-center text-gray-600" {
                    "© " (config.site.name) ". All rights reserved."
                }
            }
        }
    }
}
