//! Recipe content server.
//!
//! Recipes live as MDX documents (YAML front matter plus a Markdown body) in
//! a content directory. Each request runs the same pipeline: read the
//! document, split the front matter, normalize the metadata into a
//! [`Recipe`], render the body, and compose a full HTML page.

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod model;
pub mod pages;
pub mod render;
pub mod routes;
pub mod store;

pub use config::SiteConfig;
pub use error::SiteError;
pub use frontmatter::RecipeMetadata;
pub use model::Recipe;
pub use render::render_markdown;
pub use routes::router;
pub use store::RecipeStore;
