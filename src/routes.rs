use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use log::error;
use maud::Markup;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::pages;
use crate::render::render_markdown;
use crate::store::RecipeStore;

/// Shared per-process state, cloned per request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub store: RecipeStore,
}

/// Build the site router.
///
/// `GET /` is the listing, `GET /404` the static not-found page, and
/// `GET /{slug}` a recipe detail page. Anything else falls through to the
/// not-found page.
pub fn router(config: SiteConfig) -> Router {
    let store = RecipeStore::new(config.content_dir.clone());
    let state = AppState {
        config: Arc::new(config),
        store,
    };

    Router::new()
        .route("/", get(list_handler))
        .route("/404", get(not_found_handler))
        .route("/{slug}", get(detail_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

async fn list_handler(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    match state.store.all_recipes().await {
        Ok(recipes) => respond(StatusCode::OK, pages::list_page(&state.config, &recipes)),
        Err(err) => {
            error!("Failed to build recipe listing: {err}");
            not_found(&state.config)
        }
    }
}

async fn detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> (StatusCode, Html<String>) {
    match state.store.recipe(&slug).await {
        Ok(Some(recipe)) => {
            let body = render_markdown(&recipe.content);
            respond(
                StatusCode::OK,
                pages::detail_page(&state.config, &recipe, &body),
            )
        }
        Ok(None) => not_found(&state.config),
        Err(err) => {
            // Missing and broken look the same to the visitor
            error!("Failed to load recipe '{slug}': {err}");
            not_found(&state.config)
        }
    }
}

async fn not_found_handler(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    not_found(&state.config)
}

fn not_found(config: &SiteConfig) -> (StatusCode, Html<String>) {
    respond(StatusCode::NOT_FOUND, pages::not_found_page(config))
}

fn respond(status: StatusCode, markup: Markup) -> (StatusCode, Html<String>) {
    (status, Html(markup.into_string()))
}
