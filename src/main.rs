use log::info;
use tokio::net::TcpListener;

use recipe_site::{routes, SiteConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SiteConfig::load()?;
    let addr = config.bind_addr();
    info!(
        "Serving recipes from {} on http://{addr}",
        config.content_dir.display()
    );

    let app = routes::router(config);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
