use gloo::net::http::Request;
use thiserror::Error;
use walkbingo_core::ItemPool;

pub(crate) const DEFAULT_ITEMS_URL: &str = "items.txt";

#[derive(Error, Debug)]
pub(crate) enum LoadError {
    #[error("request failed: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("server answered {status} {status_text}")]
    Status { status: u16, status_text: String },
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    Ok(response.text().await?)
}

/// Turns the outcome of the single fetch into a usable pool, never failing.
fn pool_from(url: &str, fetched: Result<String, LoadError>) -> ItemPool {
    match fetched {
        Ok(text) => {
            let pool = ItemPool::parse_or_fallback(&text);
            log::debug!("{} items available", pool.len());
            pool
        }
        Err(err) => {
            log::warn!("could not load items from {:?}: {}, using the built-in items", url, err);
            ItemPool::fallback()
        }
    }
}

/// Fetches the item list once, falling back to the built-in items on any failure.
pub(crate) async fn load_items(url: &str) -> ItemPool {
    pool_from(url, fetch_text(url).await)
}
