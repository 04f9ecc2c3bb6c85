//! Browser-facing I/O: catalog fetch and page navigation

use calendar_core::{Catalog, CatalogError};
use gloo_net::http::Request;

/// Fetch and decode the catalog. Any failure is fatal for the session;
/// there is no fallback catalog and no retry.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    tracing::info!("Loading catalog from {}", url);
    let resp = Request::get(url).send().await.map_err(|e| {
        tracing::error!("Catalog request failed: {}", e);
        CatalogError::Transport(e.to_string())
    })?;

    check_status(resp.ok(), resp.status(), &resp.status_text())?;

    let body = resp
        .text()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;
    let catalog = Catalog::from_json(&body)?;
    tracing::info!("Loaded {} games", catalog.len());
    Ok(catalog)
}

/// Turn a non-success response into `CatalogError::Http`
pub fn check_status(ok: bool, status: u16, status_text: &str) -> Result<(), CatalogError> {
    if ok {
        return Ok(());
    }
    tracing::error!("Catalog request returned HTTP {}", status);
    Err(CatalogError::Http { status, status_text: status_text.to_string() })
}

/// Open an external page in a new tab. Popup blockers are not an error.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        tracing::warn!("Failed to open {}: {:?}", url, e);
    }
}

/// Full page reload, the only recovery from a failed catalog load
pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        tracing::error!("Reload failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status_passes() {
        assert_eq!(check_status(true, 200, "OK"), Ok(()));
    }

    #[test]
    fn test_not_found_is_fatal_http_error() {
        let err = check_status(false, 404, "Not Found").unwrap_err();
        assert_eq!(
            err,
            CatalogError::Http { status: 404, status_text: "Not Found".to_string() }
        );
    }
}
