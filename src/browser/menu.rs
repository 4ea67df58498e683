//! Menu Loading
//!
//! Single GET of the static menu file.

use gloo_net::http::Request;

use crate::config::MENU_URL;
use crate::error::MenuLoadError;
use crate::models::MenuItem;

/// Fetch and parse `menu.json`
pub async fn fetch_menu() -> Result<Vec<MenuItem>, MenuLoadError> {
    let response = Request::get(MENU_URL)
        .send()
        .await
        .map_err(|e| MenuLoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(MenuLoadError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| MenuLoadError::Network(e.to_string()))?;

    parse_menu(&body)
}

/// Parse the menu file body
pub fn parse_menu(body: &str) -> Result<Vec<MenuItem>, MenuLoadError> {
    serde_json::from_str(body).map_err(|e| MenuLoadError::Parse(e.to_string()))
}
