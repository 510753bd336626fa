//! API client for the product table
//!
//! All calls go through the explicit [`ApiConfig`] prefix. Responses
//! with a non-2xx status are reported as `Err`; what the caller does
//! with that is its own decision (row removal stays optimistic).

use crate::shared::api_utils::ApiConfig;
use contracts::domain::product::{ProductRecord, RemovalRequest};
use contracts::system::responses::AddProductResponse;
use gloo_net::http::Request;

/// Fetch the current user's tracked products to fill the table.
pub async fn fetch_products(config: &ApiConfig) -> Result<Vec<ProductRecord>, String> {
    let resp = Request::get(&config.api_url("/products"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Tell the backend a row was removed. Only the displayed name is
/// transmitted; the backend resolves the product from it.
pub async fn remove_row(config: &ApiConfig, name: &str) -> Result<(), String> {
    let body = RemovalRequest {
        name: name.to_string(),
    };
    let resp = Request::post(&config.api_url("/remove_row"))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

/// Ask the backend to track a new product URL.
///
/// The route consumes a classic form post (`URL=<value>`), not JSON.
pub async fn add_product(config: &ApiConfig, url: &str) -> Result<AddProductResponse, String> {
    let body = format!("URL={}", urlencoding::encode(url));
    let resp = Request::post(&config.api_url("/add_product"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
