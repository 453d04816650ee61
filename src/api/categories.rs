//! Category Endpoints

use crate::config::Config;
use crate::models::Category;
use super::{read_json, ApiError};

/// `GET /api/categories`
pub async fn list_categories(config: &Config) -> Result<Vec<Category>, ApiError> {
    let url = config.url("/api/categories");
    log::debug!("GET {}", url);
    let resp = reqwest::Client::new().get(&url).send().await?;
    read_json(resp).await
}
