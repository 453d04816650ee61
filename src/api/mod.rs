//! Backend API Client
//!
//! Thin wrappers over the notes REST endpoints, organized by resource.

mod error;
mod notes;
mod categories;

use reqwest::Response;
use serde::de::DeserializeOwned;

pub use error::ApiError;
use error::ErrorBody;
pub use notes::*;
pub use categories::*;

/// Turn a non-success response into [`ApiError::Status`]
async fn check(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.json::<ErrorBody>().await.ok();
    Err(ApiError::from_status(status.as_u16(), body))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = check(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
