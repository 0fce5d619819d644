use axum::http::{Method, Uri};

use crate::api::errors::ApiError;

/// Any path no route matches
pub async fn path_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Path not found: {}", uri.path()))
}

/// A known path hit with a method it does not serve
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::method_not_allowed(format!("{} not allowed for {}", method, uri.path()))
}
