use axum::extract::FromRequest;

use crate::error::ErrorServer;

/// `Json` extractor whose rejections are rendered as [`ErrorServer`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ErrorServer))]
pub struct ApiJson<T>(pub T);
