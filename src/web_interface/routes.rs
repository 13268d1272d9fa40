use std::sync::Arc;

use log::error;
use serde::Deserialize;
use warp::{http::StatusCode, reply, Filter, Rejection, Reply};

use super::{assets, ApiError};
use crate::encoding::format::QrFormat;
use crate::error_handling::types::StoreError;
use crate::generation::generator::Generator;
use crate::storage::store_trait::ArtifactStore;
use crate::validation::validate_url;

/// Request body for the generation endpoint.
#[derive(Deserialize)]
pub struct GenerateRequest {
    pub url: Option<String>,
}

/// POST /api/generate-qr
pub fn generate_route(
    generator: Arc<Generator>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "generate-qr")
        .and(warp::post())
        .and(warp::body::content_length_limit(16 * 1024))
        .and(warp::body::json())
        .and_then(move |request: GenerateRequest| {
            let generator = generator.clone();
            async move {
                let raw = request.url.unwrap_or_default();
                if let Err(e) = validate_url(&raw) {
                    let res = reply::with_status(
                        reply::json(&ApiError {
                            error: e.to_string(),
                        }),
                        StatusCode::BAD_REQUEST,
                    )
                    .into_response();
                    return Ok::<_, Rejection>(res);
                }

                match generator.generate(&raw).await {
                    Ok(response) => {
                        let res = reply::with_status(reply::json(&response), StatusCode::OK)
                            .into_response();
                        Ok::<_, Rejection>(res)
                    }
                    Err(e) => {
                        error!("Generation failed for {}: {}", raw, e);
                        let res = reply::with_status(
                            reply::json(&ApiError {
                                error: "Internal server error".to_string(),
                            }),
                            StatusCode::INTERNAL_SERVER_ERROR,
                        )
                        .into_response();
                        Ok::<_, Rejection>(res)
                    }
                }
            }
        })
}

/// GET /downloads/:id
pub fn download_route(
    store: Arc<dyn ArtifactStore>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("downloads" / String)
        .and(warp::get())
        .and_then(move |id: String| {
            let store = store.clone();
            async move {
                match store.get(&id) {
                    Ok(bytes) => {
                        let content_type = id
                            .rsplit('.')
                            .next()
                            .and_then(QrFormat::from_extension)
                            .map(|f| f.content_type())
                            .unwrap_or("application/octet-stream");
                        let res = reply::with_status(
                            reply::with_header(
                                reply::with_header(bytes, "Content-Type", content_type),
                                "Content-Disposition",
                                format!("attachment; filename=\"{}\"", id),
                            ),
                            StatusCode::OK,
                        )
                        .into_response();
                        Ok::<_, Rejection>(res)
                    }
                    Err(StoreError::NotFound(_)) => {
                        let res = reply::with_status(
                            reply::json(&ApiError {
                                error: "File not found".to_string(),
                            }),
                            StatusCode::NOT_FOUND,
                        )
                        .into_response();
                        Ok::<_, Rejection>(res)
                    }
                    Err(e) => {
                        error!("Failed to read artifact {}: {}", id, e);
                        let res = reply::with_status(
                            reply::json(&ApiError {
                                error: "Internal server error".to_string(),
                            }),
                            StatusCode::INTERNAL_SERVER_ERROR,
                        )
                        .into_response();
                        Ok::<_, Rejection>(res)
                    }
                }
            }
        })
}

/// GET / -> embedded front-end page
pub fn index_route() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .and_then(|| async move { assets::serve("index.html") })
}

/// GET /<asset> -> other embedded front-end files
pub fn static_route() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::get()
        .and(warp::path::tail())
        .and_then(|tail: warp::path::Tail| async move { assets::serve(tail.as_str()) })
}
