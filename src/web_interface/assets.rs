use mime_guess::from_path;
use rust_embed::RustEmbed;
use warp::{reject, reply, Rejection, Reply};

/// Front-end files baked into the binary at build time.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/public"]
struct StaticAssets;

/// Serve one embedded asset with its guessed content type.
pub fn serve(path: &str) -> Result<warp::reply::Response, Rejection> {
    match StaticAssets::get(path) {
        Some(file) => {
            let mime = from_path(path).first_or_octet_stream();
            let res = reply::with_header(file.data.into_owned(), "Content-Type", mime.as_ref())
                .into_response();
            Ok(res)
        }
        None => Err(reject::not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_known_asset() {
        assert!(serve("index.html").is_ok());
        assert!(serve("styles.css").is_ok());
        assert!(serve("script.js").is_ok());
    }

    #[test]
    fn test_serve_unknown_asset_rejects() {
        assert!(serve("no-such-file.wasm").is_err());
    }
}
