//! Static asset responses.

use poem::{
    Body, Request, Response,
    http::{HeaderMap, StatusCode, header},
};

use crate::assets::AssetSource;

const INDEX_FILE: &str = "index.html";

/// Maps a request path to a key in an asset tree.
///
/// Directory paths resolve to their `index.html`. Paths that try to climb
/// out of the tree resolve to nothing.
fn asset_key(path: &str) -> Option<String> {
    let relative = path.trim_start_matches('/');

    if relative
        .split('/')
        .any(|segment| segment == ".." || segment == ".")
    {
        return None;
    }

    if relative.is_empty() {
        Some(INDEX_FILE.to_string())
    } else if relative.ends_with('/') {
        Some(format!("{relative}{INDEX_FILE}"))
    } else {
        Some(relative.to_string())
    }
}

fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate == etag)
}

fn not_found() -> Response {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .content_type("text/plain; charset=utf-8")
        .body("404 page not found")
}

/// Serves `path` out of `source`.
pub(crate) fn serve(source: Option<&dyn AssetSource>, path: &str, req: &Request) -> Response {
    let Some(key) = asset_key(path) else {
        return not_found();
    };

    let Some(asset) = source.and_then(|source| source.get(&key)) else {
        return not_found();
    };

    if let Some(etag) = &asset.etag
        && etag_matches(req.headers(), etag)
    {
        return Response::builder()
            .status(StatusCode::NOT_MODIFIED)
            .header(header::ETAG, etag.as_str())
            .finish();
    }

    let mime = mime_guess::from_path(&key).first_or_octet_stream();
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .content_type(mime.as_ref());
    if let Some(etag) = &asset.etag {
        builder = builder.header(header::ETAG, etag.as_str());
    }

    builder.body(Body::from(asset.data))
}
