use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

/// GET /static/{*path} - files embedded from `static/` at build time
pub async fn asset(Path(path): Path<String>) -> Response {
    let Some(content) = Assets::get(&path) else {
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    ([(header::CONTENT_TYPE, mime.to_string())], Body::from(content.data)).into_response()
}
