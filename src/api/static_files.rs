use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Landing page with the submission form
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
