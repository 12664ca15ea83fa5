use crate::apierror::ApiError;
use crate::notion::BlockFetcher;
use crate::renderer::Renderer;
use actix_web::{get, web, HttpResponse, Scope};
use serde::Serialize;

pub const MISSING_PAGE_ID_MESSAGE: &str = "pageId query parameter is required";

#[derive(Serialize)]
struct HtmlResponse {
    html: String,
}

#[get("/{page_id}")]
async fn page_html_by_path(
    page_id: web::Path<String>,
    fetcher: web::Data<BlockFetcher>,
    renderer: web::Data<Renderer>,
) -> Result<HttpResponse, ApiError> {
    render_page(&page_id.into_inner(), &fetcher, &renderer).await
}

#[get("")]
async fn page_html_by_query(
    query: web::Query<Vec<(String, String)>>,
    fetcher: web::Data<BlockFetcher>,
    renderer: web::Data<Renderer>,
) -> Result<HttpResponse, ApiError> {
    let page_id = first_page_id(query.into_inner())
        .ok_or_else(|| ApiError::bad_request(MISSING_PAGE_ID_MESSAGE))?;

    render_page(&page_id, &fetcher, &renderer).await
}

// A repeated `pageId` takes its first value.
fn first_page_id(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "pageId")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

async fn render_page(
    page_id: &str,
    fetcher: &BlockFetcher,
    renderer: &Renderer,
) -> Result<HttpResponse, ApiError> {
    let blocks = fetcher.fetch_all_blocks(page_id).await?;
    let html = renderer.render(&blocks);

    Ok(HttpResponse::Ok().json(HtmlResponse { html }))
}

/// `GET /notion/{pageId}` and `GET /notion?pageId=...`
pub fn notion_routes() -> Scope {
    web::scope("/notion")
        .service(page_html_by_query)
        .service(page_html_by_path)
}

/// `GET /api/notion?pageId=...`, the serverless-style entry point.
pub fn api_routes() -> Scope {
    web::scope("/api/notion").service(page_html_by_query)
}
