use crate::domain::a002_integration::ui::list::IntegrationListPage;
use crate::shared::error::ApiError;
use crate::shared::http::HttpClient;
use crate::shared::list_page::ItemListPage;
use contracts::domain::a002_integration::aggregate::IntegrationDto;

/// Create (POST to the collection) or update (PUT to the record).
pub async fn save_form<H: HttpClient>(
    http: &H,
    page: &IntegrationListPage,
    dto: &IntegrationDto,
) -> Result<(), ApiError> {
    let body = serde_json::to_value(dto).map_err(|e| ApiError::Encode(e.to_string()))?;
    match dto.id {
        Some(id) => http.put_json(&page.single_item_url(id), &body).await,
        None => http.post_json(&page.items_url(), &body).await.map(|_| ()),
    }
}
