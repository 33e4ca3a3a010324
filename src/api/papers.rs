use async_trait::async_trait;

use super::Client;
use crate::error::AppError;
use crate::models::{NewPaper, Paginated, Paper};

#[async_trait]
pub trait PaperApi {
    async fn paper(&self, id: i64) -> Result<Paper, AppError>;

    /// `GET /papers/researchers/:userId` — 해당 연구자가 저자인 논문 목록
    async fn papers_by_researcher(&self, user_id: i64) -> Result<Vec<Paper>, AppError>;

    async fn create_paper(&self, req: &NewPaper, idempotency_key: &str) -> Result<(), AppError>;
}

#[async_trait]
impl PaperApi for Client {
    async fn paper(&self, id: i64) -> Result<Paper, AppError> {
        self.get_json(&format!("/papers/{id}")).await
    }

    async fn papers_by_researcher(&self, user_id: i64) -> Result<Vec<Paper>, AppError> {
        let page: Paginated<Paper> = self
            .get_json(&format!("/papers/researchers/{user_id}"))
            .await?;
        Ok(page.data)
    }

    async fn create_paper(&self, req: &NewPaper, idempotency_key: &str) -> Result<(), AppError> {
        self.post_unit("/papers", req, idempotency_key).await
    }
}
