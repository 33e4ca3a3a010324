use async_trait::async_trait;

use super::Client;
use crate::error::AppError;
use crate::models::{Journal, NewJournal, Paginated, Researcher, RoleAssignment};

#[async_trait]
pub trait JournalApi {
    /// `GET /journals?limit=N` — 서버는 `{ data: [...] }`로 감싸 내려줍니다.
    async fn journals(&self, limit: u32) -> Result<Vec<Journal>, AppError>;

    /// `GET /journals/:id` — 이슈 목록이 포함된 저널 상세
    async fn journal(&self, id: i64) -> Result<Journal, AppError>;

    async fn create_journal(
        &self,
        req: &NewJournal,
        idempotency_key: &str,
    ) -> Result<Journal, AppError>;

    async fn editors(&self, journal_id: i64) -> Result<Vec<Researcher>, AppError>;

    async fn reviewers(&self, journal_id: i64) -> Result<Vec<Researcher>, AppError>;

    async fn add_editor(
        &self,
        req: &RoleAssignment,
        idempotency_key: &str,
    ) -> Result<(), AppError>;

    async fn add_reviewer(
        &self,
        req: &RoleAssignment,
        idempotency_key: &str,
    ) -> Result<(), AppError>;
}

#[async_trait]
impl JournalApi for Client {
    async fn journals(&self, limit: u32) -> Result<Vec<Journal>, AppError> {
        let page: Paginated<Journal> = self.get_json(&format!("/journals?limit={limit}")).await?;
        Ok(page.data)
    }

    async fn journal(&self, id: i64) -> Result<Journal, AppError> {
        self.get_json(&format!("/journals/{id}")).await
    }

    async fn create_journal(
        &self,
        req: &NewJournal,
        idempotency_key: &str,
    ) -> Result<Journal, AppError> {
        self.post_json("/journals", req, idempotency_key).await
    }

    async fn editors(&self, journal_id: i64) -> Result<Vec<Researcher>, AppError> {
        self.get_json(&format!("/journals/{journal_id}/editors")).await
    }

    async fn reviewers(&self, journal_id: i64) -> Result<Vec<Researcher>, AppError> {
        self.get_json(&format!("/journals/{journal_id}/reviewers")).await
    }

    async fn add_editor(
        &self,
        req: &RoleAssignment,
        idempotency_key: &str,
    ) -> Result<(), AppError> {
        self.post_unit("/journals/editors", req, idempotency_key).await
    }

    async fn add_reviewer(
        &self,
        req: &RoleAssignment,
        idempotency_key: &str,
    ) -> Result<(), AppError> {
        self.post_unit("/journals/reviewers", req, idempotency_key).await
    }
}
