use async_trait::async_trait;

use super::Client;
use crate::error::AppError;
use crate::models::{Issue, NewIssue};

#[async_trait]
pub trait IssueApi {
    /// `GET /issues/:id` — 수록 논문이 포함된 이슈 상세
    async fn issue(&self, id: i64) -> Result<Issue, AppError>;

    async fn create_issue(&self, req: &NewIssue, idempotency_key: &str) -> Result<(), AppError>;
}

#[async_trait]
impl IssueApi for Client {
    async fn issue(&self, id: i64) -> Result<Issue, AppError> {
        self.get_json(&format!("/issues/{id}")).await
    }

    async fn create_issue(&self, req: &NewIssue, idempotency_key: &str) -> Result<(), AppError> {
        self.post_unit("/issues", req, idempotency_key).await
    }
}
