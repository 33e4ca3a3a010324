use async_trait::async_trait;

use super::Client;
use crate::error::AppError;
use crate::models::{AssignedReview, Review, ReviewRequest, ReviewResult, ReviewSubmission};

#[async_trait]
pub trait ReviewApi {
    async fn review(&self, id: i64) -> Result<Review, AppError>;

    async fn reviews_for_paper(&self, paper_id: i64) -> Result<Vec<Review>, AppError>;

    /// `GET /reviews/pending` — 내가 요청했고 아직 끝나지 않은 리뷰 라운드
    async fn pending_reviews(&self) -> Result<Vec<Review>, AppError>;

    /// `GET /reviews/my-reviews` — 내게 배정된 리뷰
    async fn my_reviews(&self) -> Result<Vec<AssignedReview>, AppError>;

    async fn request_review(
        &self,
        req: &ReviewRequest,
        idempotency_key: &str,
    ) -> Result<(), AppError>;

    async fn submit_review(
        &self,
        review_id: i64,
        req: &ReviewSubmission,
        idempotency_key: &str,
    ) -> Result<(), AppError>;

    /// `GET /review-results/review/:reviewId` — 제출된 평가 목록.
    /// 아직 모든 리뷰어가 제출하지 않은 리뷰에는 빈 목록이 내려옵니다.
    async fn review_results(&self, review_id: i64) -> Result<Vec<ReviewResult>, AppError>;
}

#[async_trait]
impl ReviewApi for Client {
    async fn review(&self, id: i64) -> Result<Review, AppError> {
        self.get_json(&format!("/reviews/{id}")).await
    }

    async fn reviews_for_paper(&self, paper_id: i64) -> Result<Vec<Review>, AppError> {
        self.get_json(&format!("/reviews/paper/{paper_id}")).await
    }

    async fn pending_reviews(&self) -> Result<Vec<Review>, AppError> {
        self.get_json("/reviews/pending").await
    }

    async fn my_reviews(&self) -> Result<Vec<AssignedReview>, AppError> {
        self.get_json("/reviews/my-reviews").await
    }

    async fn request_review(
        &self,
        req: &ReviewRequest,
        idempotency_key: &str,
    ) -> Result<(), AppError> {
        self.post_unit("/reviews/request", req, idempotency_key).await
    }

    async fn submit_review(
        &self,
        review_id: i64,
        req: &ReviewSubmission,
        idempotency_key: &str,
    ) -> Result<(), AppError> {
        self.post_unit(&format!("/reviews/{review_id}/submit"), req, idempotency_key)
            .await
    }

    async fn review_results(&self, review_id: i64) -> Result<Vec<ReviewResult>, AppError> {
        self.get_json(&format!("/review-results/review/{review_id}"))
            .await
    }
}
