use async_trait::async_trait;

use super::Client;
use crate::error::AppError;
use crate::models::{
    AssignedReview, AuthResponse, Journal, LoginRequest, Researcher, SignUpRequest,
};

#[async_trait]
pub trait UserApi {
    /// `POST /users/login` — 성공 시 프로필과 토큰을 돌려줍니다.
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, AppError>;

    /// `POST /users` — 회원가입. 생성된 사용자를 돌려줍니다.
    async fn sign_up(&self, req: &SignUpRequest) -> Result<Researcher, AppError>;

    async fn user(&self, id: i64) -> Result<Researcher, AppError>;

    async fn users(&self, limit: u32) -> Result<Vec<Researcher>, AppError>;

    async fn user_journals(&self, user_id: i64) -> Result<Vec<Journal>, AppError>;

    async fn user_reviews(&self, user_id: i64) -> Result<Vec<AssignedReview>, AppError>;
}

#[async_trait]
impl UserApi for Client {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, AppError> {
        // 로그인 자체는 인증 없이 호출되는 유일한 쓰기 요청입니다.
        let key = uuid::Uuid::now_v7().to_string();
        self.post_json("/users/login", req, &key).await
    }

    async fn sign_up(&self, req: &SignUpRequest) -> Result<Researcher, AppError> {
        let key = uuid::Uuid::now_v7().to_string();
        self.post_json("/users", req, &key).await
    }

    async fn user(&self, id: i64) -> Result<Researcher, AppError> {
        self.get_json(&format!("/users/{id}")).await
    }

    async fn users(&self, limit: u32) -> Result<Vec<Researcher>, AppError> {
        self.get_json(&format!("/users?limit={limit}")).await
    }

    async fn user_journals(&self, user_id: i64) -> Result<Vec<Journal>, AppError> {
        self.get_json(&format!("/users/{user_id}/journals")).await
    }

    async fn user_reviews(&self, user_id: i64) -> Result<Vec<AssignedReview>, AppError> {
        self.get_json(&format!("/users/{user_id}/reviews")).await
    }
}
