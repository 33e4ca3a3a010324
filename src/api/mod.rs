//! # API 접근 계층 (Remote Access Layer)
//!
//! 외부 출판 API 서버와 HTTP/JSON으로 상호작용하는 모듈입니다.
//! 뷰(views/)에서 이 모듈의 트레이트 메서드를 호출하여 원격 데이터를 가져옵니다.
//!
//! 각 하위 모듈은 리소스 계열별 트레이트와 `Client` 구현을 담습니다:
//! - `users`: 로그인/회원가입과 사용자 조회
//! - `journals`: 저널 조회/생성과 에디터·리뷰어 배정
//! - `issues`: 이슈 조회/생성
//! - `papers`: 논문 조회/제출
//! - `reviews`: 리뷰, 리뷰 라운드 요청, 리뷰 결과 조회
//!
//! 트레이트로 쪼개둔 이유: 뷰 로직을 네트워크 없이 가짜 구현으로
//! 시험할 수 있게 하는 이음새(seam)입니다.

pub mod issues;
pub mod journals;
pub mod papers;
pub mod reviews;
pub mod users;

pub use issues::IssueApi;
pub use journals::JournalApi;
pub use papers::PaperApi;
pub use reviews::ReviewApi;
pub use users::UserApi;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// 멱등성 키를 실어 보내는 요청 헤더 이름
///
/// 모든 쓰기 요청은 제출 시도마다 새로 생성된 키를 첨부하여,
/// 중복 클릭/재전송이 서버에서 한 번의 효과로 수렴할 수 있게 합니다.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// 출판 API 서버에 대한 HTTP 클라이언트
///
/// 토큰이 있으면 모든 요청에 `Authorization: Bearer <token>`을 첨부합니다.
/// 재시도와 타임아웃은 없습니다 — 실패는 그 요청에 대해 종결이며,
/// 사용자가 다시 시도해야 합니다.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.into()),
            token: None,
        }
    }

    /// 로그인 후 세션 토큰을 첨부한 클라이언트를 만듭니다.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::new(base_url)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        tracing::debug!(path, "GET");
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        idempotency_key: &str,
    ) -> Result<T, AppError> {
        tracing::debug!(path, idempotency_key, "POST");
        let response = self
            .authorize(self.http.post(self.url(path)))
            .header(IDEMPOTENCY_HEADER, idempotency_key)
            .json(body)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// 응답 본문을 쓰지 않는 쓰기 요청 (배정, 제출 등)
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        idempotency_key: &str,
    ) -> Result<(), AppError> {
        tracing::debug!(path, idempotency_key, "POST");
        let response = self
            .authorize(self.http.post(self.url(path)))
            .header(IDEMPOTENCY_HEADER, idempotency_key)
            .json(body)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// 2xx가 아닌 응답을 에러 variant로 매핑합니다.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::from_status(status.as_u16(), error_message(&body)))
}

/// 에러 본문에서 사람이 읽을 메시지를 추출합니다.
///
/// `{"message": "..."}`와 `{"error": {"message": "..."}}` 두 형태를
/// 모두 받아들이고, JSON이 아니면 본문을 그대로 사용합니다.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value
            .get("message")
            .or_else(|| value.get("error").and_then(|e| e.get("message")))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let client = Client::new("http://localhost:3000///");
        assert_eq!(client.url("/journals/1"), "http://localhost:3000/journals/1");
    }

    #[test]
    fn error_message_reads_flat_shape() {
        assert_eq!(error_message(r#"{"message":"no such paper"}"#), "no such paper");
    }

    #[test]
    fn error_message_reads_nested_shape() {
        assert_eq!(
            error_message(r#"{"error":{"code":"not_found","message":"gone"}}"#),
            "gone"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("service unavailable"), "service unavailable");
    }
}
