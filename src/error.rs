//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - 서버 응답 상태 코드 → 에러 variant 매핑

use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

// #[derive(Debug, Error)]: 두 가지 derive 매크로를 적용합니다.
// - Debug: 디버깅용 출력 ({:?})
// - Error (thiserror): std::error::Error 트레이트를 자동 구현.
//   #[error("...")] 어트리뷰트로 Display 트레이트(사람이 읽을 에러 메시지)도 자동 생성합니다.

/// 클라이언트에서 발생할 수 있는 모든 에러 종류
///
/// 에러 분류 (각 뷰가 자기 에러를 소유하고 직접 표시합니다):
/// - 인증 부재: 로그인 페이지로 안내 (`NotAuthenticated`)
/// - 주 리소스 요청 실패: 뷰 단위 에러 상태로 전환
/// - 부차 리소스(팬아웃) 실패: 로그만 남기고 빈 데이터로 대체
/// - 폼 검증 실패: 요청을 보내기 전에 차단 (`Validation`)
#[derive(Debug, Error)]
pub enum AppError {
    /// 저장된 세션이 없음 — 보호된 페이지 접근 차단, 로그인으로 안내
    #[error("not authenticated: run `science login` first")]
    NotAuthenticated,

    /// 서버가 토큰을 거부함 (HTTP 401)
    /// 만료된 토큰은 요청이 실패하고 나서야 발견됩니다.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("resource not found")]
    NotFound,

    /// 잘못된 요청 (HTTP 400)
    /// String을 포함하여 서버가 보낸 구체적인 메시지를 전달합니다.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 그 외 서버 에러 응답 (상태 코드와 본문 메시지)
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 네트워크/전송 계층 오류
    /// #[from]: reqwest::Error → AppError::Network 자동 변환.
    /// 이를 통해 reqwest 호출에 `?` 연산자를 그대로 쓸 수 있습니다.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 세션 파일 입출력 오류
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// 세션 파일 직렬화/역직렬화 오류
    #[error("session data error: {0}")]
    SessionData(#[from] serde_json::Error),

    /// 요청을 보내기 전에 걸러낸 폼 검증 실패
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// HTTP 상태 코드와 응답 본문 메시지를 에러 variant로 매핑합니다.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => AppError::BadRequest(message),
            401 => AppError::Unauthorized(message),
            404 => AppError::NotFound,
            _ => AppError::Api { status, message },
        }
    }
}
