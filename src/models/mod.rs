//! # 데이터 모델 모듈
//!
//! 서버 JSON 응답을 그대로 투영하는 구조체(struct)들을 정의합니다.
//! 클라이언트는 이 데이터를 소유하지 않습니다 — 페이지 수명 동안만 유지되는
//! 읽기 전용 투영이며, 렌더링 전의 선택적 필드 존재 확인 외에는
//! 어떤 불변식도 강제하지 않습니다.
//!
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `journal`: 저널(Journal)과 생성/배정 요청 구조체
//! - `issue`: 이슈(Issue, 저널의 호) 관련 구조체
//! - `paper`: 논문(Paper) 관련 구조체
//! - `review`: 리뷰(Review)와 리뷰 결과(ReviewResult) 관련 구조체
//! - `user`: 연구자(Researcher)와 인증 관련 구조체
//!
//! `pub use X::*;`는 하위 모듈의 모든 공개 항목을
//! 이 모듈에서 바로 접근할 수 있게 재공개(re-export)합니다.
//! 예: `crate::models::paper::Paper` 대신 `crate::models::Paper`로 접근 가능

pub mod issue;
pub mod journal;
pub mod paper;
pub mod review;
pub mod user;

pub use issue::*;
pub use journal::*;
pub use paper::*;
pub use review::*;
pub use user::*;

use serde::Deserialize;

/// 서버가 `{ "data": [...] }` 형태로 감싸 보내는 페이지네이션 응답
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
}
