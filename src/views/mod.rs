//! # 뷰(View) 모듈
//!
//! 한 화면이 보여주는 내용을 "마지막으로 settle된 요청 결과의 순수 함수"로
//! 다루는 계층입니다. 각 뷰는 자신이 표시할 원격 리소스를 `FetchState`로
//! 소유하고, `load`로 채운 뒤 `render`로 텍스트를 만듭니다.
//!
//! - `state`: FetchState / ViewContext / 제출 가드 등 공용 골격
//! - `lookup`: 저널 이름 읽기 캐시(디렉터리)
//! - `auth`: 로그인 / 회원가입 / 로그아웃 플로우
//! - `home`: 내 저널 · 내 논문 · 배정 리뷰 세 섹션의 홈 화면
//! - `journal`: 저널 상세와 에디터/리뷰어 배정
//! - `issue`: 이슈 상세 (소속 저널 종속 체인)
//! - `paper`: 논문 상세 (리뷰와 제출된 평가까지)
//! - `profile`: 연구자 프로필
//! - `review`: 리뷰 제출 / 요청 / 목록
//! - `forms`: 새 저널 · 새 이슈 · 새 논문 생성 폼

pub mod auth;
pub mod forms;
pub mod home;
pub mod issue;
pub mod journal;
pub mod lookup;
pub mod paper;
pub mod profile;
pub mod review;
pub mod state;

pub use state::{FetchState, SubmitGuard, ViewContext};
