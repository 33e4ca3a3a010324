//! # 서비스 모듈
//!
//! 특정 뷰에 속하지 않는 순수 도우미 함수들을 담습니다.
//! - `format`: 서버가 내려주는 날짜 문자열의 표시 형식 변환

pub mod format;
