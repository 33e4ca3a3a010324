//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 클라이언트 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `SCIENCE_SERVER_URL`: 출판 API 서버의 기본 URL
//! - `SCIENCE_SESSION_PATH`: 로그인 세션이 저장되는 파일 경로

// std::env: Rust 표준 라이브러리의 환경변수 모듈
use std::env;

// #[derive(...)]: 자동으로 트레이트 구현을 생성하는 **derive 매크로**
// - Debug: {:?} 포맷으로 출력 가능 (디버깅용 문자열 표현)
// - Clone: .clone() 메서드로 값을 복제 가능
#[derive(Debug, Clone)]
/// 애플리케이션 전체 설정을 담는 구조체
///
/// 프로그램 시작 시 환경변수에서 한 번 읽어온 후,
/// 애플리케이션 전체에서 공유됩니다.
pub struct Config {
    /// 출판 API 서버의 기본 URL (예: "http://localhost:3000")
    pub server_url: String,
    /// 세션 파일 경로. 브라우저 클라이언트의 localStorage에 해당합니다.
    pub session_path: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `SCIENCE_SERVER_URL`은 필수이며, 없으면 에러가 발생합니다.
    /// 세션 경로는 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            // env::var("KEY"): 환경변수를 읽습니다.
            // `?`를 사용해 변수가 없으면 즉시 에러를 반환합니다.
            server_url: env::var("SCIENCE_SERVER_URL")?, // 필수: 없으면 에러

            // unwrap_or_else(|_| ...): Result가 Err일 때 기본값을 사용합니다.
            session_path: env::var("SCIENCE_SESSION_PATH")
                .unwrap_or_else(|_| "data/session.json".to_string()),
        })
    }
}
