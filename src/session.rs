//! # 세션 모듈
//!
//! 로그인 세션의 저장과 인증 게이트를 담당합니다.
//!
//! 브라우저 클라이언트의 localStorage(`@science.*` 키들)에 해당하는
//! 영속 저장소를 JSON 파일 하나로 구현합니다. 세션은 로그인/회원가입
//! 성공 시 생성되고, 모든 인증 요청에 Bearer 토큰으로 첨부되며,
//! 명시적 로그아웃 시 완전히 삭제됩니다.
//!
//! **세션 가드**: 보호된 페이지는 마운트 시 `SessionStore::require()` 한 번으로
//! 게이트됩니다. 세션이 없으면 내용을 렌더링하지 않고 로그인으로 안내합니다.
//! 토큰의 서명이나 만료는 검증하지 않습니다 — 만료된 토큰은 이후 API 호출이
//! 401로 실패하고 나서야 발견됩니다. 재시도나 갱신(refresh)은 없습니다.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::AuthResponse;

/// 로그인한 사용자를 식별하는 세션 데이터
///
/// 브라우저 클라이언트의 localStorage 세션 필드에 해당합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub institution: Option<String>,
    pub orcid: Option<String>,
    pub token: String,
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Self {
            user_id: auth.user.id,
            name: auth.user.name,
            email: auth.user.email.unwrap_or_default(),
            institution: auth.user.institution,
            orcid: auth.user.orcid,
            token: auth.token,
        }
    }
}

/// 세션 파일을 읽고 쓰는 저장소
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 저장된 세션을 읽습니다. 파일이 없으면 `Ok(None)`을 반환합니다.
    pub fn load(&self) -> Result<Option<Session>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    /// 세션을 파일로 저장합니다. 로그인/회원가입 성공 시에만 호출됩니다.
    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// 로그아웃: 저장된 세션을 완전히 삭제합니다 (localStorage.clear()에 해당).
    pub fn clear(&self) -> Result<(), AppError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// 세션 가드: 저장된 세션이 없으면 `NotAuthenticated`로 접근을 차단합니다.
    ///
    /// 페이지 마운트마다 한 번 평가되는 불리언 게이트이며, 재시도는 없습니다.
    pub fn require(&self) -> Result<Session, AppError> {
        self.load()?.ok_or(AppError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Researcher;
    use tempfile::tempdir;

    fn sample_session() -> Session {
        Session {
            user_id: 7,
            name: "Maria".to_string(),
            email: "maria@ccc.ufcg.edu.br".to_string(),
            institution: Some("UFCG".to_string()),
            orcid: Some("0000-0002-1825-0097".to_string()),
            token: "tok-123".to_string(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path().join("session.json"));

        store.save(&sample_session()).expect("save");
        let loaded = store.load().expect("load").expect("present");
        assert_eq!(loaded.user_id, 7);
        assert_eq!(loaded.token, "tok-123");
        assert_eq!(loaded.institution.as_deref(), Some("UFCG"));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path().join("nested/deeper/session.json"));
        store.save(&sample_session()).expect("save");
        assert!(store.load().expect("load").is_some());
    }

    #[test]
    fn require_fails_without_a_session() {
        let dir = tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(matches!(store.require(), Err(AppError::NotAuthenticated)));
    }

    #[test]
    fn clear_removes_the_session() {
        let dir = tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path().join("session.json"));
        store.save(&sample_session()).expect("save");
        store.clear().expect("clear");
        assert!(store.load().expect("load").is_none());
        // clearing twice is fine
        store.clear().expect("clear again");
    }

    #[test]
    fn session_from_auth_response_copies_profile_fields() {
        let auth = AuthResponse {
            user: Researcher {
                id: 3,
                name: "Ana".to_string(),
                email: Some("ana@uni.edu".to_string()),
                institution: None,
                orcid: None,
                roles: vec!["AUTHOR".to_string()],
            },
            token: "tok-xyz".to_string(),
        };
        let session = Session::from(auth);
        assert_eq!(session.user_id, 3);
        assert_eq!(session.email, "ana@uni.edu");
        assert_eq!(session.token, "tok-xyz");
        assert!(session.institution.is_none());
    }
}
