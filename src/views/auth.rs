use crate::api::UserApi;
use crate::error::AppError;
use crate::models::{LoginRequest, SignUpRequest};
use crate::session::{Session, SessionStore};
use crate::views::state::ViewContext;

#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub institution: String,
    pub orcid: String,
}

/// 로그인 페이지 제출.
///
/// 성공 시에만 세션이 저장됩니다 — 잘못된 자격증명은 에러로 끝나고
/// 아무 필드도 기록하지 않으며 이동도 일어나지 않습니다.
pub async fn login<A: UserApi + Sync>(
    api: &A,
    store: &SessionStore,
    email: &str,
    password: &str,
) -> Result<Session, AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }

    let auth = api
        .login(&LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
        .await?;

    let session = Session::from(auth);
    store.save(&session)?;
    Ok(session)
}

/// 회원가입 페이지 제출: 가입 후 같은 자격증명으로 로그인까지 이어집니다.
pub async fn sign_up<A: UserApi + Sync>(
    api: &A,
    store: &SessionStore,
    form: &SignUpForm,
) -> Result<Session, AppError> {
    for (field, value) in [
        ("name", &form.name),
        ("email", &form.email),
        ("password", &form.password),
        ("institution", &form.institution),
        ("orcid", &form.orcid),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }

    api.sign_up(&SignUpRequest {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        institution: form.institution.trim().to_string(),
        orcid: form.orcid.trim().to_string(),
        roles: vec!["AUTHOR".to_string()],
    })
    .await?;

    login(api, store, &form.email, &form.password).await
}

/// 로그아웃: 진행 중인 로드를 먼저 무효화한 뒤 세션을 완전히 삭제합니다.
pub fn log_out(ctx: &ViewContext, store: &SessionStore) -> Result<(), AppError> {
    ctx.invalidate();
    store.clear()
}
