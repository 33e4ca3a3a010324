//! # 원격 리소스 상태(Fetch State) 모듈
//!
//! 모든 페이지가 반복하는 "원격 리소스 뷰" 패턴의 공용 골격입니다.
//!
//! 뷰가 표시하는 내용은 마지막으로 settle된 요청 결과의 순수 함수입니다:
//! settle 전에는 `Loading`, 성공하면 `Ready(data)`, 실패하면 `Error(message)`.
//! ready와 error가 동시에 존재하는 일은 타입상 불가능합니다 (enum이므로).
//!
//! 취소: 각 로드는 뷰 수명에 묶인 CancellationToken과 경쟁(select)합니다.
//! 더 이상 현재가 아닌 뷰(페이지 이동, 로그아웃)는 늦게 도착한 응답을
//! 상태에 반영하지 않습니다. 자동 재시도와 타임아웃은 없습니다.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use futures_util::future::join_all;
use tokio_util::sync::CancellationToken;

use crate::error::AppError;
use crate::session::Session;

/// 뷰 하나가 소유하는 원격 리소스의 생명주기 상태
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// 아직 요청하지 않음 (선행 요청이 실패한 종속 리소스도 여기 머뭅니다)
    Idle,
    /// 요청이 아직 settle되지 않음
    Loading,
    /// 마지막 요청이 성공함
    Ready(T),
    /// 마지막 요청이 실패함 — 뷰가 직접 표시할 메시지
    Error(String),
}

impl<T> FetchState<T> {
    /// 요청 결과를 상태로 전이합니다.
    pub fn settle(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => FetchState::Ready(data),
            Err(err) => FetchState::Error(err.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }
}

/// 보호된 뷰 하나에 주입되는 컨텍스트
///
/// 세션은 전역 저장소를 암묵적으로 읽는 대신 명시적으로 전달됩니다.
/// 로그아웃은 토큰을 취소하여 진행 중인 로드가 이후 상태를 건드리지
/// 못하게 만듭니다.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub session: Session,
    cancel: CancellationToken,
}

impl ViewContext {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cancel: CancellationToken::new(),
        }
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// 로그아웃/페이지 이탈 시 호출: 이 컨텍스트에 묶인 모든 로드를 무효화합니다.
    pub fn invalidate(&self) {
        self.cancel.cancel();
    }
}

/// 요청 하나를 실행하고 settle된 상태를 돌려줍니다.
///
/// 토큰이 먼저 취소되면 결과를 반영하지 않고 `Loading`에 머뭅니다.
pub async fn load<T>(
    cancel: &CancellationToken,
    request: impl Future<Output = Result<T, AppError>>,
) -> FetchState<T> {
    tokio::select! {
        _ = cancel.cancelled() => FetchState::Loading,
        result = request => FetchState::settle(result),
    }
}

/// 팬아웃: 키마다 독립 요청을 동시에 보내고 키로 병합합니다.
///
/// 개별 항목의 실패는 로그만 남기고 기본값(빈 결과)으로 대체됩니다 —
/// 형제 항목의 성공에는 영향을 주지 않으며, 요청한 모든 키에 대해
/// 엔트리가 존재합니다. 완료 순서와 무관하게 결과는 결정적입니다.
pub async fn fan_out<K, T, F, Fut>(keys: &[K], mut fetch: F) -> HashMap<K, T>
where
    K: Eq + Hash + Clone + std::fmt::Display,
    T: Default,
    F: FnMut(K) -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let requests: Vec<_> = keys
        .iter()
        .cloned()
        .map(|key| {
            let request = fetch(key.clone());
            async move { (key, request.await) }
        })
        .collect();

    join_all(requests)
        .await
        .into_iter()
        .map(|(key, result)| match result {
            Ok(data) => (key, data),
            Err(err) => {
                tracing::warn!(%key, error = %err, "fan-out item failed, degrading to empty");
                (key, T::default())
            }
        })
        .collect()
}

/// 제출 버튼 가드: 사용자 의도 하나당 최대 한 번의 효과
///
/// settle 전의 재진입(더블 클릭에 해당)을 거부하고, 시도마다 새
/// 멱등성 키를 발급합니다.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    in_flight: bool,
}

/// 한 번의 제출 시도를 나타내는 티켓
#[derive(Debug)]
pub struct SubmissionTicket {
    key: String,
}

impl SubmissionTicket {
    /// 이 시도에 첨부할 `Idempotency-Key` 값
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 제출 시작. 이미 진행 중이면 `None` (컨트롤 비활성화에 해당).
    pub fn begin(&mut self) -> Option<SubmissionTicket> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(SubmissionTicket {
            key: uuid::Uuid::now_v7().to_string(),
        })
    }

    /// 요청이 settle됨 (성공/실패 모두) — 다음 시도를 허용합니다.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_is_a_pure_function_of_the_outcome() {
        let ready = FetchState::settle(Ok(42));
        assert_eq!(ready.ready(), Some(&42));
        assert!(ready.error().is_none());

        let error = FetchState::<i32>::settle(Err(AppError::NotFound));
        assert!(error.ready().is_none());
        assert_eq!(error.error(), Some("resource not found"));
    }

    #[tokio::test]
    async fn load_settles_to_ready_on_success() {
        let cancel = CancellationToken::new();
        let state = load(&cancel, async { Ok::<_, AppError>("data") }).await;
        assert_eq!(state.ready(), Some(&"data"));
    }

    #[tokio::test]
    async fn cancelled_load_never_applies_a_result() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let state = load(&cancel, async { Ok::<_, AppError>("stale") }).await;
        // 취소된 뷰는 늦은 응답을 반영하지 않습니다
        assert_eq!(state, FetchState::Loading);
    }

    #[tokio::test]
    async fn fan_out_keeps_an_entry_for_every_key() {
        let keys = vec![1i64, 2, 3];
        let merged = fan_out(&keys, |key| async move {
            if key == 2 {
                Err(AppError::NotFound)
            } else {
                Ok(vec![format!("result-{key}")])
            }
        })
        .await;

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[&1], vec!["result-1".to_string()]);
        // the failed item degrades to empty without touching its siblings
        assert!(merged[&2].is_empty());
        assert_eq!(merged[&3], vec!["result-3".to_string()]);
    }

    #[test]
    fn submit_guard_rejects_reentry_until_settlement() {
        let mut guard = SubmitGuard::new();
        let first = guard.begin().expect("first attempt allowed");
        assert!(guard.begin().is_none(), "double click must be rejected");
        guard.finish();
        let second = guard.begin().expect("next attempt allowed after settle");
        // every attempt carries a fresh idempotency key
        assert_ne!(first.key(), second.key());
    }
}
