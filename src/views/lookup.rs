//! 저널 디렉토리: 외래 키로만 연결된 관계를 클라이언트에서 해소하는
//! 읽기 관통(read-through) 캐시입니다.
//!
//! 뷰마다 컬렉션을 통째로 받아 id를 수동으로 맞춰보는 대신,
//! 배치 조회 한 번으로 캐시를 채우고 빠진 id만 개별 조회로 보충하는
//! 단일 조회 함수로 정리합니다. 개별 조회 실패는 해당 엔트리만
//! 미해소 상태로 남깁니다.

use std::collections::HashMap;

use crate::api::JournalApi;
use crate::models::Journal;

/// 뷰들이 배치 프라임에 사용하는 페이지 크기 (`?limit=100`)
pub const DIRECTORY_LIMIT: u32 = 100;

#[derive(Debug, Default)]
pub struct JournalDirectory {
    cache: HashMap<i64, Journal>,
    primed: bool,
}

impl JournalDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 배치 조회 한 번으로 캐시를 채웁니다. 두 번째 호출부터는 no-op입니다.
    ///
    /// 배치가 실패해도 뷰를 막지 않습니다 — 이후 개별 조회가 빈 캐시를
    /// 채우게 둡니다.
    pub async fn prime<A: JournalApi + Sync>(&mut self, api: &A) {
        if self.primed {
            return;
        }
        self.primed = true;
        match api.journals(DIRECTORY_LIMIT).await {
            Ok(journals) => {
                for journal in journals {
                    self.cache.insert(journal.id, journal);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "journal directory batch fetch failed");
            }
        }
    }

    /// id 하나를 해소합니다. 캐시에 없으면 개별 조회로 채워 넣습니다.
    pub async fn resolve<A: JournalApi + Sync>(&mut self, api: &A, id: i64) -> Option<&Journal> {
        if !self.cache.contains_key(&id) {
            match api.journal(id).await {
                Ok(journal) => {
                    self.cache.insert(id, journal);
                }
                Err(err) => {
                    tracing::warn!(journal_id = id, error = %err, "journal lookup failed");
                    return None;
                }
            }
        }
        self.cache.get(&id)
    }

    /// 이미 캐시된 저널의 이름 (비동기 조회 없이)
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.cache.get(&id).map(|journal| journal.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{NewJournal, Researcher, RoleAssignment};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn journal(id: i64, name: &str) -> Journal {
        Journal {
            id,
            name: name.to_string(),
            issn: format!("1234-567{id}"),
            assigned_at: None,
            issues: Vec::new(),
        }
    }

    #[derive(Default)]
    struct FakeJournals {
        list_calls: AtomicUsize,
        get_calls: AtomicUsize,
        missing: Vec<i64>,
    }

    #[async_trait]
    impl JournalApi for FakeJournals {
        async fn journals(&self, _limit: u32) -> Result<Vec<Journal>, AppError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![journal(1, "Nature"), journal(2, "Science")])
        }

        async fn journal(&self, id: i64) -> Result<Journal, AppError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            if self.missing.contains(&id) {
                return Err(AppError::NotFound);
            }
            Ok(journal(id, "Fetched"))
        }

        async fn create_journal(&self, _: &NewJournal, _: &str) -> Result<Journal, AppError> {
            unreachable!("not used by the directory")
        }

        async fn editors(&self, _: i64) -> Result<Vec<Researcher>, AppError> {
            unreachable!("not used by the directory")
        }

        async fn reviewers(&self, _: i64) -> Result<Vec<Researcher>, AppError> {
            unreachable!("not used by the directory")
        }

        async fn add_editor(&self, _: &RoleAssignment, _: &str) -> Result<(), AppError> {
            unreachable!("not used by the directory")
        }

        async fn add_reviewer(&self, _: &RoleAssignment, _: &str) -> Result<(), AppError> {
            unreachable!("not used by the directory")
        }
    }

    #[tokio::test]
    async fn prime_batches_once_and_serves_from_cache() {
        let api = FakeJournals::default();
        let mut directory = JournalDirectory::new();

        directory.prime(&api).await;
        directory.prime(&api).await;
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);

        assert!(directory.resolve(&api, 1).await.is_some());
        assert_eq!(directory.name_of(2), Some("Science"));
        // cache hits never reach the network
        assert_eq!(api.get_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn misses_are_backfilled_by_a_single_lookup() {
        let api = FakeJournals::default();
        let mut directory = JournalDirectory::new();
        directory.prime(&api).await;

        assert!(directory.resolve(&api, 9).await.is_some());
        assert!(directory.resolve(&api, 9).await.is_some());
        assert_eq!(api.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn a_failed_lookup_leaves_only_that_entry_unresolved() {
        let api = FakeJournals {
            missing: vec![5],
            ..FakeJournals::default()
        };
        let mut directory = JournalDirectory::new();
        directory.prime(&api).await;

        assert!(directory.resolve(&api, 5).await.is_none());
        assert!(directory.resolve(&api, 1).await.is_some());
    }
}
