use console::style;

use crate::api::JournalApi;
use crate::error::AppError;
use crate::models::{Journal, Researcher, RoleAssignment};
use crate::services::format::fmt_date;
use crate::views::state::{self, FetchState, SubmitGuard, ViewContext};

/// 저널 상세 페이지의 뷰 상태
pub struct JournalView {
    pub journal: FetchState<Journal>,
    pub editors: FetchState<Vec<Researcher>>,
    pub reviewers: FetchState<Vec<Researcher>>,
}

/// 저널 상세를 로드합니다. 세 리소스는 서로 독립이므로 동시에 요청합니다.
pub async fn load<A: JournalApi + Sync>(
    ctx: &ViewContext,
    api: &A,
    journal_id: i64,
) -> JournalView {
    let cancel = ctx.cancel_token();
    let (journal, editors, reviewers) = tokio::join!(
        state::load(cancel, api.journal(journal_id)),
        state::load(cancel, api.editors(journal_id)),
        state::load(cancel, api.reviewers(journal_id)),
    );
    JournalView {
        journal,
        editors,
        reviewers,
    }
}

/// 역할 배정 드롭다운에 보일 후보: 이미 그 역할을 가진 사용자는 제외합니다.
/// (중복 배정을 UI 계층에서 차단합니다 — 서버 측 강제는 외부 책임)
pub fn available_users(all: &[Researcher], assigned: &[Researcher]) -> Vec<Researcher> {
    all.iter()
        .filter(|user| !assigned.iter().any(|a| a.id == user.id))
        .cloned()
        .collect()
}

/// 에디터 추가: 성공하면 에디터 목록을 다시 가져와 돌려줍니다.
/// 실패하면 기존 상태는 그대로 두고 에러만 돌려줍니다.
pub async fn add_editor<A: JournalApi + Sync>(
    api: &A,
    guard: &mut SubmitGuard,
    journal_id: i64,
    user_id: i64,
    current: &[Researcher],
) -> Result<Vec<Researcher>, AppError> {
    assign_role(api, guard, journal_id, user_id, current, Role::Editor).await
}

/// 리뷰어 추가: 성공하면 리뷰어 목록을 다시 가져와 돌려줍니다.
pub async fn add_reviewer<A: JournalApi + Sync>(
    api: &A,
    guard: &mut SubmitGuard,
    journal_id: i64,
    user_id: i64,
    current: &[Researcher],
) -> Result<Vec<Researcher>, AppError> {
    assign_role(api, guard, journal_id, user_id, current, Role::Reviewer).await
}

enum Role {
    Editor,
    Reviewer,
}

async fn assign_role<A: JournalApi + Sync>(
    api: &A,
    guard: &mut SubmitGuard,
    journal_id: i64,
    user_id: i64,
    current: &[Researcher],
    role: Role,
) -> Result<Vec<Researcher>, AppError> {
    // 요청을 보내기 전에 걸러내는 두 가지: 중복 배정과 재진입
    if current.iter().any(|user| user.id == user_id) {
        return Err(AppError::Validation(
            "this user already holds that role".to_string(),
        ));
    }
    let ticket = guard
        .begin()
        .ok_or_else(|| AppError::Validation("a submission is already in flight".to_string()))?;

    let assignment = RoleAssignment {
        journal_id,
        user_id,
    };
    let result = match role {
        Role::Editor => api.add_editor(&assignment, ticket.key()).await,
        Role::Reviewer => api.add_reviewer(&assignment, ticket.key()).await,
    };
    guard.finish();
    result?;

    // 변경된 컬렉션만 다시 가져옵니다 (낙관적 갱신 없음)
    match role {
        Role::Editor => api.editors(journal_id).await,
        Role::Reviewer => api.reviewers(journal_id).await,
    }
}

impl JournalView {
    pub fn render(&self) -> String {
        let mut out = String::new();

        let journal = match &self.journal {
            FetchState::Ready(journal) => journal,
            FetchState::Error(message) => {
                out.push_str(&format!("{} {message}\n", style("✘").red()));
                return out;
            }
            _ => {
                out.push_str("Loading journal...\n");
                return out;
            }
        };

        out.push_str(&format!("{} (ISSN {})\n", style(&journal.name).bold(), journal.issn));

        out.push_str(&format!("\n{}\n", style("Issues").bold()));
        if journal.issues.is_empty() {
            out.push_str("Looks like this journal has no issues yet\n");
        }
        for issue in &journal.issues {
            out.push_str(&format!(
                "- [{}] Volume {}, Issue {}",
                issue.id, issue.volume, issue.number
            ));
            if let Some(date) = issue.published_date.as_deref() {
                out.push_str(&format!(", published {}", fmt_date(date)));
            }
            out.push('\n');
        }

        out.push_str(&format!("\n{}\n", style("Editors").bold()));
        render_people(&mut out, &self.editors);

        out.push_str(&format!("\n{}\n", style("Reviewers").bold()));
        render_people(&mut out, &self.reviewers);

        out
    }
}

fn render_people(out: &mut String, people: &FetchState<Vec<Researcher>>) {
    match people {
        FetchState::Ready(list) if list.is_empty() => out.push_str("Nobody assigned yet.\n"),
        FetchState::Ready(list) => {
            for person in list {
                let institution = person.institution.as_deref().unwrap_or("N/A");
                out.push_str(&format!("- [{}] {} ({institution})\n", person.id, person.name));
            }
        }
        FetchState::Error(message) => {
            out.push_str(&format!("{} {message}\n", style("✘").red()));
        }
        _ => out.push_str("Loading...\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewJournal;
    use crate::session::Session;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn ctx() -> ViewContext {
        ViewContext::new(Session {
            user_id: 1,
            name: "Maria".to_string(),
            email: "maria@ccc.ufcg.edu.br".to_string(),
            institution: None,
            orcid: None,
            token: "tok".to_string(),
        })
    }

    fn researcher(id: i64, name: &str) -> Researcher {
        Researcher {
            id,
            name: name.to_string(),
            email: None,
            institution: Some("UFCG".to_string()),
            orcid: None,
            roles: Vec::new(),
        }
    }

    #[derive(Default)]
    struct FakeApi {
        reviewers: Mutex<Vec<Researcher>>,
        add_reviewer_calls: AtomicUsize,
        reviewer_list_calls: AtomicUsize,
    }

    #[async_trait]
    impl JournalApi for FakeApi {
        async fn journals(&self, _: u32) -> Result<Vec<Journal>, AppError> {
            unreachable!("not used by the journal view")
        }

        async fn journal(&self, id: i64) -> Result<Journal, AppError> {
            Ok(Journal {
                id,
                name: "Journal of Testing".to_string(),
                issn: "1234-5678".to_string(),
                assigned_at: None,
                issues: Vec::new(),
            })
        }

        async fn create_journal(&self, _: &NewJournal, _: &str) -> Result<Journal, AppError> {
            unreachable!("not used by the journal view")
        }

        async fn editors(&self, _: i64) -> Result<Vec<Researcher>, AppError> {
            Ok(vec![researcher(1, "Maria")])
        }

        async fn reviewers(&self, _: i64) -> Result<Vec<Researcher>, AppError> {
            self.reviewer_list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reviewers.lock().expect("lock").clone())
        }

        async fn add_editor(&self, _: &RoleAssignment, _: &str) -> Result<(), AppError> {
            unreachable!("not exercised in these tests")
        }

        async fn add_reviewer(&self, req: &RoleAssignment, _: &str) -> Result<(), AppError> {
            self.add_reviewer_calls.fetch_add(1, Ordering::SeqCst);
            self.reviewers
                .lock()
                .expect("lock")
                .push(researcher(req.user_id, "Added"));
            Ok(())
        }
    }

    #[tokio::test]
    async fn loads_journal_editors_and_reviewers_together() {
        let api = FakeApi::default();
        let view = load(&ctx(), &api, 10).await;

        assert!(view.journal.is_ready());
        assert!(view.editors.is_ready());
        assert!(view.reviewers.is_ready());
        assert!(view.render().contains("Journal of Testing"));
    }

    #[test]
    fn assigned_users_are_excluded_from_the_available_pool() {
        let all = vec![researcher(1, "Maria"), researcher(2, "Ana"), researcher(3, "Bia")];
        let assigned = vec![researcher(2, "Ana")];

        let available = available_users(&all, &assigned);
        let ids: Vec<i64> = available.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn duplicate_assignment_is_rejected_before_any_request() {
        let api = FakeApi::default();
        let mut guard = SubmitGuard::new();
        let current = vec![researcher(2, "Ana")];

        let result = add_reviewer(&api, &mut guard, 10, 2, &current).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(api.add_reviewer_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_assignment_refetches_the_collection() {
        let api = FakeApi::default();
        let mut guard = SubmitGuard::new();

        let refreshed = add_reviewer(&api, &mut guard, 10, 2, &[]).await.expect("assign");
        assert_eq!(api.add_reviewer_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.reviewer_list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(refreshed.len(), 1);

        // the guard settled, a further intent is allowed again
        assert!(guard.begin().is_some());
    }
}
