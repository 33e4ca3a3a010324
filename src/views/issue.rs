use console::style;

use crate::api::{IssueApi, JournalApi};
use crate::models::{Issue, Journal};
use crate::services::format::fmt_date;
use crate::views::state::{self, FetchState, ViewContext};

/// 이슈 상세 페이지의 뷰 상태: 이슈 본문 + 소속 저널(종속 리소스)
pub struct IssueView {
    pub issue: FetchState<Issue>,
    pub journal: FetchState<Journal>,
}

/// 이슈를 먼저 로드하고, 성공한 경우에만 소속 저널을 로드합니다.
/// 선행 요청이 실패하면 저널은 `Idle`에 머뭅니다 (요청 자체를 보내지 않음).
pub async fn load<A>(ctx: &ViewContext, api: &A, issue_id: i64) -> IssueView
where
    A: IssueApi + JournalApi + Sync,
{
    let cancel = ctx.cancel_token();

    let issue = state::load(cancel, api.issue(issue_id)).await;
    let journal_id = match issue.ready() {
        Some(issue) => issue.journal_id,
        None => {
            return IssueView {
                issue,
                journal: FetchState::Idle,
            }
        }
    };

    let journal = state::load(cancel, api.journal(journal_id)).await;
    IssueView { issue, journal }
}

impl IssueView {
    pub fn render(&self) -> String {
        let mut out = String::new();

        let issue = match &self.issue {
            FetchState::Ready(issue) => issue,
            FetchState::Error(message) => {
                out.push_str(&format!("{} {message}\n", style("✘").red()));
                return out;
            }
            _ => {
                out.push_str("Loading issue...\n");
                return out;
            }
        };

        let journal_name = self
            .journal
            .ready()
            .map(|journal| journal.name.as_str())
            .unwrap_or("Unknown Journal");

        out.push_str(&format!(
            "{} — Volume {}, Issue {}\n",
            style(journal_name).bold(),
            issue.volume,
            issue.number
        ));
        if let Some(date) = issue.published_date.as_deref() {
            out.push_str(&format!("Published {}\n", fmt_date(date)));
        }

        out.push_str(&format!("\n{}\n", style("Papers").bold()));
        if issue.papers.is_empty() {
            out.push_str("No papers found in this issue.\n");
            return out;
        }
        for paper in &issue.papers {
            out.push_str(&format!("- [{}] {}", paper.id, paper.name));
            if !paper.researchers.is_empty() {
                let authors: Vec<&str> = paper
                    .researchers
                    .iter()
                    .map(|author| author.name.as_str())
                    .collect();
                out.push_str(&format!(" by {}", authors.join(", ")));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{NewIssue, NewJournal, Paper, Researcher, RoleAssignment};
    use crate::session::Session;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

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

    #[derive(Default)]
    struct FakeApi {
        issue_missing: bool,
        journal_calls: AtomicUsize,
    }

    #[async_trait]
    impl IssueApi for FakeApi {
        async fn issue(&self, id: i64) -> Result<Issue, AppError> {
            if self.issue_missing {
                return Err(AppError::NotFound);
            }
            Ok(Issue {
                id,
                number: 2,
                volume: 7,
                published_date: Some("2026-03-01".to_string()),
                journal_id: 10,
                papers: vec![Paper {
                    id: 100,
                    name: "On Testing".to_string(),
                    journal_id: 10,
                    issue_id: Some(id),
                    status: None,
                    url: None,
                    published_date: None,
                    submission_date: None,
                    researchers: vec![Researcher {
                        id: 1,
                        name: "Maria".to_string(),
                        email: None,
                        institution: None,
                        orcid: None,
                        roles: Vec::new(),
                    }],
                }],
            })
        }

        async fn create_issue(&self, _: &NewIssue, _: &str) -> Result<(), AppError> {
            unreachable!("not used by the issue view")
        }
    }

    #[async_trait]
    impl JournalApi for FakeApi {
        async fn journals(&self, _: u32) -> Result<Vec<Journal>, AppError> {
            unreachable!("not used by the issue view")
        }

        async fn journal(&self, id: i64) -> Result<Journal, AppError> {
            self.journal_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Journal {
                id,
                name: "Journal of Testing".to_string(),
                issn: "1234-5678".to_string(),
                assigned_at: None,
                issues: Vec::new(),
            })
        }

        async fn create_journal(&self, _: &NewJournal, _: &str) -> Result<Journal, AppError> {
            unreachable!("not used by the issue view")
        }

        async fn editors(&self, _: i64) -> Result<Vec<Researcher>, AppError> {
            unreachable!("not used by the issue view")
        }

        async fn reviewers(&self, _: i64) -> Result<Vec<Researcher>, AppError> {
            unreachable!("not used by the issue view")
        }

        async fn add_editor(&self, _: &RoleAssignment, _: &str) -> Result<(), AppError> {
            unreachable!("not used by the issue view")
        }

        async fn add_reviewer(&self, _: &RoleAssignment, _: &str) -> Result<(), AppError> {
            unreachable!("not used by the issue view")
        }
    }

    #[tokio::test]
    async fn journal_chains_after_the_issue_resolves() {
        let api = FakeApi::default();
        let view = load(&ctx(), &api, 5).await;

        assert!(view.issue.is_ready());
        assert!(view.journal.is_ready());
        assert_eq!(api.journal_calls.load(Ordering::SeqCst), 1);

        let rendered = view.render();
        assert!(rendered.contains("Journal of Testing"));
        assert!(rendered.contains("Volume 7, Issue 2"));
        assert!(rendered.contains("On Testing by Maria"));
    }

    #[tokio::test]
    async fn a_missing_issue_never_requests_the_journal() {
        let api = FakeApi {
            issue_missing: true,
            ..FakeApi::default()
        };
        let view = load(&ctx(), &api, 5).await;

        assert!(view.issue.error().is_some());
        assert!(matches!(view.journal, FetchState::Idle));
        assert_eq!(api.journal_calls.load(Ordering::SeqCst), 0);
    }
}
