use std::collections::HashMap;

use console::style;

use crate::api::{JournalApi, PaperApi, UserApi};
use crate::error::AppError;
use crate::models::{AssignedReview, Journal, Paper};
use crate::services::format::fmt_date;
use crate::views::lookup::JournalDirectory;
use crate::views::state::{self, FetchState, ViewContext};

/// 저널 섹션: 내가 에디터인 저널과 전체 저널 목록
///
/// 두 요청을 순차로 보내고 하나의 상태로 묶습니다 —
/// 둘 중 하나라도 실패하면 섹션 전체가 에러입니다.
pub struct JournalsSection {
    pub mine: Vec<Journal>,
    pub all: Vec<Journal>,
}

/// 논문 섹션: 내 논문 목록과, 디렉토리로 해소한 저널 이름들
pub struct PapersSection {
    pub papers: Vec<Paper>,
    pub journal_names: HashMap<i64, String>,
}

/// 홈 페이지: 세 섹션이 각자 상태를 소유합니다.
/// 한 섹션의 실패가 다른 섹션을 지우지 않습니다.
pub struct HomeView {
    pub journals: FetchState<JournalsSection>,
    pub papers: FetchState<PapersSection>,
    pub reviews: FetchState<Vec<AssignedReview>>,
}

pub async fn load<A>(ctx: &ViewContext, api: &A) -> HomeView
where
    A: UserApi + JournalApi + PaperApi + Sync,
{
    let cancel = ctx.cancel_token();
    let user_id = ctx.session.user_id;

    let journals_section = async {
        // 순차: 내 저널 → 전체 저널 (의존은 없지만 하나의 상태로 묶입니다)
        let mine = api.user_journals(user_id).await?;
        let all = api.journals(crate::views::lookup::DIRECTORY_LIMIT).await?;
        Ok::<_, AppError>(JournalsSection { mine, all })
    };

    let papers_section = async {
        let papers = api.papers_by_researcher(user_id).await?;

        // 저널 이름은 읽기 관통 디렉토리로 해소합니다
        let mut directory = JournalDirectory::new();
        directory.prime(api).await;
        let mut journal_names = HashMap::new();
        for paper in &papers {
            directory.resolve(api, paper.journal_id).await;
            if let Some(name) = directory.name_of(paper.journal_id) {
                journal_names.insert(paper.journal_id, name.to_string());
            }
        }
        Ok::<_, AppError>(PapersSection { papers, journal_names })
    };

    let reviews_section = api.user_reviews(user_id);

    // 세 섹션은 서로 독립 — 동시에 로드합니다
    let (journals, papers, reviews) = tokio::join!(
        state::load(cancel, journals_section),
        state::load(cancel, papers_section),
        state::load(cancel, reviews_section),
    );

    HomeView {
        journals,
        papers,
        reviews,
    }
}

impl HomeView {
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", style("You are an editor on these journals").bold()));
        match &self.journals {
            FetchState::Ready(section) => {
                if section.mine.is_empty() {
                    out.push_str("Looks like you are not an editor on any journal!\n");
                }
                for journal in &section.mine {
                    out.push_str(&format!("- [{}] {}\n", journal.id, journal.name));
                }
                out.push_str(&format!("\n{}\n", style("All journals").bold()));
                if section.all.is_empty() {
                    out.push_str("Looks like we don't have any journals yet!\n");
                }
                for journal in &section.all {
                    out.push_str(&format!("- [{}] {} (ISSN {})\n", journal.id, journal.name, journal.issn));
                }
            }
            FetchState::Error(message) => {
                out.push_str(&format!("{} Error loading journals: {message}\n", style("✘").red()));
            }
            _ => out.push_str("Loading journals...\n"),
        }

        out.push_str(&format!("\n{}\n", style("Your Papers").bold()));
        match &self.papers {
            FetchState::Ready(section) => {
                if section.papers.is_empty() {
                    out.push_str("You haven't submitted any papers yet!\n");
                }
                for paper in &section.papers {
                    let journal = section
                        .journal_names
                        .get(&paper.journal_id)
                        .map(String::as_str)
                        .unwrap_or("unknown journal");
                    let submitted = paper
                        .submission_date
                        .as_deref()
                        .map(fmt_date)
                        .unwrap_or_default();
                    out.push_str(&format!(
                        "- [{}] {} — {journal}, submitted {submitted}, status {}\n",
                        paper.id,
                        paper.name,
                        paper.status.as_deref().unwrap_or("unknown"),
                    ));
                }
            }
            FetchState::Error(message) => {
                out.push_str(&format!("{} Error loading papers: {message}\n", style("✘").red()));
            }
            _ => out.push_str("Loading papers...\n"),
        }

        out.push_str(&format!("\n{}\n", style("Your Reviews").bold()));
        match &self.reviews {
            FetchState::Ready(reviews) => {
                if reviews.is_empty() {
                    out.push_str("You don't have any reviews assigned yet!\n");
                }
                for review in reviews {
                    let due = review.due_date.as_deref().map(fmt_date).unwrap_or_default();
                    out.push_str(&format!(
                        "- [{}] {} — status {}, due {due}\n",
                        review.id,
                        review.paper_title,
                        review.status.as_deref().unwrap_or("unknown"),
                    ));
                }
            }
            FetchState::Error(message) => {
                out.push_str(&format!("{} Error loading reviews: {message}\n", style("✘").red()));
            }
            _ => out.push_str("Loading reviews...\n"),
        }

        out
    }
}
