use std::collections::HashMap;

use console::style;

use crate::api::{JournalApi, PaperApi, ReviewApi};
use crate::models::{Journal, Paper, Review, ReviewResult};
use crate::services::format::fmt_date;
use crate::views::state::{self, FetchState, ViewContext};

/// 논문 상세 페이지의 뷰 상태
pub struct PaperView {
    pub paper: FetchState<Paper>,
    pub journal: FetchState<Journal>,
    pub reviews: FetchState<Vec<Review>>,
    /// 리뷰 id → 제출된 평가 목록. 요청한 모든 리뷰에 대해 엔트리가 있으며,
    /// 아직 결과가 없는(또는 조회에 실패한) 리뷰는 빈 목록입니다.
    pub results: HashMap<i64, Vec<ReviewResult>>,
}

/// 논문 상세를 로드합니다.
///
/// 체인: paper → (journal ∥ reviews) → 리뷰별 결과 팬아웃.
/// 선행 요청(paper)이 실패하면 종속 요청은 발행조차 하지 않고
/// 에러 하나만 표면화합니다.
pub async fn load<A>(ctx: &ViewContext, api: &A, paper_id: i64) -> PaperView
where
    A: PaperApi + JournalApi + ReviewApi + Sync,
{
    let cancel = ctx.cancel_token();
    let paper = state::load(cancel, api.paper(paper_id)).await;

    // 종속 요청의 매개변수는 선행 응답에서 옵니다
    let (journal_id, paper_id) = match paper.ready() {
        Some(found) => (found.journal_id, found.id),
        None => {
            return PaperView {
                paper,
                journal: FetchState::Idle,
                reviews: FetchState::Idle,
                results: HashMap::new(),
            }
        }
    };

    // 저널과 리뷰 목록은 서로 독립이므로 동시에 요청합니다
    let (journal, reviews) = tokio::join!(
        state::load(cancel, api.journal(journal_id)),
        state::load(cancel, api.reviews_for_paper(paper_id)),
    );

    // 리뷰별 결과는 팬아웃으로: 한 항목의 실패가 형제를 망치지 않습니다
    let results = match reviews.ready() {
        Some(list) => {
            let ids: Vec<i64> = list.iter().map(|review| review.id).collect();
            state::fan_out(&ids, |id| api.review_results(id)).await
        }
        None => HashMap::new(),
    };

    PaperView {
        paper,
        journal,
        reviews,
        results,
    }
}

impl PaperView {
    pub fn render(&self) -> String {
        let mut out = String::new();

        let paper = match &self.paper {
            FetchState::Ready(paper) => paper,
            FetchState::Error(message) => {
                out.push_str(&format!("{} {message}\n", style("✘").red()));
                return out;
            }
            _ => {
                out.push_str("Loading paper...\n");
                return out;
            }
        };

        out.push_str(&format!("{}\n", style(&paper.name).bold()));
        if let Some(status) = &paper.status {
            out.push_str(&format!("Status: {status}\n"));
        }
        if let FetchState::Ready(journal) = &self.journal {
            out.push_str(&format!("Journal: {} (ISSN {})\n", journal.name, journal.issn));
        }
        if let Some(date) = &paper.submission_date {
            out.push_str(&format!("Submitted: {}\n", fmt_date(date)));
        }
        if let Some(date) = &paper.published_date {
            out.push_str(&format!("Published: {}\n", fmt_date(date)));
        }
        if let Some(url) = &paper.url {
            out.push_str(&format!("URL: {url}\n"));
        }

        out.push_str(&format!("\n{}\n", style("Reviews").bold()));
        match &self.reviews {
            FetchState::Ready(reviews) if reviews.is_empty() => {
                out.push_str("No reviews requested for this paper yet.\n");
            }
            FetchState::Ready(reviews) => {
                for review in reviews {
                    let status = review.status.as_deref().unwrap_or("unknown");
                    out.push_str(&format!("- Review #{} [{status}]\n", review.id));
                    // 결과 블록은 제출된 평가가 있는 리뷰에만 렌더링합니다
                    let results = self.results.get(&review.id);
                    match results {
                        Some(results) if !results.is_empty() => {
                            for result in results {
                                out.push_str(&format!(
                                    "    {} (score {}/5): {}\n",
                                    result.recommendation, result.overall_score, result.comments
                                ));
                            }
                        }
                        _ => out.push_str("    No submitted results.\n"),
                    }
                }
            }
            FetchState::Error(message) => {
                out.push_str(&format!("{} {message}\n", style("✘").red()));
            }
            _ => out.push_str("Loading reviews...\n"),
        }

        out
    }
}
