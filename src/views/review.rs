use console::style;

use crate::api::{JournalApi, PaperApi, ReviewApi};
use crate::error::AppError;
use crate::models::{AssignedReview, Journal, Paper, Review, ReviewRequest, ReviewSubmission};
use crate::services::format::fmt_date;
use crate::views::state::{self, FetchState, SubmitGuard, ViewContext};

/// 제출 폼이 받아들이는 판정 값
pub const RECOMMENDATIONS: [&str; 4] =
    ["approve", "minor_revision", "major_revision", "reject"];

/// 리뷰 제출 페이지의 뷰 상태
///
/// 리뷰 → 논문 → 저널 순서의 종속 체인입니다. 앞 단계가 실패하면
/// 뒷 단계는 `Idle`에 머뭅니다.
pub struct SubmitReviewView {
    pub review: FetchState<Review>,
    pub paper: FetchState<Paper>,
    pub journal: FetchState<Journal>,
}

pub async fn load_submit<A>(ctx: &ViewContext, api: &A, review_id: i64) -> SubmitReviewView
where
    A: ReviewApi + PaperApi + JournalApi + Sync,
{
    let cancel = ctx.cancel_token();

    let review = state::load(cancel, api.review(review_id)).await;
    let paper_id = match review.ready() {
        Some(review) => review.paper_id,
        None => {
            return SubmitReviewView {
                review,
                paper: FetchState::Idle,
                journal: FetchState::Idle,
            }
        }
    };

    let paper = state::load(cancel, api.paper(paper_id)).await;
    let journal_id = match paper.ready() {
        Some(paper) => paper.journal_id,
        None => {
            return SubmitReviewView {
                review,
                paper,
                journal: FetchState::Idle,
            }
        }
    };

    let journal = state::load(cancel, api.journal(journal_id)).await;
    SubmitReviewView {
        review,
        paper,
        journal,
    }
}

/// 제출 전 클라이언트 측 검증. 요청은 검증을 통과한 뒤에만 나갑니다.
pub fn validate_submission(submission: &ReviewSubmission) -> Result<(), AppError> {
    if !RECOMMENDATIONS.contains(&submission.recommendation.as_str()) {
        return Err(AppError::Validation(format!(
            "recommendation must be one of: {}",
            RECOMMENDATIONS.join(", ")
        )));
    }
    if submission.comments.trim().is_empty() {
        return Err(AppError::Validation("comments must not be empty".to_string()));
    }
    if !(1..=5).contains(&submission.overall_score) {
        return Err(AppError::Validation(
            "overall score must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

/// 리뷰 평가를 제출합니다. 재진입은 거부되고, 시도마다 새 멱등성 키가 붙습니다.
pub async fn submit<A: ReviewApi + Sync>(
    api: &A,
    guard: &mut SubmitGuard,
    review_id: i64,
    submission: &ReviewSubmission,
) -> Result<(), AppError> {
    validate_submission(submission)?;
    let ticket = guard
        .begin()
        .ok_or_else(|| AppError::Validation("a submission is already in flight".to_string()))?;

    let result = api.submit_review(review_id, submission, ticket.key()).await;
    guard.finish();
    result
}

/// 리뷰 라운드를 요청합니다 (에디터 전용 플로우).
pub async fn request<A: ReviewApi + Sync>(
    api: &A,
    guard: &mut SubmitGuard,
    req: &ReviewRequest,
) -> Result<(), AppError> {
    if req.first_reviewer_id == req.second_reviewer_id {
        return Err(AppError::Validation(
            "the two reviewers must be different people".to_string(),
        ));
    }
    let ticket = guard
        .begin()
        .ok_or_else(|| AppError::Validation("a submission is already in flight".to_string()))?;

    let result = api.request_review(req, ticket.key()).await;
    guard.finish();
    result
}

impl SubmitReviewView {
    pub fn render(&self) -> String {
        let mut out = String::new();

        let review = match &self.review {
            FetchState::Ready(review) => review,
            FetchState::Error(message) => {
                out.push_str(&format!("{} {message}\n", style("✘").red()));
                return out;
            }
            _ => {
                out.push_str("Loading review...\n");
                return out;
            }
        };

        out.push_str(&format!("{}\n", style("Submit Review").bold()));
        match &self.paper {
            FetchState::Ready(paper) => {
                let journal_name = self
                    .journal
                    .ready()
                    .map(|journal| journal.name.as_str())
                    .unwrap_or("Unknown Journal");
                out.push_str(&format!("Paper: {} ({journal_name})\n", paper.name));
            }
            FetchState::Error(message) => {
                out.push_str(&format!("{} {message}\n", style("✘").red()));
            }
            _ => out.push_str("Loading paper...\n"),
        }
        if let Some(status) = review.status.as_deref() {
            out.push_str(&format!("Status: {status}\n"));
        }
        if let Some(date) = review.request_date.as_deref() {
            out.push_str(&format!("Requested {}\n", fmt_date(date)));
        }

        out
    }
}

/// 리뷰 목록 페이지의 뷰 상태: 내가 요청한 라운드와 내게 배정된 리뷰.
/// 두 목록은 독립이며 한쪽의 실패가 다른 쪽을 건드리지 않습니다.
pub struct ReviewsView {
    pub pending: FetchState<Vec<Review>>,
    pub assigned: FetchState<Vec<AssignedReview>>,
}

pub async fn load_lists<A: ReviewApi + Sync>(ctx: &ViewContext, api: &A) -> ReviewsView {
    let cancel = ctx.cancel_token();
    let (pending, assigned) = tokio::join!(
        state::load(cancel, api.pending_reviews()),
        state::load(cancel, api.my_reviews()),
    );
    ReviewsView { pending, assigned }
}

impl ReviewsView {
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", style("Reviews I requested").bold()));
        match &self.pending {
            FetchState::Ready(list) if list.is_empty() => {
                out.push_str("No pending review rounds.\n");
            }
            FetchState::Ready(list) => {
                for review in list {
                    out.push_str(&format!("- [{}] paper #{}", review.id, review.paper_id));
                    if let Some(status) = review.status.as_deref() {
                        out.push_str(&format!(" ({status})"));
                    }
                    out.push('\n');
                }
            }
            FetchState::Error(message) => {
                out.push_str(&format!("{} {message}\n", style("✘").red()));
            }
            _ => out.push_str("Loading...\n"),
        }

        out.push_str(&format!("\n{}\n", style("Reviews assigned to me").bold()));
        match &self.assigned {
            FetchState::Ready(list) if list.is_empty() => {
                out.push_str("You don't have any reviews assigned to you!\n");
            }
            FetchState::Ready(list) => {
                for review in list {
                    out.push_str(&format!("- [{}] {}", review.id, review.paper_title));
                    if let Some(due) = review.due_date.as_deref() {
                        out.push_str(&format!(", due {}", fmt_date(due)));
                    }
                    out.push('\n');
                }
            }
            FetchState::Error(message) => {
                out.push_str(&format!("{} {message}\n", style("✘").red()));
            }
            _ => out.push_str("Loading...\n"),
        }

        out
    }
}
