//! 생성 폼 플로우: 새 저널, 새 이슈, 새 논문.
//!
//! 세 폼 모두 같은 규칙을 따릅니다: 클라이언트 측 필수 필드 검증을
//! 통과한 요청만 나가고, 제출 가드가 재진입을 거부하며, 시도마다
//! 새 멱등성 키가 붙습니다.

use crate::api::{IssueApi, JournalApi, PaperApi, UserApi};
use crate::error::AppError;
use crate::models::{Journal, NewIssue, NewJournal, NewPaper, Researcher, RoleAssignment};
use crate::views::state::{self, FetchState, SubmitGuard, ViewContext};

/// 새 저널을 만들고, 만든 사람을 곧바로 에디터로 배정합니다.
///
/// 두 번째 단계(자기 배정)가 실패해도 저널은 이미 존재하므로,
/// 생성된 저널과 함께 배정 에러를 돌려줍니다.
pub async fn create_journal<A: JournalApi + Sync>(
    ctx: &ViewContext,
    api: &A,
    guard: &mut SubmitGuard,
    name: &str,
    issn: &str,
) -> Result<(Journal, Option<AppError>), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("journal name is required".to_string()));
    }
    if issn.trim().is_empty() {
        return Err(AppError::Validation("ISSN is required".to_string()));
    }
    let ticket = guard
        .begin()
        .ok_or_else(|| AppError::Validation("a submission is already in flight".to_string()))?;

    let req = NewJournal {
        name: name.trim().to_string(),
        issn: issn.trim().to_string(),
    };
    let created = api.create_journal(&req, ticket.key()).await;
    guard.finish();
    let journal = created?;

    // 생성 직후 본인을 에디터로 배정하는 체인. 배정 키는 생성 키와 별개입니다.
    let assignment = RoleAssignment {
        journal_id: journal.id,
        user_id: ctx.session.user_id,
    };
    let assign_key = uuid::Uuid::now_v7().to_string();
    let assign_error = api.add_editor(&assignment, &assign_key).await.err();

    Ok((journal, assign_error))
}

/// 새 이슈를 만듭니다.
pub async fn create_issue<A: IssueApi + Sync>(
    api: &A,
    guard: &mut SubmitGuard,
    journal_id: i64,
    volume: i64,
    number: i64,
) -> Result<(), AppError> {
    if volume <= 0 || number <= 0 {
        return Err(AppError::Validation(
            "volume and issue number must be positive".to_string(),
        ));
    }
    let ticket = guard
        .begin()
        .ok_or_else(|| AppError::Validation("a submission is already in flight".to_string()))?;

    let req = NewIssue {
        journal_id,
        volume,
        number,
    };
    let result = api.create_issue(&req, ticket.key()).await;
    guard.finish();
    result
}

/// 새 논문 폼이 미리 로드하는 선택지: 저널 목록과 공저자 후보.
pub struct PaperFormChoices {
    pub journals: FetchState<Vec<Journal>>,
    pub researchers: FetchState<Vec<Researcher>>,
}

const CHOICES_LIMIT: u32 = 100;

pub async fn load_paper_choices<A>(ctx: &ViewContext, api: &A) -> PaperFormChoices
where
    A: JournalApi + UserApi + Sync,
{
    let cancel = ctx.cancel_token();
    let (journals, researchers) = tokio::join!(
        state::load(cancel, api.journals(CHOICES_LIMIT)),
        state::load(cancel, api.users(CHOICES_LIMIT)),
    );
    PaperFormChoices {
        journals,
        researchers,
    }
}

/// 공저자 드롭다운에 보일 후보: 제출자 본인과 이미 고른 사람은 제외합니다.
pub fn available_coauthors(
    all: &[Researcher],
    selected: &[i64],
    submitter_id: i64,
) -> Vec<Researcher> {
    all.iter()
        .filter(|user| user.id != submitter_id && !selected.contains(&user.id))
        .cloned()
        .collect()
}

/// 새 논문을 제출합니다. 제출자 본인은 저자 목록에 항상 포함됩니다.
pub async fn create_paper<A: PaperApi + Sync>(
    ctx: &ViewContext,
    api: &A,
    guard: &mut SubmitGuard,
    name: &str,
    url: &str,
    journal_id: i64,
    coauthors: &[i64],
) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("paper title is required".to_string()));
    }
    if url.trim().is_empty() {
        return Err(AppError::Validation("paper URL is required".to_string()));
    }
    let ticket = guard
        .begin()
        .ok_or_else(|| AppError::Validation("a submission is already in flight".to_string()))?;

    let mut researchers = vec![ctx.session.user_id];
    for id in coauthors {
        if !researchers.contains(id) {
            researchers.push(*id);
        }
    }

    let req = NewPaper {
        name: name.trim().to_string(),
        url: url.trim().to_string(),
        journal_id,
        researchers,
    };
    let result = api.create_paper(&req, ticket.key()).await;
    guard.finish();
    result
}
