use serde::{Deserialize, Serialize};

use super::issue::Issue;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    pub id: i64,
    pub name: String,
    pub issn: String,
    pub assigned_at: Option<String>,
    /// `GET /journals/:id`는 이슈 목록을 함께 내려줍니다.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

#[derive(Debug, Serialize)]
pub struct NewJournal {
    pub name: String,
    pub issn: String,
}

/// `POST /journals/editors`와 `POST /journals/reviewers`의 공용 본문
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub journal_id: i64,
    pub user_id: i64,
}
