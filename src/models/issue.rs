use serde::{Deserialize, Serialize};

use super::paper::Paper;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: i64,
    pub number: i64,
    pub volume: i64,
    pub published_date: Option<String>,
    pub journal_id: i64,
    /// `GET /issues/:id`는 수록 논문 목록을 함께 내려줍니다.
    #[serde(default)]
    pub papers: Vec<Paper>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub journal_id: i64,
    pub volume: i64,
    pub number: i64,
}
