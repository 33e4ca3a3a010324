use serde::{Deserialize, Serialize};

use super::user::Researcher;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub id: i64,
    pub name: String,
    pub journal_id: i64,
    pub issue_id: Option<i64>,
    pub status: Option<String>,
    pub url: Option<String>,
    pub published_date: Option<String>,
    pub submission_date: Option<String>,
    #[serde(default)]
    pub researchers: Vec<Researcher>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaper {
    pub name: String,
    pub url: String,
    pub journal_id: i64,
    /// 저자로 등록할 연구자 id 목록 (제출자 본인은 항상 포함)
    pub researchers: Vec<i64>,
}
