use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub paper_id: i64,
    pub status: Option<String>,
    pub requester_id: Option<i64>,
    pub first_reviewer_id: Option<i64>,
    pub second_reviewer_id: Option<i64>,
    pub request_date: Option<String>,
    pub assigned_date: Option<String>,
    pub completed_date: Option<String>,
    pub final_decision: Option<String>,
    pub editor_notes: Option<String>,
}

/// `GET /users/:id/reviews`가 내려주는 배정 리뷰 투영
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedReview {
    pub id: i64,
    pub paper_title: String,
    pub status: Option<String>,
    pub assigned_at: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    pub recommendation: String,
    pub comments: String,
    pub overall_score: i64,
    pub reviewer_id: Option<i64>,
    pub submitted_at: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub paper_id: i64,
    pub first_reviewer_id: i64,
    pub second_reviewer_id: i64,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub recommendation: String,
    pub comments: String,
    pub overall_score: i64,
}
