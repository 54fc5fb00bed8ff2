//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Questions
// ============================================================================

/// Request for POST /question/create
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    pub content: String,
}

/// Request for PUT /question/edit/{questionId}
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionEditRequest {
    pub content: String,
}

/// Response carrying a question uuid and an outcome status
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub status: String,
}

/// One row of GET /question/all and GET /question/all/{userId}
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetailsResponse {
    pub id: String,
    pub content: String,
}

// ============================================================================
// Answers
// ============================================================================

/// Request for POST /question/{questionId}/answer/create
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

/// Request for PUT /answer/edit/{answerId}
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerEditRequest {
    pub content: String,
}

/// Response carrying an answer uuid and an outcome status
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub id: String,
    pub status: String,
}

/// One row of GET /answer/all/{questionId}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDetailsResponse {
    pub id: String,
    pub question_content: String,
    pub answer_content: String,
}
