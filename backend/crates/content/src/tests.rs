//! Unit tests for the content crate

mod entity_tests {
    use crate::domain::entities::{NewAnswer, NewQuestion};
    use chrono::{TimeZone, Utc};
    use kernel::id::Id;

    #[test]
    fn test_new_question_gets_fresh_uuid() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let a = NewQuestion::new("What is ownership?".to_string(), Id::from_i64(1), date);
        let b = NewQuestion::new("What is ownership?".to_string(), Id::from_i64(1), date);

        assert_ne!(a.uuid, b.uuid);
        assert_eq!(a.date, date);
        assert_eq!(a.user_id, Id::from_i64(1));
    }

    #[test]
    fn test_new_answer_references_question_and_user() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let answer = NewAnswer::new(
            "Borrowing without taking.".to_string(),
            Id::from_i64(3),
            Id::from_i64(7),
            date,
        );

        assert_eq!(answer.user_id, Id::from_i64(3));
        assert_eq!(answer.question_id, Id::from_i64(7));
        assert_eq!(answer.content, "Borrowing without taking.");
    }
}

mod error_tests {
    use crate::error::ContentError;
    use auth::AuthError;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_codes() {
        let err = ContentError::QuestionNotFound("The question entered is invalid");
        assert_eq!(err.code(), "QUES-001");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "The question entered is invalid");

        assert_eq!(ContentError::AnswerNotFound.code(), "ANS-001");
        assert_eq!(
            ContentError::AnswerNotFound.to_string(),
            "Entered answer uuid does not exist"
        );
        assert_eq!(ContentError::AnswerNotFound.status_code(), StatusCode::NOT_FOUND);

        assert_eq!(ContentError::UserNotFound.code(), "USR-001");
        assert_eq!(
            ContentError::UserNotFound.to_string(),
            "User with entered uuid does not exist"
        );
        assert_eq!(ContentError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_question_not_found_message_varies_by_operation() {
        let for_listing = ContentError::QuestionNotFound(
            "The question with entered uuid whose details are to be seen does not exist",
        );
        let for_edit = ContentError::QuestionNotFound("Entered question uuid does not exist");

        assert_eq!(for_listing.code(), for_edit.code());
        assert_ne!(for_listing.to_string(), for_edit.to_string());
    }

    #[test]
    fn test_auth_errors_pass_through() {
        let err: ContentError = AuthError::SessionMissing.into();
        assert_eq!(err.code(), "ATHR-001");
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err: ContentError =
            AuthError::SessionEnded("User is signed out.Sign in first to post an answer".into())
                .into();
        assert_eq!(err.code(), "ATHR-002");
        assert_eq!(
            err.to_string(),
            "User is signed out.Sign in first to post an answer"
        );

        let err: ContentError = AuthError::Forbidden("Only the answer owner can edit the answer").into();
        assert_eq!(err.code(), "ATHR-003");
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }
}

mod dto_tests {
    use crate::presentation::dto::{
        AnswerDetailsResponse, AnswerRequest, QuestionEditRequest, QuestionRequest,
        QuestionResponse,
    };

    #[test]
    fn test_question_request_shapes() {
        let req: QuestionRequest =
            serde_json::from_str(r#"{"content": "What is a lifetime?"}"#).unwrap();
        assert_eq!(req.content, "What is a lifetime?");

        let req: QuestionEditRequest = serde_json::from_str(r#"{"content": "edited"}"#).unwrap();
        assert_eq!(req.content, "edited");
    }

    #[test]
    fn test_answer_request_field_is_answer() {
        let req: AnswerRequest = serde_json::from_str(r#"{"answer": "42"}"#).unwrap();
        assert_eq!(req.answer, "42");
    }

    #[test]
    fn test_question_response_envelope() {
        let body = QuestionResponse {
            id: "some-uuid".to_string(),
            status: "QUESTION CREATED".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["id"], "some-uuid");
        assert_eq!(json["status"], "QUESTION CREATED");
    }

    #[test]
    fn test_answer_details_uses_camel_case() {
        let body = AnswerDetailsResponse {
            id: "a-uuid".to_string(),
            question_content: "q".to_string(),
            answer_content: "a".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["questionContent"], "q");
        assert_eq!(json["answerContent"], "a");
        assert!(json.get("question_content").is_none());
    }
}
