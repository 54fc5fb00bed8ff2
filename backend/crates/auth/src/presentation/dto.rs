//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email_address: String,
    pub password: Option<String>,
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub dob: Option<String>,
    pub contact_number: Option<String>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
pub struct SignupUserResponse {
    /// Public identifier of the registered user
    pub id: String,
    pub status: String,
}

// ============================================================================
// Sign In / Sign Out
// ============================================================================

/// Sign in response; the access token travels in the `access_token`
/// response header, not in this body
#[derive(Debug, Clone, Serialize)]
pub struct SigninResponse {
    pub id: String,
    pub message: String,
}

/// Sign out response
#[derive(Debug, Clone, Serialize)]
pub struct SignoutResponse {
    pub id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_field_names() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "userName": "ada",
            "emailAddress": "ada@example.com",
            "password": "p4ss",
            "country": "UK",
            "aboutMe": "first programmer",
            "dob": "1815-12-10",
            "contactNumber": "0000000000"
        }"#;
        let req: SignupUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_name, "ada");
        assert_eq!(req.email_address, "ada@example.com");
        assert_eq!(req.password.as_deref(), Some("p4ss"));
    }

    #[test]
    fn test_signup_request_optional_fields() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "userName": "ada",
            "emailAddress": "ada@example.com"
        }"#;
        let req: SignupUserRequest = serde_json::from_str(json).unwrap();
        assert!(req.password.is_none());
        assert!(req.country.is_none());
    }

    #[test]
    fn test_signin_response_shape() {
        let body = SigninResponse {
            id: "uuid-here".to_string(),
            message: "SIGNED IN SUCCESSFULLY".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["id"], "uuid-here");
        assert_eq!(json["message"], "SIGNED IN SUCCESSFULLY");
    }
}
