use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Response envelope shared by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub details: Vec<String>,
    /// True only when the backend rejected the credentials (HTTP 401), as
    /// opposed to transport or decode failures.
    pub unauthorized: bool,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
            unauthorized: false,
        }
    }

    pub fn network(source: impl std::fmt::Display) -> Self {
        Self::new(format!("Request failed: {}", source))
    }

    pub fn decode(source: impl std::fmt::Display) -> Self {
        Self::new(format!("Failed to parse response: {}", source))
    }

    /// Builds the user-facing error from an envelope: `message` first,
    /// `errors` as details, generic fallback when the backend sent neither.
    pub fn from_envelope(message: String, errors: Vec<String>) -> Self {
        let trimmed = message.trim();
        let message = if trimmed.is_empty() {
            errors
                .first()
                .cloned()
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
        } else {
            trimmed.to_string()
        };
        Self {
            message,
            details: errors,
            unauthorized: false,
        }
    }

    /// Tags the error as an authentication rejection.
    pub fn into_unauthorized(mut self) -> Self {
        self.unauthorized = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub leave_balance: Option<i32>,
}

/// Payload of a successful login/register. The backend populates `user`
/// or `admin` depending on which tier signed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub admin: Option<Identity>,
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthData {
    pub fn identity(&self) -> Option<&Identity> {
        self.user.as_ref().or(self.admin.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_users: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDirectoryPage {
    pub users: Vec<Identity>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Annual,
    Sick,
    Unpaid,
    Other,
}

impl LeaveType {
    pub const ALL: &'static [LeaveType] = &[
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Unpaid,
        LeaveType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual leave",
            LeaveType::Sick => "Sick leave",
            LeaveType::Unpaid => "Unpaid leave",
            LeaveType::Other => "Other",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Unpaid => "unpaid",
            LeaveType::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<LeaveType> {
        match raw {
            "annual" => Some(LeaveType::Annual),
            "sick" => Some(LeaveType::Sick),
            "unpaid" => Some(LeaveType::Unpaid),
            "other" => Some(LeaveType::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Cancelled => "cancelled",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
            LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
            LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
            LeaveStatus::Cancelled => "bg-surface-muted text-fg-muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub decision_comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecisionRequest {
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTypeCount {
    pub leave_type: LeaveType,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStatistics {
    pub total_users: i64,
    pub total_requests: i64,
    pub pending_requests: i64,
    pub approved_requests: i64,
    pub rejected_requests: i64,
    #[serde(default)]
    pub by_type: Vec<LeaveTypeCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_deserializes_camel_case_auth_payload() {
        let value = json!({
            "success": true,
            "message": "Logged in",
            "data": {
                "user": {
                    "id": "u1",
                    "name": "Alice",
                    "email": "alice@example.com",
                    "role": "user",
                    "leaveBalance": 12
                },
                "accessToken": "abc",
                "refreshToken": "xyz"
            }
        });
        let envelope: ApiEnvelope<AuthData> = serde_json::from_value(value).unwrap();
        assert!(envelope.success);
        let data = envelope.data.unwrap();
        assert_eq!(data.access_token, "abc");
        assert_eq!(data.refresh_token, "xyz");
        let identity = data.identity().unwrap();
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.leave_balance, Some(12));
    }

    #[test]
    fn auth_payload_prefers_user_over_admin_slot() {
        let value = json!({
            "admin": {
                "id": "a1",
                "name": "Root",
                "email": "root@example.com",
                "role": "admin"
            },
            "accessToken": "abc",
            "refreshToken": "xyz"
        });
        let data: AuthData = serde_json::from_value(value).unwrap();
        assert_eq!(data.identity().unwrap().role, Role::Admin);
    }

    #[test]
    fn error_from_envelope_uses_message_then_errors_then_fallback() {
        let err = ApiError::from_envelope("Invalid credentials".into(), vec![]);
        assert_eq!(err.message, "Invalid credentials");

        let err = ApiError::from_envelope(String::new(), vec!["Email is required".into()]);
        assert_eq!(err.message, "Email is required");
        assert_eq!(err.details, vec!["Email is required".to_string()]);

        let err = ApiError::from_envelope("  ".into(), vec![]);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn pagination_round_trips_camel_case() {
        let value = json!({
            "currentPage": 2,
            "totalPages": 5,
            "totalUsers": 42,
            "hasNext": true,
            "hasPrev": true
        });
        let page: Pagination = serde_json::from_value(value).unwrap();
        assert_eq!(page.current_page, 2);
        assert!(page.has_next);
    }

    #[test]
    fn leave_type_parse_matches_wire_names() {
        for ty in LeaveType::ALL {
            assert_eq!(LeaveType::parse(ty.as_str()), Some(*ty));
        }
        assert_eq!(LeaveType::parse("sabbatical"), None);
    }

    #[test]
    fn leave_request_accepts_missing_optionals() {
        let value = json!({
            "id": "lr1",
            "userId": "u1",
            "leaveType": "sick",
            "startDate": "2024-03-04",
            "endDate": "2024-03-05",
            "days": 2,
            "status": "pending",
            "createdAt": "2024-03-01T09:00:00Z"
        });
        let request: LeaveRequest = serde_json::from_value(value).unwrap();
        assert_eq!(request.leave_type, LeaveType::Sick);
        assert_eq!(request.status, LeaveStatus::Pending);
        assert!(request.reason.is_none());
        assert!(request.user_name.is_none());
    }
}
