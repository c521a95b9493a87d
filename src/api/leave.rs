use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        ApiError, CreateLeaveRequest, LeaveDecisionRequest, LeaveRequest, LeaveStatistics,
        LeaveStatus,
    },
};

impl ApiClient {
    pub async fn my_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get("/leave/me").await
    }

    pub async fn create_leave_request(
        &self,
        request: &CreateLeaveRequest,
    ) -> Result<LeaveRequest, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::decode)?;
        self.post("/leave", &body).await
    }

    pub async fn cancel_leave_request(&self, id: &str) -> Result<LeaveRequest, ApiError> {
        self.patch(&format!("/leave/{}/cancel", id), &json!({})).await
    }

    pub async fn admin_leave_requests(
        &self,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveRequest>, ApiError> {
        let path = match status {
            Some(status) => format!("/admin/leave?status={}", status.as_str()),
            None => "/admin/leave".to_string(),
        };
        self.get(&path).await
    }

    pub async fn decide_leave_request(
        &self,
        id: &str,
        decision: &LeaveDecisionRequest,
    ) -> Result<LeaveRequest, ApiError> {
        let body = serde_json::to_value(decision).map_err(ApiError::decode)?;
        self.patch(&format!("/admin/leave/{}", id), &body).await
    }

    pub async fn leave_statistics(&self) -> Result<LeaveStatistics, ApiError> {
        self.get("/admin/statistics").await
    }
}
