use super::{
    client::ApiClient,
    types::{ApiError, UserDirectoryPage},
};

impl ApiClient {
    pub async fn admin_users(&self, page: i64) -> Result<UserDirectoryPage, ApiError> {
        self.get(&format!("/admin/users?page={}", page)).await
    }
}
