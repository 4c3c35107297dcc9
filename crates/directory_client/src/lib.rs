//! HTTP access to the remote employee collection resource.
//!
//! The collection lives at `{base_url}/employees`; individual records at
//! `{base_url}/employees/{id}`. Every operation is a single round-trip with
//! no retry and no caching — failures are returned to the caller as-is.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::EmployeeId,
    protocol::{Employee, EmployeeDraft},
};
use tracing::debug;

pub mod error;

pub use error::DirectoryError;

/// Seam between the UI layer and the remote employee API.
///
/// The desktop backend worker talks to this trait, which keeps the
/// controller testable against an in-memory fake.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, DirectoryError>;
    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee, DirectoryError>;
    async fn update_employee(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Employee, DirectoryError>;
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), DirectoryError>;
}

/// `reqwest`-backed client for the employee collection resource.
#[derive(Debug, Clone)]
pub struct RestDirectoryClient {
    http: Client,
    base_url: String,
}

impl RestDirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    fn record_url(&self, id: EmployeeId) -> String {
        format!("{}/employees/{}", self.base_url, id.0)
    }
}

#[async_trait]
impl EmployeeDirectory for RestDirectoryClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, DirectoryError> {
        debug!(url = %self.collection_url(), "listing employees");
        let response = self.http.get(self.collection_url()).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee, DirectoryError> {
        debug!(url = %self.collection_url(), "creating employee");
        let response = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Employee, DirectoryError> {
        debug!(employee_id = id.0, "updating employee");
        let response = self
            .http
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), DirectoryError> {
        debug!(employee_id = id.0, "deleting employee");
        let response = self.http.delete(self.record_url(id)).send().await?;
        // Response body is ignored; any success status counts.
        check_status(response).await?;
        Ok(())
    }
}

/// Map a non-success response to [`DirectoryError::Status`], keeping the
/// body text for the diagnostic log.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, DirectoryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DirectoryError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests;
