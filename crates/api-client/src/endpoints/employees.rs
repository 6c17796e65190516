//! Employee endpoints
//!
//! Maps to `/employe/*` (the backend spells the segment with one `e`).
//! Responses are enveloped like members.

use super::{envelope_list, envelope_one, Routes};
use crate::client::LibraryClient;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use library_admin_core::model::{CreateEmployee, Employee, UpdateEmployee};
use library_admin_core::resource::Resource;

const ROUTES: Routes = Routes::new("employe");

/// Employees API interface
#[derive(Clone)]
pub struct EmployeesApi {
    client: LibraryClient,
}

impl EmployeesApi {
    /// Create a new employees API interface
    pub(crate) fn new(client: LibraryClient) -> Self {
        Self { client }
    }

    /// List one page of employees
    pub async fn list(&self, page: u32) -> ApiResult<Vec<Employee>> {
        let raw = self.client.get(&ROUTES.list(page)).await?;
        envelope_list(raw)
    }

    /// Get a single employee by ID
    pub async fn get(&self, id: i64) -> ApiResult<Option<Employee>> {
        let raw = self.client.get(&ROUTES.get(id)).await?;
        envelope_one(raw)
    }

    /// Add an employee
    pub async fn create(&self, employee: &CreateEmployee) -> ApiResult<Option<Employee>> {
        let raw = self.client.post(&ROUTES.add(), employee).await?;
        envelope_one(raw)
    }

    /// Update an employee with a partial payload
    pub async fn update(
        &self,
        id: i64,
        employee: &UpdateEmployee,
    ) -> ApiResult<Option<Employee>> {
        let raw = self.client.put(&ROUTES.edit(id), employee).await?;
        envelope_one(raw)
    }

    /// Delete an employee
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&ROUTES.delete(id)).await
    }
}

#[async_trait]
impl Resource for EmployeesApi {
    type Entity = Employee;
    type Create = CreateEmployee;
    type Update = UpdateEmployee;
    type Error = ApiError;

    fn name(&self) -> &'static str {
        "employee"
    }

    async fn list(&self, page: u32) -> ApiResult<Vec<Employee>> {
        EmployeesApi::list(self, page).await
    }

    async fn get(&self, id: i64) -> ApiResult<Option<Employee>> {
        EmployeesApi::get(self, id).await
    }

    async fn create(&self, payload: &CreateEmployee) -> ApiResult<Option<Employee>> {
        EmployeesApi::create(self, payload).await
    }

    async fn update(&self, id: i64, payload: &UpdateEmployee) -> ApiResult<Option<Employee>> {
        EmployeesApi::update(self, id, payload).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        EmployeesApi::delete(self, id).await
    }
}
