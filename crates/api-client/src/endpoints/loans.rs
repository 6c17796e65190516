//! Loan endpoints
//!
//! Maps to `/loan/*`. Responses are enveloped. Loans are created from raw
//! book/member ids but may be read back with embedded summaries instead.

use super::{envelope_list, envelope_one, Routes};
use crate::client::LibraryClient;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use library_admin_core::model::{Book, CreateLoan, Loan, Member, UpdateLoan};
use library_admin_core::references::collect_all;
use library_admin_core::resource::Resource;

const ROUTES: Routes = Routes::new("loan");

/// Loans API interface
#[derive(Clone)]
pub struct LoansApi {
    client: LibraryClient,
}

impl LoansApi {
    /// Create a new loans API interface
    pub(crate) fn new(client: LibraryClient) -> Self {
        Self { client }
    }

    /// List one page of loans
    ///
    /// GET /loan/get/all?page=<page>
    pub async fn list(&self, page: u32) -> ApiResult<Vec<Loan>> {
        let raw = self.client.get(&ROUTES.list(page)).await?;
        envelope_list(raw)
    }

    /// Get a single loan by ID
    ///
    /// GET /loan/get/<id>
    pub async fn get(&self, id: i64) -> ApiResult<Option<Loan>> {
        let raw = self.client.get(&ROUTES.get(id)).await?;
        envelope_one(raw)
    }

    /// Record a new loan
    ///
    /// POST /loan/add
    pub async fn create(&self, loan: &CreateLoan) -> ApiResult<Option<Loan>> {
        let raw = self.client.post(&ROUTES.add(), loan).await?;
        envelope_one(raw)
    }

    /// Update a loan with a partial payload, e.g. to set the return date
    ///
    /// PUT /loan/edit/<id>
    pub async fn update(&self, id: i64, loan: &UpdateLoan) -> ApiResult<Option<Loan>> {
        let raw = self.client.put(&ROUTES.edit(id), loan).await?;
        envelope_one(raw)
    }

    /// Delete a loan
    ///
    /// DELETE /loan/delete/<id>
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&ROUTES.delete(id)).await
    }

    /// Load every book and member for the loan form's reference pickers
    pub async fn references(&self) -> ApiResult<(Vec<Book>, Vec<Member>)> {
        let books = collect_all(&self.client.books()).await?;
        let members = collect_all(&self.client.members()).await?;
        Ok((books, members))
    }
}

#[async_trait]
impl Resource for LoansApi {
    type Entity = Loan;
    type Create = CreateLoan;
    type Update = UpdateLoan;
    type Error = ApiError;

    fn name(&self) -> &'static str {
        "loan"
    }

    async fn list(&self, page: u32) -> ApiResult<Vec<Loan>> {
        LoansApi::list(self, page).await
    }

    async fn get(&self, id: i64) -> ApiResult<Option<Loan>> {
        LoansApi::get(self, id).await
    }

    async fn create(&self, payload: &CreateLoan) -> ApiResult<Option<Loan>> {
        LoansApi::create(self, payload).await
    }

    async fn update(&self, id: i64, payload: &UpdateLoan) -> ApiResult<Option<Loan>> {
        LoansApi::update(self, id, payload).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        LoansApi::delete(self, id).await
    }
}
