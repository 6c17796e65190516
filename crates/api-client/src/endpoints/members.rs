//! Member endpoints
//!
//! Maps to `/member/*`. Every response is wrapped in an envelope whose
//! `data` field carries the payload.

use super::{envelope_list, envelope_one, Routes};
use crate::client::LibraryClient;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use library_admin_core::model::{CreateMember, Member, UpdateMember};
use library_admin_core::resource::Resource;

const ROUTES: Routes = Routes::new("member");

/// Members API interface
#[derive(Clone)]
pub struct MembersApi {
    client: LibraryClient,
}

impl MembersApi {
    /// Create a new members API interface
    pub(crate) fn new(client: LibraryClient) -> Self {
        Self { client }
    }

    /// List one page of members
    ///
    /// GET /member/get/all?page=<page>
    pub async fn list(&self, page: u32) -> ApiResult<Vec<Member>> {
        let raw = self.client.get(&ROUTES.list(page)).await?;
        envelope_list(raw)
    }

    /// Get a single member by ID
    ///
    /// GET /member/get/<id>
    pub async fn get(&self, id: i64) -> ApiResult<Option<Member>> {
        let raw = self.client.get(&ROUTES.get(id)).await?;
        envelope_one(raw)
    }

    /// Register a new member
    ///
    /// POST /member/add
    pub async fn create(&self, member: &CreateMember) -> ApiResult<Option<Member>> {
        let raw = self.client.post(&ROUTES.add(), member).await?;
        envelope_one(raw)
    }

    /// Update a member with a partial payload
    ///
    /// PUT /member/edit/<id>
    pub async fn update(&self, id: i64, member: &UpdateMember) -> ApiResult<Option<Member>> {
        let raw = self.client.put(&ROUTES.edit(id), member).await?;
        envelope_one(raw)
    }

    /// Delete a member
    ///
    /// DELETE /member/delete/<id>
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&ROUTES.delete(id)).await
    }
}

#[async_trait]
impl Resource for MembersApi {
    type Entity = Member;
    type Create = CreateMember;
    type Update = UpdateMember;
    type Error = ApiError;

    fn name(&self) -> &'static str {
        "member"
    }

    async fn list(&self, page: u32) -> ApiResult<Vec<Member>> {
        MembersApi::list(self, page).await
    }

    async fn get(&self, id: i64) -> ApiResult<Option<Member>> {
        MembersApi::get(self, id).await
    }

    async fn create(&self, payload: &CreateMember) -> ApiResult<Option<Member>> {
        MembersApi::create(self, payload).await
    }

    async fn update(&self, id: i64, payload: &UpdateMember) -> ApiResult<Option<Member>> {
        MembersApi::update(self, id, payload).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        MembersApi::delete(self, id).await
    }
}
