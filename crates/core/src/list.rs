//! Paged list state for one entity screen
//!
//! [`ListController`] owns the items of the page currently shown and drives
//! every transition of that list:
//!
//! - loading a page (`Idle -> Loading -> Loaded | Failed`)
//! - moving between pages
//! - create/update/delete followed by a full reload of the current page
//!
//! The API does not report a total count. Whether a next page exists is
//! inferred from the last fetch returning a full page of [`PAGE_SIZE`]
//! items, so a last page that is exactly full still offers "next" once.
//!
//! Each load is tagged with a [`LoadTicket`]. Only the most recently issued
//! ticket may change the list, so a slow response for an old page cannot
//! overwrite a newer one.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut books = ListController::new(client.books());
//! books.mount().await;
//!
//! if books.has_next() {
//!     books.next_page().await;
//! }
//!
//! books.remove(42, |_| ask_user("Delete this book?")).await?;
//! ```

use crate::resource::Resource;
use tracing::{debug, info, warn};

/// Items per page; used only to guess whether a next page exists
pub const PAGE_SIZE: usize = 6;

/// Where the list is in its load cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A load is in flight
    Loading,
    /// The last load succeeded
    Loaded,
    /// The last load failed with this message; items are from the last success
    Failed(String),
}

/// Tag for one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    page: u32,
}

impl LoadTicket {
    /// Page this load was issued for
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user confirmed and the entity was deleted
    Deleted,
    /// The user declined; no request was sent
    Cancelled,
}

/// List state and CRUD flow for one resource
pub struct ListController<R: Resource> {
    resource: R,
    items: Vec<R::Entity>,
    page: u32,
    status: LoadStatus,
    issued: u64,
}

impl<R: Resource> ListController<R> {
    /// Create an idle controller; call [`ListController::mount`] to load
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            items: Vec::new(),
            page: 0,
            status: LoadStatus::Idle,
            issued: 0,
        }
    }

    /// The resource this controller drives
    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Items of the last successful load
    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    /// Current zero-based page
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Current load status
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Whether a load is in flight
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Message of the last failed load, if the latest load failed
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the "previous" control is enabled
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// Whether the "next" control is enabled: the shown page is full
    pub fn has_next(&self) -> bool {
        self.items.len() == PAGE_SIZE
    }

    /// Whether the pager should be shown at all
    pub fn shows_pager(&self) -> bool {
        self.has_prev() || self.has_next()
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Initial load at page 0
    pub async fn mount(&mut self) {
        self.set_page(0).await;
    }

    /// Reload the current page
    pub async fn load(&mut self) {
        self.set_page(self.page).await;
    }

    /// Reload the current page on user request
    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Switch to `page` and load it
    pub async fn set_page(&mut self, page: u32) {
        let ticket = self.begin_load(page);
        let result = self.resource.list(ticket.page).await;
        self.finish_load(ticket, result);
    }

    /// Go to the next page if the current one is full
    ///
    /// Returns `false` without loading when "next" is disabled.
    pub async fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.set_page(self.page + 1).await;
        true
    }

    /// Go to the previous page; a no-op on page 0
    pub async fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.set_page(self.page - 1).await;
        true
    }

    /// Mark a load of `page` as started and hand out its ticket
    ///
    /// Hosts that run the fetch themselves (for example on another task)
    /// pair this with [`ListController::finish_load`].
    pub fn begin_load(&mut self, page: u32) -> LoadTicket {
        self.issued += 1;
        self.page = page;
        self.status = LoadStatus::Loading;

        debug!(resource = self.resource.name(), page, seq = self.issued, "Loading page");

        LoadTicket {
            seq: self.issued,
            page,
        }
    }

    /// Apply the outcome of a load
    ///
    /// Returns `false` when the ticket is stale and the result was dropped.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<R::Entity>, R::Error>,
    ) -> bool {
        if ticket.seq != self.issued {
            warn!(
                resource = self.resource.name(),
                page = ticket.page,
                seq = ticket.seq,
                latest = self.issued,
                "Discarding stale page response"
            );
            return false;
        }

        match result {
            Ok(items) => {
                info!(
                    resource = self.resource.name(),
                    page = ticket.page,
                    count = items.len(),
                    "Page loaded"
                );
                self.items = items;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                warn!(
                    resource = self.resource.name(),
                    page = ticket.page,
                    error = %e,
                    "Page load failed"
                );
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Create an entity, then reload the current page
    ///
    /// On error nothing is reloaded and the error goes back to the form.
    pub async fn create(&mut self, payload: &R::Create) -> Result<Option<R::Entity>, R::Error> {
        let created = self.resource.create(payload).await?;
        self.load().await;
        Ok(created)
    }

    /// Apply a partial update, then reload the current page
    pub async fn update(
        &mut self,
        id: i64,
        payload: &R::Update,
    ) -> Result<Option<R::Entity>, R::Error> {
        let updated = self.resource.update(id, payload).await?;
        self.load().await;
        Ok(updated)
    }

    /// Delete after confirmation, then reload the current page
    ///
    /// `confirm` receives the id and decides whether the request is sent.
    /// A failed delete leaves the list untouched and returns the error so
    /// the host can show it in a blocking dialog.
    pub async fn remove<F>(&mut self, id: i64, confirm: F) -> Result<DeleteOutcome, R::Error>
    where
        F: FnOnce(i64) -> bool,
    {
        if !confirm(id) {
            debug!(resource = self.resource.name(), id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        self.resource.delete(id).await?;
        info!(resource = self.resource.name(), id, "Deleted");
        self.load().await;
        Ok(DeleteOutcome::Deleted)
    }
}
