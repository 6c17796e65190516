//! Reference lookups for the loan form
//!
//! A loan names one book and one member. The form loads every book and
//! member up front so the user can type either an id or a name.

use crate::list::PAGE_SIZE;
use crate::model::Record;
use crate::resource::Resource;
use tracing::debug;

/// Extra pages fetched after the first one before giving up
pub const MAX_REFERENCE_PAGES: u32 = 50;

/// Fetch every page of `resource` until a short page comes back
///
/// Stops after page [`MAX_REFERENCE_PAGES`] even if pages keep coming back
/// full.
pub async fn collect_all<R: Resource>(resource: &R) -> Result<Vec<R::Entity>, R::Error> {
    let mut all = Vec::new();
    let mut page = 0;

    loop {
        let batch = resource.list(page).await?;
        let short = batch.len() < PAGE_SIZE;
        all.extend(batch);

        if short || page >= MAX_REFERENCE_PAGES {
            break;
        }
        page += 1;
    }

    debug!(resource = resource.name(), pages = page + 1, count = all.len(), "Collected references");
    Ok(all)
}

/// Resolve the id a user meant for a reference field
///
/// In order of preference: an id picked explicitly, the query read as a
/// positive integer, then a case-insensitive exact name match.
pub fn resolve_reference<E: Record>(
    explicit: Option<i64>,
    query: &str,
    candidates: &[E],
) -> Option<i64> {
    if let Some(id) = explicit.filter(|id| *id > 0) {
        return Some(id);
    }

    let query = query.trim();
    if let Ok(id) = query.parse::<i64>() {
        if id > 0 {
            return Some(id);
        }
    }

    if query.is_empty() {
        return None;
    }

    let wanted = query.to_lowercase();
    candidates
        .iter()
        .find(|c| c.display_name().to_lowercase() == wanted)
        .map(Record::id)
}
