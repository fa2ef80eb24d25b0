//! Photo filename generation
//!
//! Photos are stored flat in the collaborator file cache, so the
//! filename alone must identify scope, owner, role, and capture time:
//! `{scope}_{owner-uuid}_{role}_{yyyyMMdd_HHmmss}.{ext}`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{PhotoRole, PhotoScope};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Builds the canonical filename for a photo. A leading dot in
/// `extension` is stripped; timestamps are formatted in UTC.
pub fn filename(
    scope: PhotoScope,
    owner_id: Uuid,
    role: PhotoRole,
    extension: &str,
    taken_at: DateTime<Utc>,
) -> String {
    let ext = extension.strip_prefix('.').unwrap_or(extension);
    format!(
        "{}_{}_{}_{}.{}",
        scope.token(),
        owner_id,
        role.token(),
        taken_at.format(TIMESTAMP_FORMAT),
        ext
    )
}
