use crate::artifacts::status::status_type::StatusType;
use derive_new::new;

/// Revision reported for an entry that is scheduled for addition but not yet committed.
pub const UNCOMMITTED_REVISION: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct StatusEntry {
    name: String,
    type_raw_name: String,
    status_type: StatusType,
    revision: Option<i64>,
}

impl StatusEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_raw_name(&self) -> &str {
        &self.type_raw_name
    }

    pub fn status_type(&self) -> StatusType {
        self.status_type
    }

    /// `None` for unversioned entries.
    pub fn revision(&self) -> Option<i64> {
        self.revision
    }

    pub fn is_uncommitted_add(&self) -> bool {
        self.revision == Some(UNCOMMITTED_REVISION)
    }
}

impl std::fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let revision = match self.revision {
            Some(UNCOMMITTED_REVISION) => "-".to_string(),
            Some(revision) => revision.to_string(),
            None => String::new(),
        };

        write!(
            f,
            "{}       {:>8} {}",
            self.status_type.colored_code(),
            revision,
            self.name
        )
    }
}
