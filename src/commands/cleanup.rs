use crate::areas::client::LocalClient;
use crate::artifacts::status::status_entry::StatusEntry;
use crate::artifacts::status::status_type::StatusType;
use crate::errors::SvnResult;
use tracing::info;

impl LocalClient {
    /// Cleans up the working copy.
    ///
    /// With both flags off this is the native `svn cleanup` (locks, temporary state).
    /// Otherwise unversioned and/or ignored entries are deleted from disk, each kind
    /// after its own status query, and the native cleanup is skipped. This matches
    /// `svn cleanup --remove-unversioned/--remove-ignored` without requiring svn 1.9.
    ///
    /// Returns the number of filesystem entries removed.
    pub fn cleanup(&self, remove_unversioned: bool, remove_ignored: bool) -> SvnResult<usize> {
        let mut removed = 0;

        if remove_unversioned {
            removed += self.remove_entries_of(StatusType::Unversioned)?;
        }

        if remove_ignored {
            removed += self.remove_entries_of(StatusType::Ignored)?;
        }

        if !remove_unversioned && !remove_ignored {
            self.run_command("cleanup", &[])?;
        }

        Ok(removed)
    }

    fn remove_entries_of(&self, status_type: StatusType) -> SvnResult<usize> {
        // parse everything first so a bad response deletes nothing
        let entries = self
            .status(None)?
            .filter(|entry| {
                entry
                    .as_ref()
                    .map_or(true, |entry| entry.status_type() == status_type)
            })
            .collect::<SvnResult<Vec<StatusEntry>>>()?;

        let mut removed = 0;
        for entry in &entries {
            let path = self.workspace().resolve(entry.name());
            removed += self.workspace().remove_recursively(&path)?;
        }

        info!(
            status = %status_type,
            entries = entries.len(),
            removed,
            "cleanup pass finished"
        );

        Ok(removed)
    }
}
