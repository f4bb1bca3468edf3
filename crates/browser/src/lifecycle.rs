use thiserror::Error;

/// Soft-removal lifecycle of a record.
///
/// Active and Archived are interchangeable through archive/unarchive;
/// Deleted is absorbing — no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveState {
    Active,
    Archived,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("record is already archived")]
    AlreadyArchived,
    #[error("record is not archived")]
    NotArchived,
    #[error("record has been deleted")]
    Deleted,
}

impl ArchiveState {
    pub fn from_flag(archived: bool) -> Self {
        if archived {
            ArchiveState::Archived
        } else {
            ArchiveState::Active
        }
    }

    pub fn archive(self) -> Result<Self, LifecycleError> {
        match self {
            ArchiveState::Active => Ok(ArchiveState::Archived),
            ArchiveState::Archived => Err(LifecycleError::AlreadyArchived),
            ArchiveState::Deleted => Err(LifecycleError::Deleted),
        }
    }

    pub fn unarchive(self) -> Result<Self, LifecycleError> {
        match self {
            ArchiveState::Archived => Ok(ArchiveState::Active),
            ArchiveState::Active => Err(LifecycleError::NotArchived),
            ArchiveState::Deleted => Err(LifecycleError::Deleted),
        }
    }

    pub fn delete(self) -> Result<Self, LifecycleError> {
        match self {
            ArchiveState::Active | ArchiveState::Archived => Ok(ArchiveState::Deleted),
            ArchiveState::Deleted => Err(LifecycleError::Deleted),
        }
    }

    pub fn is_archived(self) -> bool {
        self == ArchiveState::Archived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_then_unarchive_returns_to_active() {
        let archived = ArchiveState::Active.archive().unwrap();
        assert_eq!(archived, ArchiveState::Archived);
        assert!(archived.is_archived());
        assert_eq!(archived.unarchive().unwrap(), ArchiveState::Active);
    }

    #[test]
    fn double_archive_is_rejected() {
        assert_eq!(
            ArchiveState::Archived.archive(),
            Err(LifecycleError::AlreadyArchived)
        );
        assert_eq!(
            ArchiveState::Active.unarchive(),
            Err(LifecycleError::NotArchived)
        );
    }

    #[test]
    fn deleted_is_absorbing() {
        let deleted = ArchiveState::Archived.delete().unwrap();
        assert_eq!(deleted, ArchiveState::Deleted);
        assert_eq!(deleted.archive(), Err(LifecycleError::Deleted));
        assert_eq!(deleted.unarchive(), Err(LifecycleError::Deleted));
        assert_eq!(deleted.delete(), Err(LifecycleError::Deleted));
    }

    #[test]
    fn delete_is_reachable_from_both_live_states() {
        assert_eq!(ArchiveState::Active.delete().unwrap(), ArchiveState::Deleted);
        assert_eq!(
            ArchiveState::Archived.delete().unwrap(),
            ArchiveState::Deleted
        );
    }
}
