//! Resource Ownership
//!
//! Only the user that created a document (or a sub-entry of one) may
//! mutate or delete it.

use crate::error::app_error::{AppError, AppResult};
use crate::id::UserId;

/// A document or sub-entry with a single owning user
pub trait Owned {
    fn owner_id(&self) -> &UserId;

    fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }
}

/// Fails with 403 when `actor` does not own `resource`
pub fn ensure_owner<R: Owned + ?Sized>(resource: &R, actor: &UserId) -> AppResult<()> {
    if resource.is_owned_by(actor) {
        Ok(())
    } else {
        Err(AppError::forbidden("User not authorized"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    struct Note {
        author: UserId,
    }

    impl Owned for Note {
        fn owner_id(&self) -> &UserId {
            &self.author
        }
    }

    #[test]
    fn test_owner_passes() {
        let author = UserId::new();
        let note = Note { author };
        assert!(ensure_owner(&note, &author).is_ok());
    }

    #[test]
    fn test_stranger_is_forbidden() {
        let note = Note { author: UserId::new() };
        let err = ensure_owner(&note, &UserId::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }
}
