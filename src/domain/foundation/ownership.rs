//! Ownership trait for user-owned resources.
//!
//! Blogs and articles each belong to exactly one account. Handlers scope
//! every read and write through this trait so the rule lives in one place:
//! owners see their own resources, administrators see everything.
//!
//! # Example
//!
//! ```ignore
//! impl OwnedByUser for Blog {
//!     fn owner_id(&self) -> &UserId {
//!         &self.owner_id
//!     }
//! }
//!
//! // In a handler:
//! blog.check_ownership(&user_id)?;  // Returns Err(Forbidden) if not owner
//! ```

use super::{AuthenticatedUser, DomainError, ErrorCode, UserId};

/// Trait for aggregates that have a single owner.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Owners and administrators may see the resource.
    fn is_visible_to(&self, user: &AuthenticatedUser) -> bool {
        user.is_admin || self.is_owner(&user.id)
    }

    /// Validates ownership, returning a `Forbidden` error if the user is not the owner.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User does not own this resource",
            )
            .with_detail("owner_id", self.owner_id().to_string())
            .with_detail("requested_by", user_id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        owner: UserId,
    }

    impl OwnedByUser for TestResource {
        fn owner_id(&self) -> &UserId {
            &self.owner
        }
    }

    fn test_user(id: i64) -> UserId {
        UserId::new(id).unwrap()
    }

    fn identity(id: i64, is_admin: bool) -> AuthenticatedUser {
        AuthenticatedUser::new(test_user(id), "someone", "someone@example.com", is_admin)
    }

    #[test]
    fn is_owner_distinguishes_owner_from_others() {
        let resource = TestResource { owner: test_user(1) };

        assert!(resource.is_owner(&test_user(1)));
        assert!(!resource.is_owner(&test_user(2)));
    }

    #[test]
    fn admins_can_see_resources_they_do_not_own() {
        let resource = TestResource { owner: test_user(1) };

        assert!(resource.is_visible_to(&identity(1, false)));
        assert!(!resource.is_visible_to(&identity(2, false)));
        assert!(resource.is_visible_to(&identity(2, true)));
    }

    #[test]
    fn check_ownership_error_includes_details() {
        let resource = TestResource { owner: test_user(1) };

        assert!(resource.check_ownership(&test_user(1)).is_ok());

        let err = resource.check_ownership(&test_user(2)).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.details.get("owner_id"), Some(&"1".to_string()));
        assert_eq!(err.details.get("requested_by"), Some(&"2".to_string()));
    }
}
