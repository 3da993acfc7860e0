//! Admin account management: listing, role changes and deletion.
//!
//! Callers are already known to be administrators; the HTTP layer enforces
//! that with `RequireAdmin`. These handlers only guard against an admin
//! locking themselves out.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AuthenticatedUser, UserId};
use crate::domain::user::{AccountError, UserAccount};
use crate::ports::UserRepository;

/// Lists every account, newest first.
pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self) -> Result<Vec<UserAccount>, AccountError> {
        Ok(self.users.list().await?)
    }
}

/// Command to grant or revoke the administrator role.
#[derive(Debug, Clone)]
pub struct SetUserRoleCommand {
    pub actor: AuthenticatedUser,
    pub user_id: UserId,
    pub is_admin: bool,
}

pub struct SetUserRoleHandler {
    users: Arc<dyn UserRepository>,
}

impl SetUserRoleHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: SetUserRoleCommand) -> Result<UserAccount, AccountError> {
        if cmd.user_id == cmd.actor.id && !cmd.is_admin {
            return Err(AccountError::SelfModification(
                "You cannot remove your own administrator role".to_string(),
            ));
        }

        let mut account = self
            .users
            .find_by_id(cmd.user_id)
            .await?
            .ok_or(AccountError::NotFound(cmd.user_id))?;

        account.set_admin(cmd.is_admin);
        self.users.update(&account).await?;

        info!(
            user_id = %cmd.user_id,
            is_admin = cmd.is_admin,
            changed_by = %cmd.actor.id,
            "User role changed"
        );

        Ok(account)
    }
}

/// Command to delete an account and everything it owns.
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub actor: AuthenticatedUser,
    pub user_id: UserId,
}

pub struct DeleteUserHandler {
    users: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: DeleteUserCommand) -> Result<(), AccountError> {
        if cmd.user_id == cmd.actor.id {
            return Err(AccountError::SelfModification(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !self.users.delete(cmd.user_id).await? {
            return Err(AccountError::NotFound(cmd.user_id));
        }

        info!(user_id = %cmd.user_id, deleted_by = %cmd.actor.id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::blog::BlogDetails;
    use crate::domain::user::NewUser;
    use crate::ports::BlogRepository;

    async fn seed_user(store: &InMemoryStore, username: &str, is_admin: bool) -> UserAccount {
        UserRepository::create(
            store,
            NewUser {
                username: username.to_string(),
                email: format!("{}@example.com", username),
                password_hash: "hash".to_string(),
                is_admin,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn lists_users_newest_first() {
        let store = InMemoryStore::new();
        seed_user(&store, "first", false).await;
        seed_user(&store, "second", false).await;

        let users = ListUsersHandler::new(Arc::new(store)).handle().await.unwrap();

        let names: Vec<&str> = users.iter().map(|u| u.username()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn promotes_and_demotes_other_users() {
        let store = InMemoryStore::new();
        let admin = seed_user(&store, "root", true).await;
        let target = seed_user(&store, "bob", false).await;
        let handler = SetUserRoleHandler::new(Arc::new(store.clone()));

        let promoted = handler
            .handle(SetUserRoleCommand {
                actor: admin.identity(),
                user_id: target.id(),
                is_admin: true,
            })
            .await
            .unwrap();
        assert!(promoted.is_admin());

        let demoted = handler
            .handle(SetUserRoleCommand {
                actor: admin.identity(),
                user_id: target.id(),
                is_admin: false,
            })
            .await
            .unwrap();
        assert!(!demoted.is_admin());

        let stored = UserRepository::find_by_id(&store, target.id()).await.unwrap().unwrap();
        assert!(!stored.is_admin());
    }

    #[tokio::test]
    async fn admin_cannot_demote_self() {
        let store = InMemoryStore::new();
        let admin = seed_user(&store, "root", true).await;

        let err = SetUserRoleHandler::new(Arc::new(store))
            .handle(SetUserRoleCommand {
                actor: admin.identity(),
                user_id: admin.id(),
                is_admin: false,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::SelfModification(_)));
    }

    #[tokio::test]
    async fn role_change_for_unknown_user_is_not_found() {
        let store = InMemoryStore::new();
        let admin = seed_user(&store, "root", true).await;
        let ghost = UserId::new(999).unwrap();

        let err = SetUserRoleHandler::new(Arc::new(store))
            .handle(SetUserRoleCommand {
                actor: admin.identity(),
                user_id: ghost,
                is_admin: true,
            })
            .await
            .unwrap_err();

        assert_eq!(err, AccountError::NotFound(ghost));
    }

    #[tokio::test]
    async fn deleting_user_cascades_to_blogs() {
        let store = InMemoryStore::new();
        let admin = seed_user(&store, "root", true).await;
        let target = seed_user(&store, "bob", false).await;
        let details =
            BlogDetails::new("Bob's Blog", "https://bob.example.com", "bob", "0123456789", vec![])
                .unwrap();
        let blog = BlogRepository::create(&store, target.id(), details).await.unwrap();

        DeleteUserHandler::new(Arc::new(store.clone()))
            .handle(DeleteUserCommand {
                actor: admin.identity(),
                user_id: target.id(),
            })
            .await
            .unwrap();

        assert!(UserRepository::find_by_id(&store, target.id()).await.unwrap().is_none());
        assert!(BlogRepository::find_by_id(&store, blog.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn admin_cannot_delete_self() {
        let store = InMemoryStore::new();
        let admin = seed_user(&store, "root", true).await;

        let err = DeleteUserHandler::new(Arc::new(store))
            .handle(DeleteUserCommand {
                actor: admin.identity(),
                user_id: admin.id(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::SelfModification(_)));
    }
}
