use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::foundation::{DomainError, ErrorCode, OwnedByUser, Timestamp, UserId};
use crate::domain::user::{NewUser, UserAccount};
use crate::ports::UserRepository;

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<UserAccount, DomainError> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.username() == user.username) {
            return Err(
                DomainError::new(ErrorCode::DuplicateUsername, "Username already taken")
                    .with_detail("username", user.username),
            );
        }
        if state.users.values().any(|u| u.email() == user.email) {
            return Err(
                DomainError::new(ErrorCode::DuplicateEmail, "Email already registered")
                    .with_detail("email", user.email),
            );
        }

        let id = state.allocate_id();
        let now = Timestamp::now();
        let account = UserAccount::reconstitute(UserId::new(id)?, user, now, now);
        state.users.insert(id, account.clone());
        Ok(account)
    }

    async fn update(&self, user: &UserAccount) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state.users.get_mut(&user.id().as_i64()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::UserNotFound, "User not found")),
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, DomainError> {
        Ok(self.state.read().await.users.get(&id.as_i64()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<UserAccount>, DomainError> {
        Ok(self.state.read().await.users.values().rev().cloned().collect())
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        if state.users.remove(&id.as_i64()).is_none() {
            return Ok(false);
        }
        state.blogs.retain(|_, blog| !blog.is_owner(&id));
        state.articles.retain(|_, article| !article.is_owner(&id));
        Ok(true)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.state.read().await.users.len() as u64)
    }
}
