//! User use cases.
//!
//! Creating a user needs no actor; every other use case in the engine needs
//! a user created here.

use std::sync::Arc;

use compendium_domain::{User, UserId};

use crate::infrastructure::ports::{NameFilter, UserRepo};
use crate::services::UserService;

use super::error::UseCaseError;
use super::validation::require_available;

const ENTITY: &str = "User";

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub name: String,
}

pub struct UserCrud {
    users: Arc<dyn UserRepo>,
    service: Arc<UserService>,
}

impl UserCrud {
    pub fn new(users: Arc<dyn UserRepo>, service: Arc<UserService>) -> Self {
        Self { users, service }
    }

    pub async fn create(&self, command: CreateUserCommand) -> Result<UserId, UseCaseError> {
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            ENTITY,
            command.name.trim(),
        )?;

        let user = User::new(self.users.next_id().await?, command.name)?;
        self.users.create(&user).await?;

        tracing::info!(user_id = %user.id(), name = %user.name(), "User created");
        Ok(user.id())
    }

    pub async fn get(&self, id: UserId) -> Result<User, UseCaseError> {
        self.users
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: NameFilter) -> Result<Vec<User>, UseCaseError> {
        Ok(self.users.filter(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockUserRepo;

    fn crud(users: MockUserRepo) -> UserCrud {
        let users: Arc<dyn UserRepo> = Arc::new(users);
        UserCrud::new(users.clone(), Arc::new(UserService::new(users)))
    }

    #[tokio::test]
    async fn creates_user_with_fresh_id() {
        let id = UserId::new();
        let mut users = MockUserRepo::new();
        users.expect_name_exists().returning(|_| Ok(false));
        users.expect_next_id().returning(move || Ok(id));
        users
            .expect_create()
            .withf(move |user| user.id() == id && user.name() == "admin")
            .times(1)
            .returning(|_| Ok(()));

        let created = crud(users)
            .create(CreateUserCommand {
                name: "admin".to_string(),
            })
            .await
            .expect("created");
        assert_eq!(created, id);
    }

    #[tokio::test]
    async fn duplicate_name_is_invalid() {
        let mut users = MockUserRepo::new();
        users.expect_name_exists().returning(|_| Ok(true));
        users.expect_create().times(0);

        let error = crud(users)
            .create(CreateUserCommand {
                name: "admin".to_string(),
            })
            .await
            .expect_err("taken");
        assert!(error.is_invalid_data());
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let mut users = MockUserRepo::new();
        users.expect_get().returning(|_| Ok(None));

        let error = crud(users).get(UserId::new()).await.expect_err("missing");
        assert!(error.is_not_found());
    }
}
