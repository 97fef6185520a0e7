//! Command shapes shared by every entity's use cases.

use compendium_domain::UserId;

use super::error::UseCaseError;

/// A partial set of field changes; every field is optional.
pub trait Changes {
    /// True when no field is set.
    fn is_empty(&self) -> bool;
}

/// Update request for one entity. Construction fails when `changes` carries
/// no field at all, so an empty update never reaches a use case.
#[derive(Debug, Clone)]
pub struct UpdateCommand<I, C> {
    user_id: UserId,
    id: I,
    changes: C,
}

impl<I: Copy, C: Changes> UpdateCommand<I, C> {
    pub fn new(user_id: UserId, id: I, changes: C) -> Result<Self, UseCaseError> {
        if changes.is_empty() {
            return Err(UseCaseError::invalid_data("no data to update"));
        }
        Ok(Self {
            user_id,
            id,
            changes,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn id(&self) -> I {
        self.id
    }

    pub fn changes(&self) -> &C {
        &self.changes
    }

    pub fn into_changes(self) -> C {
        self.changes
    }
}

/// Delete request for one entity.
#[derive(Debug, Clone, Copy)]
pub struct DeleteCommand<I> {
    pub user_id: UserId,
    pub id: I,
}

impl<I> DeleteCommand<I> {
    pub fn new(user_id: UserId, id: I) -> Self {
        Self { user_id, id }
    }
}

/// Implements [`Changes`] for a struct whose fields are all `Option`s.
macro_rules! impl_changes {
    ($changes:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::use_cases::command::Changes for $changes {
            fn is_empty(&self) -> bool {
                $(self.$field.is_none())&&+
            }
        }
    };
}

pub(crate) use impl_changes;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct NameChange {
        name: Option<String>,
        description: Option<String>,
    }

    impl_changes!(NameChange { name, description });

    #[test]
    fn empty_update_is_rejected_at_construction() {
        let error = UpdateCommand::new(UserId::new(), 7u32, NameChange::default())
            .expect_err("no fields");
        assert!(error.is_invalid_data());
        assert_eq!(error.to_string(), "Invalid data: no data to update");
    }

    #[test]
    fn any_single_field_is_enough() {
        let command = UpdateCommand::new(
            UserId::new(),
            7u32,
            NameChange {
                description: Some("New".to_string()),
                ..Default::default()
            },
        )
        .expect("one field set");
        assert_eq!(command.id(), 7);
        assert!(command.changes().name.is_none());
    }
}
