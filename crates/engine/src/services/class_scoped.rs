//! Services for entities whose uniqueness is scoped to a class or subclass.

use std::sync::Arc;

use compendium_domain::{CharacterClassId, SubclassId};

use crate::infrastructure::ports::{
    ClassFeatureRepo, ClassLevelRepo, RepoError, SubclassFeatureRepo, SubclassRepo,
};

/// Subclass names are unique within their class.
pub struct SubclassService {
    repo: Arc<dyn SubclassRepo>,
}

impl SubclassService {
    pub fn new(repo: Arc<dyn SubclassRepo>) -> Self {
        Self { repo }
    }

    pub async fn can_create_with_name(
        &self,
        class_id: CharacterClassId,
        name: &str,
    ) -> Result<bool, RepoError> {
        Ok(!self.repo.name_for_class_exists(class_id, name).await?)
    }

    pub async fn can_rename_with_name(
        &self,
        class_id: CharacterClassId,
        name: &str,
    ) -> Result<bool, RepoError> {
        Ok(!self.repo.name_for_class_exists(class_id, name).await?)
    }
}

/// Class feature names are unique within their class.
pub struct ClassFeatureService {
    repo: Arc<dyn ClassFeatureRepo>,
}

impl ClassFeatureService {
    pub fn new(repo: Arc<dyn ClassFeatureRepo>) -> Self {
        Self { repo }
    }

    pub async fn can_create_with_name(
        &self,
        class_id: CharacterClassId,
        name: &str,
    ) -> Result<bool, RepoError> {
        Ok(!self.repo.name_for_class_exists(class_id, name).await?)
    }

    pub async fn can_rename_with_name(
        &self,
        class_id: CharacterClassId,
        name: &str,
    ) -> Result<bool, RepoError> {
        Ok(!self.repo.name_for_class_exists(class_id, name).await?)
    }
}

/// Subclass feature names are unique within their subclass.
pub struct SubclassFeatureService {
    repo: Arc<dyn SubclassFeatureRepo>,
}

impl SubclassFeatureService {
    pub fn new(repo: Arc<dyn SubclassFeatureRepo>) -> Self {
        Self { repo }
    }

    pub async fn can_create_with_name(
        &self,
        subclass_id: SubclassId,
        name: &str,
    ) -> Result<bool, RepoError> {
        Ok(!self.repo.name_for_subclass_exists(subclass_id, name).await?)
    }

    pub async fn can_rename_with_name(
        &self,
        subclass_id: SubclassId,
        name: &str,
    ) -> Result<bool, RepoError> {
        Ok(!self.repo.name_for_subclass_exists(subclass_id, name).await?)
    }
}

/// A class has at most one progression row per level.
pub struct ClassLevelService {
    repo: Arc<dyn ClassLevelRepo>,
}

impl ClassLevelService {
    pub fn new(repo: Arc<dyn ClassLevelRepo>) -> Self {
        Self { repo }
    }

    pub async fn can_create_with_level(
        &self,
        class_id: CharacterClassId,
        level: u8,
    ) -> Result<bool, RepoError> {
        Ok(!self.repo.level_of_class_exists(class_id, level).await?)
    }

    pub async fn can_change_to_level(
        &self,
        class_id: CharacterClassId,
        level: u8,
    ) -> Result<bool, RepoError> {
        Ok(!self.repo.level_of_class_exists(class_id, level).await?)
    }
}
