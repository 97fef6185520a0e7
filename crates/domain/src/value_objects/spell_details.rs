//! Spell casting requirements: components and casting time.

use serde::Serialize;
use std::fmt;

use crate::common::ensure_unique;
use crate::error::DomainError;
use crate::ids::MaterialComponentId;
use crate::types::CastingTimeUnit;

/// Spell components (what's required to cast).
///
/// # Invariants
///
/// - `materials` holds no duplicate ids
/// - listing materials requires the material flag
#[derive(Debug, Clone, Default, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellComponents {
    verbal: bool,
    somatic: bool,
    material: bool,
    materials: Vec<MaterialComponentId>,
}

impl SpellComponents {
    pub fn new(
        verbal: bool,
        somatic: bool,
        material: bool,
        materials: Vec<MaterialComponentId>,
    ) -> Result<Self, DomainError> {
        ensure_unique(&materials, "Material components")?;
        if !material && !materials.is_empty() {
            return Err(DomainError::invalid_data(
                "Material components require the material flag",
            ));
        }
        Ok(Self {
            verbal,
            somatic,
            material,
            materials,
        })
    }

    pub fn verbal(&self) -> bool {
        self.verbal
    }

    pub fn somatic(&self) -> bool {
        self.somatic
    }

    pub fn material(&self) -> bool {
        self.material
    }

    pub fn materials(&self) -> &[MaterialComponentId] {
        &self.materials
    }
}

/// Material ids are a set; their order does not matter.
impl PartialEq for SpellComponents {
    fn eq(&self, other: &Self) -> bool {
        self.verbal == other.verbal
            && self.somatic == other.somatic
            && self.material == other.material
            && self.materials.len() == other.materials.len()
            && self.materials.iter().all(|id| other.materials.contains(id))
    }
}

/// How long it takes to cast a spell, e.g. "1 action" or "10 minutes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastingTime {
    count: u16,
    unit: CastingTimeUnit,
}

impl CastingTime {
    pub fn new(count: u16, unit: CastingTimeUnit) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::invalid_data("Casting time must be at least 1"));
        }
        Ok(Self { count, unit })
    }

    pub fn action() -> Self {
        Self {
            count: 1,
            unit: CastingTimeUnit::Action,
        }
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn unit(&self) -> CastingTimeUnit {
        self.unit
    }
}

impl fmt::Display for CastingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.unit.display_name())
    }
}
