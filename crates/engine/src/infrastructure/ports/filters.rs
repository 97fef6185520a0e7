//! Filter criteria accepted by the `filter` method of each repository port.
//!
//! Every criterion is optional; `None` means "don't filter on this". Name
//! criteria match a case-insensitive substring. List criteria match when the
//! entity's value (or any of its values, for list-valued fields) is a member.
//! An entity matches a filter when it satisfies every present criterion.

use compendium_domain::{
    Armor, ArmorType, CharacterClass, CharacterClassId, ClassFeature, ClassLevel, CreatureSize,
    CreatureSizeId, CreatureType, CreatureTypeId, DamageType, Feat, Material, MaterialComponent,
    MaterialComponentId, MaterialId, Name, Race, Source, SourceId, Spell, SpellSchool, Subclass,
    SubclassFeature, SubclassId, Tool, ToolType, User, Weapon, WeaponType,
};

/// Predicate over one entity type, implemented by each filter.
pub trait Criteria<E> {
    fn matches(&self, entity: &E) -> bool;
}

fn name_matches(criterion: &Option<String>, name: &Name) -> bool {
    match criterion {
        Some(needle) => name
            .as_str()
            .to_lowercase()
            .contains(&needle.trim().to_lowercase()),
        None => true,
    }
}

fn member_of<T: PartialEq>(criterion: &Option<Vec<T>>, value: &T) -> bool {
    match criterion {
        Some(allowed) => allowed.contains(value),
        None => true,
    }
}

fn any_member_of<T: PartialEq>(criterion: &Option<Vec<T>>, values: &[T]) -> bool {
    match criterion {
        Some(allowed) => values.iter().any(|value| allowed.contains(value)),
        None => true,
    }
}

/// Filter for entities whose only searchable field is their name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFilter {
    pub name: Option<String>,
}

impl NameFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

macro_rules! name_criteria {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl Criteria<$entity> for NameFilter {
                fn matches(&self, entity: &$entity) -> bool {
                    name_matches(&self.name, entity.name())
                }
            }
        )+
    };
}

name_criteria!(User, Source, Material, CreatureType, CreatureSize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialComponentFilter {
    pub name: Option<String>,
    pub consumed: Option<bool>,
}

impl Criteria<MaterialComponent> for MaterialComponentFilter {
    fn matches(&self, component: &MaterialComponent) -> bool {
        name_matches(&self.name, component.name())
            && self.consumed.is_none_or(|consumed| component.consumed() == consumed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmorFilter {
    pub name: Option<String>,
    pub armor_types: Option<Vec<ArmorType>>,
    pub material_ids: Option<Vec<MaterialId>>,
}

impl Criteria<Armor> for ArmorFilter {
    fn matches(&self, armor: &Armor) -> bool {
        name_matches(&self.name, armor.name())
            && member_of(&self.armor_types, &armor.armor_type())
            && member_of(&self.material_ids, &armor.material_id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeaponFilter {
    pub name: Option<String>,
    pub weapon_types: Option<Vec<WeaponType>>,
    pub damage_types: Option<Vec<DamageType>>,
    pub material_ids: Option<Vec<MaterialId>>,
}

impl Criteria<Weapon> for WeaponFilter {
    fn matches(&self, weapon: &Weapon) -> bool {
        name_matches(&self.name, weapon.name())
            && member_of(&self.weapon_types, &weapon.weapon_type())
            && member_of(&self.damage_types, &weapon.damage().damage_type())
            && member_of(&self.material_ids, &weapon.material_id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolFilter {
    pub name: Option<String>,
    pub tool_types: Option<Vec<ToolType>>,
}

impl Criteria<Tool> for ToolFilter {
    fn matches(&self, tool: &Tool) -> bool {
        name_matches(&self.name, tool.name()) && member_of(&self.tool_types, &tool.tool_type())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterClassFilter {
    pub name: Option<String>,
    pub source_ids: Option<Vec<SourceId>>,
}

impl Criteria<CharacterClass> for CharacterClassFilter {
    fn matches(&self, class: &CharacterClass) -> bool {
        name_matches(&self.name, class.name()) && member_of(&self.source_ids, &class.source_id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubclassFilter {
    pub name: Option<String>,
    pub class_ids: Option<Vec<CharacterClassId>>,
}

impl Criteria<Subclass> for SubclassFilter {
    fn matches(&self, subclass: &Subclass) -> bool {
        name_matches(&self.name, subclass.name())
            && member_of(&self.class_ids, &subclass.class_id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassFeatureFilter {
    pub name: Option<String>,
    pub class_ids: Option<Vec<CharacterClassId>>,
    pub levels: Option<Vec<u8>>,
}

impl Criteria<ClassFeature> for ClassFeatureFilter {
    fn matches(&self, feature: &ClassFeature) -> bool {
        name_matches(&self.name, feature.name())
            && member_of(&self.class_ids, &feature.class_id())
            && member_of(&self.levels, &feature.level())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubclassFeatureFilter {
    pub name: Option<String>,
    pub subclass_ids: Option<Vec<SubclassId>>,
    pub levels: Option<Vec<u8>>,
}

impl Criteria<SubclassFeature> for SubclassFeatureFilter {
    fn matches(&self, feature: &SubclassFeature) -> bool {
        name_matches(&self.name, feature.name())
            && member_of(&self.subclass_ids, &feature.subclass_id())
            && member_of(&self.levels, &feature.level())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassLevelFilter {
    pub class_ids: Option<Vec<CharacterClassId>>,
    pub levels: Option<Vec<u8>>,
}

impl Criteria<ClassLevel> for ClassLevelFilter {
    fn matches(&self, class_level: &ClassLevel) -> bool {
        member_of(&self.class_ids, &class_level.class_id())
            && member_of(&self.levels, &class_level.level())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceFilter {
    pub name: Option<String>,
    pub creature_type_ids: Option<Vec<CreatureTypeId>>,
    pub creature_size_ids: Option<Vec<CreatureSizeId>>,
    pub source_ids: Option<Vec<SourceId>>,
}

impl Criteria<Race> for RaceFilter {
    fn matches(&self, race: &Race) -> bool {
        name_matches(&self.name, race.name())
            && member_of(&self.creature_type_ids, &race.creature_type_id())
            && member_of(&self.creature_size_ids, &race.creature_size_id())
            && member_of(&self.source_ids, &race.source_id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatFilter {
    pub name: Option<String>,
    pub caster: Option<bool>,
    pub source_ids: Option<Vec<SourceId>>,
}

impl Criteria<Feat> for FeatFilter {
    fn matches(&self, feat: &Feat) -> bool {
        name_matches(&self.name, feat.name())
            && self.caster.is_none_or(|caster| feat.caster() == caster)
            && member_of(&self.source_ids, &feat.source_id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellFilter {
    pub name: Option<String>,
    pub levels: Option<Vec<u8>>,
    pub schools: Option<Vec<SpellSchool>>,
    pub class_ids: Option<Vec<CharacterClassId>>,
    pub subclass_ids: Option<Vec<SubclassId>>,
    pub material_ids: Option<Vec<MaterialComponentId>>,
    pub source_ids: Option<Vec<SourceId>>,
}

impl Criteria<Spell> for SpellFilter {
    fn matches(&self, spell: &Spell) -> bool {
        name_matches(&self.name, spell.name())
            && member_of(&self.levels, &spell.level())
            && member_of(&self.schools, &spell.school())
            && any_member_of(&self.class_ids, spell.class_ids())
            && any_member_of(&self.subclass_ids, spell.subclass_ids())
            && any_member_of(&self.material_ids, spell.material_ids())
            && member_of(&self.source_ids, &spell.source_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compendium_domain::{ArmorClass, ArmorId, Coins, PieceType, Weight, WeightUnit};

    fn plate(material_id: MaterialId) -> Armor {
        Armor::new(
            ArmorId::new(),
            ArmorType::HeavyArmor,
            "Plate",
            "Interlocking metal plates",
            ArmorClass::flat(18).expect("valid armor class"),
            15,
            true,
            Weight::new(65.0, WeightUnit::Lb).expect("valid weight"),
            Coins::new(1500, PieceType::Gold).expect("valid coins"),
            material_id,
        )
        .expect("valid armor")
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ArmorFilter::default().matches(&plate(MaterialId::new())));
    }

    #[test]
    fn name_is_case_insensitive_substring() {
        let armor = plate(MaterialId::new());
        let filter = ArmorFilter {
            name: Some("LAT".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&armor));
        let filter = ArmorFilter {
            name: Some("chain".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&armor));
    }

    #[test]
    fn all_criteria_must_match() {
        let steel = MaterialId::new();
        let armor = plate(steel);
        let filter = ArmorFilter {
            armor_types: Some(vec![ArmorType::HeavyArmor, ArmorType::Shield]),
            material_ids: Some(vec![steel]),
            ..Default::default()
        };
        assert!(filter.matches(&armor));
        let filter = ArmorFilter {
            armor_types: Some(vec![ArmorType::LightArmor]),
            material_ids: Some(vec![steel]),
            ..Default::default()
        };
        assert!(!filter.matches(&armor));
    }

    #[test]
    fn empty_membership_list_matches_nothing() {
        let filter = ArmorFilter {
            material_ids: Some(vec![]),
            ..Default::default()
        };
        assert!(!filter.matches(&plate(MaterialId::new())));
    }
}
