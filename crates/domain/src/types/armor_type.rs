//! Armor categories.

vocabulary! {
    /// Category of an armor piece, which drives how Dexterity applies to AC.
    pub enum ArmorType ("armor type") {
        LightArmor => ("LIGHT_ARMOR", "Light armor"),
        MediumArmor => ("MEDIUM_ARMOR", "Medium armor"),
        HeavyArmor => ("HEAVY_ARMOR", "Heavy armor"),
        Shield => ("SHIELD", "Shield"),
    }
}
