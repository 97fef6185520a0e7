//! Tool categories.

vocabulary! {
    pub enum ToolType ("tool type") {
        ArtisansTools => ("ARTISANS_TOOLS", "Artisan's tools"),
        GamingSet => ("GAMING_SET", "Gaming set"),
        MusicalInstrument => ("MUSICAL_INSTRUMENT", "Musical instrument"),
        Kit => ("KIT", "Kit"),
        Vehicle => ("VEHICLE", "Vehicle"),
        Other => ("OTHER", "Other tools"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display() {
        for tool_type in ToolType::ALL {
            assert_eq!(ToolType::parse(&tool_type.to_string()), Ok(*tool_type));
        }
        assert!(ToolType::parse("not-a-real-value").expect_err("unknown").is_invalid_data());
    }
}
