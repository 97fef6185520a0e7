//! Measurement units accepted by the quantity value objects.

vocabulary! {
    pub enum WeightUnit ("weight unit") {
        Lb => ("LB", "pounds"),
        Kg => ("KG", "kilograms"),
    }
}

vocabulary! {
    pub enum LengthUnit ("length unit") {
        Ft => ("FT", "feet"),
        M => ("M", "meters"),
    }
}

vocabulary! {
    pub enum TimeUnit ("time unit") {
        Round => ("ROUND", "rounds"),
        Minute => ("MINUTE", "minutes"),
        Hour => ("HOUR", "hours"),
        Day => ("DAY", "days"),
    }
}

impl TimeUnit {
    /// Length of one unit in seconds (a combat round lasts six seconds).
    pub fn in_seconds(&self) -> u64 {
        match self {
            TimeUnit::Round => 6,
            TimeUnit::Minute => 60,
            TimeUnit::Hour => 3_600,
            TimeUnit::Day => 86_400,
        }
    }
}

vocabulary! {
    pub enum CastingTimeUnit ("casting time unit") {
        Action => ("ACTION", "action"),
        BonusAction => ("BONUS_ACTION", "bonus action"),
        Reaction => ("REACTION", "reaction"),
        Minute => ("MINUTE", "minute"),
        Hour => ("HOUR", "hour"),
    }
}
