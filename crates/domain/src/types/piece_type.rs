//! Coin denominations.

vocabulary! {
    pub enum PieceType ("piece type") {
        Copper => ("COPPER", "Copper piece"),
        Silver => ("SILVER", "Silver piece"),
        Electrum => ("ELECTRUM", "Electrum piece"),
        Gold => ("GOLD", "Gold piece"),
        Platinum => ("PLATINUM", "Platinum piece"),
    }
}

impl PieceType {
    /// Value of one piece expressed in copper.
    pub fn in_copper(&self) -> u64 {
        match self {
            PieceType::Copper => 1,
            PieceType::Silver => 10,
            PieceType::Electrum => 50,
            PieceType::Gold => 100,
            PieceType::Platinum => 1000,
        }
    }
}
