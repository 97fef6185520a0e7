//! Coins value object - an amount of currency normalized to copper.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::types::PieceType;

/// An amount of money.
///
/// Stored in copper; every other denomination is a derived view. Two
/// amounts are equal when they are worth the same number of copper
/// pieces, regardless of the denomination they were built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coins {
    copper: u64,
}

impl Coins {
    /// Build an amount from a count of pieces of one denomination.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if `count` is negative or the
    /// copper value overflows.
    pub fn new(count: i64, piece_type: PieceType) -> Result<Self, DomainError> {
        let count = u64::try_from(count).map_err(|_| {
            DomainError::invalid_data(format!("Coin count cannot be negative, got {}", count))
        })?;
        let copper = count
            .checked_mul(piece_type.in_copper())
            .ok_or_else(|| DomainError::invalid_data("Coin amount is too large"))?;
        Ok(Self { copper })
    }

    pub fn zero() -> Self {
        Self { copper: 0 }
    }

    pub fn is_zero(&self) -> bool {
        self.copper == 0
    }

    pub fn in_copper(&self) -> u64 {
        self.copper
    }

    pub fn in_silver(&self) -> f64 {
        self.in_piece(PieceType::Silver)
    }

    pub fn in_electrum(&self) -> f64 {
        self.in_piece(PieceType::Electrum)
    }

    pub fn in_gold(&self) -> f64 {
        self.in_piece(PieceType::Gold)
    }

    pub fn in_platinum(&self) -> f64 {
        self.in_piece(PieceType::Platinum)
    }

    /// Value expressed in an arbitrary denomination.
    pub fn in_piece(&self, piece_type: PieceType) -> f64 {
        self.copper as f64 / piece_type.in_copper() as f64
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cp", self.copper)
    }
}
