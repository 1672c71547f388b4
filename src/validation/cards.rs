//! Contest card dimension consistency.
//!
//! All cards in a grid must share the first card's height, width and border
//! radius. Values compare strictly: the number `10` and the string `"10"`
//! are different dimensions, and a missing field only matches another
//! missing field.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS-ish dimension: either a bare number or a string such as `"320px"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Number(value)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Text(value.to_string())
    }
}

/// Rendered dimensions of a contest card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDescriptor {
    pub height: Option<Dimension>,
    pub width: Option<Dimension>,
    pub border_radius: Option<Dimension>,
}

impl CardDescriptor {
    pub fn new(height: impl Into<Dimension>, width: impl Into<Dimension>, border_radius: impl Into<Dimension>) -> Self {
        CardDescriptor {
            height: Some(height.into()),
            width: Some(width.into()),
            border_radius: Some(border_radius.into()),
        }
    }
}

/// Card field that can disagree with the reference card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardField {
    Height,
    Width,
    BorderRadius,
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardField::Height => write!(f, "height"),
            CardField::Width => write!(f, "width"),
            CardField::BorderRadius => write!(f, "border radius"),
        }
    }
}

/// One mismatched field on one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInconsistency {
    pub index: usize,
    pub field: CardField,
}

impl fmt::Display for CardInconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card {} {} mismatch", self.index, self.field)
    }
}

/// Outcome of [`validate_card_consistency`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardConsistencyResult {
    /// Fewer than two cards: nothing to compare, vacuously valid
    Insufficient {
        #[serde(rename = "isValid")]
        is_valid: bool,
        message: String,
    },
    Compared {
        #[serde(rename = "isValid")]
        is_valid: bool,
        inconsistencies: Vec<CardInconsistency>,
        #[serde(rename = "totalCards")]
        total_cards: usize,
    },
}

impl CardConsistencyResult {
    pub fn is_valid(&self) -> bool {
        match self {
            CardConsistencyResult::Insufficient { is_valid, .. } => *is_valid,
            CardConsistencyResult::Compared { is_valid, .. } => *is_valid,
        }
    }

    pub fn inconsistencies(&self) -> &[CardInconsistency] {
        match self {
            CardConsistencyResult::Insufficient { .. } => &[],
            CardConsistencyResult::Compared { inconsistencies, .. } => inconsistencies,
        }
    }
}

pub fn validate_card_consistency(cards: &[CardDescriptor]) -> CardConsistencyResult {
    if cards.len() < 2 {
        debug!("card consistency: {} cards, nothing to compare", cards.len());
        return CardConsistencyResult::Insufficient {
            is_valid: true,
            message: "Need at least 2 cards to validate".to_string(),
        };
    }

    let first = &cards[0];
    let mut inconsistencies = Vec::new();
    for (index, card) in cards.iter().enumerate().skip(1) {
        if card.height != first.height {
            inconsistencies.push(CardInconsistency { index, field: CardField::Height });
        }
        if card.width != first.width {
            inconsistencies.push(CardInconsistency { index, field: CardField::Width });
        }
        if card.border_radius != first.border_radius {
            inconsistencies.push(CardInconsistency { index, field: CardField::BorderRadius });
        }
    }

    debug!(
        "card consistency: {} cards, {} mismatches",
        cards.len(),
        inconsistencies.len()
    );

    CardConsistencyResult::Compared {
        is_valid: inconsistencies.is_empty(),
        inconsistencies,
        total_cards: cards.len(),
    }
}
