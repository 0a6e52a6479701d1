//! Static card tables, one per level.
//!
//! Each table lists, per card color, the cost and points of every card of
//! that color. Every color of a level follows the same sequence of total
//! costs; `validate` checks this when a match is built, so a typo in the
//! data fails setup instead of skewing results.
//!
//! Colors are listed in the order their cards enter the pile (black,
//! white, blue, red, green), which is the order an unshuffled pile deals.

use crate::cards::card::{Card, Level};
use crate::core::Color::{self, Black as B, Blue as U, Green as G, Red as R, White as W};
use crate::core::{ConfigError, CostVector};

/// One card's printed values.
#[derive(Clone, Copy, Debug)]
pub struct CardRow {
    pub cost: &'static [(Color, u32)],
    pub points: u32,
}

const fn row(cost: &'static [(Color, u32)], points: u32) -> CardRow {
    CardRow { cost, points }
}

/// All cards of one level.
#[derive(Clone, Copy, Debug)]
pub struct CardTable {
    pub level: Level,
    /// Total cost of each card of a color, in listed order.
    pub expected_costs: &'static [u32],
    pub colors: &'static [(Color, &'static [CardRow])],
}

impl CardTable {
    /// Number of cards in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.iter().map(|(_, rows)| rows.len()).sum()
    }

    /// Whether the table lists no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check every color is present and follows the expected cost sequence.
    ///
    /// # Errors
    ///
    /// `EmptyTable`, `MissingColor` or `CostMismatch`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.is_empty() {
            return Err(ConfigError::EmptyTable(self.level));
        }
        for color in Color::ALL {
            if !self.colors.iter().any(|&(c, _)| c == color) {
                return Err(ConfigError::MissingColor {
                    level: self.level,
                    color,
                });
            }
        }
        for &(color, rows) in self.colors {
            let actual: Vec<u32> = rows
                .iter()
                .map(|row| row.cost.iter().map(|&(_, amount)| amount).sum())
                .collect();
            if actual != self.expected_costs {
                return Err(ConfigError::CostMismatch {
                    level: self.level,
                    color,
                    expected: self.expected_costs.to_vec(),
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Validate, then create the level's cards in listed order.
    ///
    /// # Errors
    ///
    /// Any error from `validate`.
    pub fn build_pile(&self) -> Result<Vec<Card>, ConfigError> {
        self.validate()?;
        Ok(self
            .colors
            .iter()
            .flat_map(|&(color, rows)| {
                rows.iter().map(move |row| {
                    Card::new(color, self.level, row.points, CostVector::from_pairs(row.cost))
                })
            })
            .collect())
    }
}

pub static LEVEL_ONE: CardTable = CardTable {
    level: Level::One,
    expected_costs: &[3, 3, 4, 4, 4, 5, 5, 5],
    colors: &[
        (B, &[
            row(&[(G, 3)], 0),
            row(&[(G, 2), (R, 1)], 0),
            row(&[(W, 2), (G, 2)], 0),
            row(&[(W, 1), (U, 1), (G, 1), (R, 1)], 0),
            row(&[(B, 4)], 1),
            row(&[(G, 1), (R, 3), (B, 1)], 0),
            row(&[(W, 1), (U, 2), (G, 1), (R, 1)], 0),
            row(&[(W, 2), (U, 2), (R, 1)], 0),
        ]),
        (W, &[
            row(&[(U, 3)], 0),
            row(&[(R, 2), (B, 1)], 0),
            row(&[(U, 2), (B, 2)], 0),
            row(&[(U, 1), (G, 1), (R, 1), (B, 1)], 0),
            row(&[(G, 4)], 1),
            row(&[(U, 1), (G, 2), (R, 1), (B, 1)], 0),
            row(&[(U, 2), (G, 2), (B, 1)], 0),
            row(&[(W, 3), (U, 1), (B, 1)], 0),
        ]),
        (U, &[
            row(&[(B, 3)], 0),
            row(&[(W, 1), (B, 2)], 0),
            row(&[(G, 2), (B, 2)], 0),
            row(&[(W, 1), (G, 1), (R, 1), (B, 1)], 0),
            row(&[(R, 4)], 1),
            row(&[(W, 1), (G, 1), (R, 2), (B, 1)], 0),
            row(&[(B, 1), (G, 3), (R, 1)], 0),
            row(&[(W, 1), (G, 2), (R, 2)], 0),
        ]),
        (R, &[
            row(&[(W, 3)], 0),
            row(&[(U, 2), (G, 1)], 0),
            row(&[(W, 2), (R, 2)], 0),
            row(&[(W, 1), (U, 1), (G, 1), (B, 1)], 0),
            row(&[(W, 4)], 1),
            row(&[(W, 2), (G, 1), (B, 2)], 0),
            row(&[(W, 2), (U, 1), (G, 1), (B, 1)], 0),
            row(&[(W, 1), (R, 1), (B, 3)], 0),
        ]),
        (G, &[
            row(&[(R, 3)], 0),
            row(&[(G, 2), (U, 1)], 0),
            row(&[(U, 2), (R, 2)], 0),
            row(&[(W, 1), (U, 1), (R, 1), (B, 1)], 0),
            row(&[(B, 4)], 1),
            row(&[(U, 1), (R, 2), (B, 2)], 0),
            row(&[(W, 1), (B, 3), (G, 1)], 0),
            row(&[(W, 1), (U, 1), (R, 1), (B, 2)], 0),
        ]),
    ],
};

pub static LEVEL_TWO: CardTable = CardTable {
    level: Level::Two,
    expected_costs: &[7, 8, 5, 7, 8, 6],
    colors: &[
        (B, &[
            row(&[(U, 2), (R, 2), (W, 3)], 1),
            row(&[(W, 3), (B, 2), (G, 3)], 1),
            row(&[(W, 5)], 2),
            row(&[(U, 1), (G, 4), (R, 2)], 2),
            row(&[(R, 3), (G, 5)], 2),
            row(&[(B, 6)], 3),
        ]),
        (W, &[
            row(&[(B, 2), (R, 2), (G, 3)], 1),
            row(&[(U, 3), (R, 2), (B, 3)], 1),
            row(&[(B, 5)], 2),
            row(&[(W, 1), (U, 4), (G, 2)], 2),
            row(&[(W, 3), (B, 5)], 2),
            row(&[(R, 6)], 3),
        ]),
        (U, &[
            row(&[(G, 2), (U, 2), (R, 3)], 1),
            row(&[(G, 3), (U, 2), (B, 3)], 1),
            row(&[(U, 5)], 2),
            row(&[(R, 1), (B, 4), (W, 2)], 2),
            row(&[(U, 3), (W, 5)], 2),
            row(&[(U, 6)], 3),
        ]),
        (R, &[
            row(&[(W, 2), (R, 2), (B, 3)], 1),
            row(&[(U, 3), (R, 2), (B, 3)], 1),
            row(&[(B, 5)], 2),
            row(&[(W, 1), (U, 4), (G, 2)], 2),
            row(&[(W, 3), (B, 5)], 2),
            row(&[(R, 6)], 3),
        ]),
        (G, &[
            row(&[(W, 2), (B, 2), (U, 3)], 1),
            row(&[(W, 3), (G, 2), (R, 3)], 1),
            row(&[(G, 5)], 2),
            row(&[(B, 1), (W, 4), (U, 2)], 2),
            row(&[(G, 3), (U, 5)], 2),
            row(&[(G, 6)], 3),
        ]),
    ],
};

pub static LEVEL_THREE: CardTable = CardTable {
    level: Level::Three,
    expected_costs: &[14, 12, 7, 10],
    colors: &[
        (B, &[
            row(&[(W, 3), (U, 3), (R, 3), (G, 5)], 3),
            row(&[(G, 3), (B, 3), (R, 6)], 4),
            row(&[(R, 7)], 4),
            row(&[(B, 3), (R, 7)], 5),
        ]),
        (W, &[
            row(&[(G, 3), (B, 3), (U, 3), (R, 5)], 3),
            row(&[(R, 3), (W, 3), (B, 6)], 4),
            row(&[(B, 7)], 4),
            row(&[(W, 3), (B, 7)], 5),
        ]),
        (U, &[
            row(&[(R, 3), (W, 3), (G, 3), (B, 5)], 3),
            row(&[(B, 3), (U, 3), (W, 6)], 4),
            row(&[(W, 7)], 4),
            row(&[(U, 3), (W, 7)], 5),
        ]),
        (R, &[
            row(&[(W, 3), (G, 3), (B, 3), (U, 5)], 3),
            row(&[(U, 3), (R, 3), (G, 6)], 4),
            row(&[(G, 7)], 4),
            row(&[(R, 3), (G, 7)], 5),
        ]),
        (G, &[
            row(&[(B, 3), (R, 3), (U, 3), (W, 5)], 3),
            row(&[(W, 3), (G, 3), (U, 6)], 4),
            row(&[(U, 7)], 4),
            row(&[(G, 3), (U, 7)], 5),
        ]),
    ],
};

/// The three standard tables, cheapest level first.
pub static STANDARD_TABLES: [&CardTable; 3] = [&LEVEL_ONE, &LEVEL_TWO, &LEVEL_THREE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tables_validate() {
        for table in STANDARD_TABLES {
            assert_eq!(table.validate(), Ok(()), "level {}", table.level);
        }
    }

    #[test]
    fn test_standard_table_sizes() {
        assert_eq!(LEVEL_ONE.len(), 40);
        assert_eq!(LEVEL_TWO.len(), 30);
        assert_eq!(LEVEL_THREE.len(), 20);
    }

    #[test]
    fn test_standard_point_totals() {
        let points = |table: &CardTable| -> u32 {
            table.build_pile().unwrap().iter().map(|c| c.points).sum()
        };
        assert_eq!(points(&LEVEL_ONE), 5);
        assert_eq!(points(&LEVEL_TWO), 55);
        assert_eq!(points(&LEVEL_THREE), 80);
    }

    #[test]
    fn test_pile_order_follows_table() {
        let pile = LEVEL_ONE.build_pile().unwrap();
        assert_eq!(pile[0].color, Color::Black);
        assert_eq!(pile[0].cost, CostVector::from_pairs(&[(G, 3)]));
        assert_eq!(pile[4].points, 1);
        assert_eq!(pile[8].color, Color::White);
        assert!(pile.iter().all(|c| c.level == Level::One && c.owner.is_none()));
    }

    static WRONG_COST: CardTable = CardTable {
        level: Level::Two,
        expected_costs: &[3],
        colors: &[
            (R, &[row(&[(W, 3)], 0)]),
            (U, &[row(&[(B, 3)], 0)]),
            (G, &[row(&[(R, 2)], 0)]),
            (W, &[row(&[(U, 3)], 0)]),
            (B, &[row(&[(G, 3)], 0)]),
        ],
    };

    static MISSING_BLACK: CardTable = CardTable {
        level: Level::One,
        expected_costs: &[3],
        colors: &[
            (R, &[row(&[(W, 3)], 0)]),
            (U, &[row(&[(B, 3)], 0)]),
            (G, &[row(&[(R, 3)], 0)]),
            (W, &[row(&[(U, 3)], 0)]),
        ],
    };

    static EMPTY: CardTable = CardTable {
        level: Level::Three,
        expected_costs: &[],
        colors: &[],
    };

    #[test]
    fn test_cost_mismatch_detected() {
        assert_eq!(
            WRONG_COST.build_pile(),
            Err(ConfigError::CostMismatch {
                level: Level::Two,
                color: Color::Green,
                expected: vec![3],
                actual: vec![2],
            })
        );
    }

    #[test]
    fn test_missing_color_detected() {
        assert_eq!(
            MISSING_BLACK.validate(),
            Err(ConfigError::MissingColor {
                level: Level::One,
                color: Color::Black,
            })
        );
    }

    #[test]
    fn test_empty_table_detected() {
        assert!(EMPTY.is_empty());
        assert_eq!(EMPTY.validate(), Err(ConfigError::EmptyTable(Level::Three)));
    }
}
