//! Cards, coins, nobles and the static card tables.
//!
//! - `card`: the `Card`, `Coin` and `Noble` records and the `Level` tier
//! - `tables`: printed card data per level, with load-time validation

pub mod card;
pub mod tables;

pub use card::{Card, Coin, Level, Noble};
pub use tables::{CardRow, CardTable, LEVEL_ONE, LEVEL_THREE, LEVEL_TWO, STANDARD_TABLES};
