//! Resource colors and per-color storage.
//!
//! ## Color
//!
//! The five resource colors. The set is closed: every per-color loop in the
//! engine matches over `Color::ALL` in canonical order
//! (red, blue, green, white, black), and that order is the tie-break order
//! used by the strategies.
//!
//! ## ColorMap
//!
//! Fixed-size per-color storage backed by an array, indexed by `Color`.
//! `CostVector` is a `ColorMap<u32>` and carries the cost helpers
//! (total, distinct colors, weighted cost).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

/// Number of resource colors.
pub const NUM_COLORS: usize = 5;

/// A resource color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Blue,
    Green,
    White,
    Black,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; NUM_COLORS] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::White,
        Color::Black,
    ];

    /// Position of this color in `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::White => 3,
            Color::Black => 4,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color data storage with O(1) access.
///
/// ```
/// use splendor_sim::core::{Color, ColorMap};
///
/// let mut stock: ColorMap<u32> = ColorMap::with_value(6);
/// stock[Color::Red] -= 1;
///
/// assert_eq!(stock[Color::Red], 5);
/// assert_eq!(stock[Color::Blue], 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; NUM_COLORS],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Color, &T) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs in canonical order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}

/// Amount owed per color.
pub type CostVector = ColorMap<u32>;

impl ColorMap<u32> {
    /// Build a cost from `(color, amount)` pairs. Repeated colors accumulate.
    #[must_use]
    pub fn from_pairs(pairs: &[(Color, u32)]) -> Self {
        let mut cost = Self::default();
        for &(color, amount) in pairs {
            cost[color] += amount;
        }
        cost
    }

    /// Sum of all entries.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data.iter().sum()
    }

    /// Number of colors with a positive amount.
    #[must_use]
    pub fn distinct_colors(&self) -> u32 {
        self.data.iter().filter(|&&amount| amount > 0).count() as u32
    }

    /// Entries with a positive amount.
    pub fn nonzero(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        self.iter()
            .filter(|&(_, &amount)| amount > 0)
            .map(|(color, &amount)| (color, amount))
    }

    /// Total cost divided by the number of colors it spans.
    ///
    /// An empty cost weighs 0.
    #[must_use]
    pub fn weighted_cost(&self) -> f64 {
        match self.distinct_colors() {
            0 => 0.0,
            spread => f64::from(self.total()) / f64::from(spread),
        }
    }

    /// Compare weighted costs exactly (cross-multiplied, no float rounding).
    #[must_use]
    pub fn cmp_weighted(&self, other: &Self) -> Ordering {
        let (lt, ls) = (u64::from(self.total()), u64::from(self.distinct_colors().max(1)));
        let (rt, rs) = (u64::from(other.total()), u64::from(other.distinct_colors().max(1)));
        (lt * rs).cmp(&(rt * ls))
    }
}

impl std::fmt::Display for ColorMap<u32> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for (color, amount) in self.nonzero() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{color}: {amount}")?;
            first = false;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
        assert_eq!(format!("{}", Color::White), "white");
    }

    #[test]
    fn test_color_map_factory() {
        let map = ColorMap::new(|c| c.index() * 10);
        assert_eq!(map[Color::Red], 0);
        assert_eq!(map[Color::Black], 40);
        assert_eq!(map.iter().count(), NUM_COLORS);
    }

    #[test]
    fn test_cost_total_and_spread() {
        let cost = CostVector::from_pairs(&[(Color::Red, 2), (Color::Green, 3)]);
        assert_eq!(cost.total(), 5);
        assert_eq!(cost.distinct_colors(), 2);
        assert!((cost.weighted_cost() - 2.5).abs() < f64::EPSILON);
        assert_eq!(format!("{cost}"), "{red: 2, green: 3}");
    }

    #[test]
    fn test_empty_cost_weighs_zero() {
        let cost = CostVector::default();
        assert_eq!(cost.total(), 0);
        assert!(cost.weighted_cost().abs() < f64::EPSILON);
    }

    #[test]
    fn test_cmp_weighted() {
        // 4 of one color (4.0) vs one of each of four colors (1.0)
        let narrow = CostVector::from_pairs(&[(Color::White, 4)]);
        let wide = CostVector::from_pairs(&[
            (Color::White, 1),
            (Color::Blue, 1),
            (Color::Green, 1),
            (Color::Black, 1),
        ]);
        assert_eq!(wide.cmp_weighted(&narrow), Ordering::Less);

        // 3 over 1 color == 6 over 2 colors
        let a = CostVector::from_pairs(&[(Color::Red, 3)]);
        let b = CostVector::from_pairs(&[(Color::Red, 3), (Color::Blue, 3)]);
        assert_eq!(a.cmp_weighted(&b), Ordering::Equal);
    }

    #[test]
    fn test_color_map_serialization() {
        let cost = CostVector::from_pairs(&[(Color::Black, 1)]);
        let json = serde_json::to_string(&cost).unwrap();
        let back: CostVector = serde_json::from_str(&json).unwrap();
        assert_eq!(cost, back);
    }
}
