//! Sprite-sheet row table.
//!
//! Which sheet row shows which pose is a property of the art, not something
//! derived from pixel geometry. [`RowLayout`] maps `(facing, animation_key)` to
//! a row index and can be overridden from the `[rows]` section of the config.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::animation::Facing;
use crate::components::sprite::SHEET_ROWS;

const ALL_FACINGS: [Facing; 5] = [
    Facing::Idle,
    Facing::MovingDown,
    Facing::MovingLeft,
    Facing::MovingRight,
    Facing::MovingUp,
];

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RowLayout {
    rows: FxHashMap<(Facing, u8), u32>,
}

impl Default for RowLayout {
    fn default() -> Self {
        let mut layout = Self {
            rows: FxHashMap::default(),
        };
        layout.set(Facing::Idle, [0, 0]);
        layout.set(Facing::MovingDown, [5, 6]);
        layout.set(Facing::MovingLeft, [7, 8]);
        layout.set(Facing::MovingRight, [9, 10]);
        layout.set(Facing::MovingUp, [11, 12]);
        layout
    }
}

impl RowLayout {
    /// Row for `facing` with walk variant `animation_key`.
    ///
    /// Unknown keys fall back to the idle row.
    pub fn row(&self, facing: Facing, animation_key: u8) -> u32 {
        self.rows
            .get(&(facing, animation_key & 1))
            .or_else(|| self.rows.get(&(Facing::Idle, 0)))
            .copied()
            .unwrap_or(0)
    }

    /// Set the rows of both walk variants of `facing`.
    pub fn set(&mut self, facing: Facing, rows: [u32; 2]) {
        self.rows.insert((facing, 0), rows[0]);
        self.rows.insert((facing, 1), rows[1]);
    }

    pub fn rows_for(&self, facing: Facing) -> [u32; 2] {
        [self.row(facing, 0), self.row(facing, 1)]
    }

    /// Config key of a facing in the `[rows]` section.
    pub fn config_key(facing: Facing) -> &'static str {
        match facing {
            Facing::Idle => "idle",
            Facing::MovingDown => "down",
            Facing::MovingLeft => "left",
            Facing::MovingRight => "right",
            Facing::MovingUp => "up",
        }
    }

    pub fn facings() -> &'static [Facing] {
        &ALL_FACINGS
    }

    /// Parse a `"5,6"` pair. Both rows must exist in a 13-row sheet.
    pub fn parse_pair(value: &str) -> Result<[u32; 2], String> {
        let mut parts = value.split(',').map(str::trim);
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("expected two comma-separated rows, got '{}'", value));
        };
        let parse = |s: &str| {
            s.parse::<u32>()
                .map_err(|e| format!("invalid row '{}': {}", s, e))
                .and_then(|row| {
                    if row < SHEET_ROWS {
                        Ok(row)
                    } else {
                        Err(format!("row {} out of range, sheet has {} rows", row, SHEET_ROWS))
                    }
                })
        };
        Ok([parse(a)?, parse(b)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = RowLayout::default();
        assert_eq!(layout.rows_for(Facing::Idle), [0, 0]);
        assert_eq!(layout.rows_for(Facing::MovingDown), [5, 6]);
        assert_eq!(layout.rows_for(Facing::MovingLeft), [7, 8]);
        assert_eq!(layout.rows_for(Facing::MovingRight), [9, 10]);
        assert_eq!(layout.rows_for(Facing::MovingUp), [11, 12]);
    }

    #[test]
    fn test_override_one_direction() {
        let mut layout = RowLayout::default();
        layout.set(Facing::MovingUp, [1, 2]);
        assert_eq!(layout.row(Facing::MovingUp, 1), 2);
        assert_eq!(layout.row(Facing::MovingDown, 0), 5);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(RowLayout::parse_pair("5,6"), Ok([5, 6]));
        assert_eq!(RowLayout::parse_pair(" 11 , 12 "), Ok([11, 12]));
        assert!(RowLayout::parse_pair("5").is_err());
        assert!(RowLayout::parse_pair("5,6,7").is_err());
        assert!(RowLayout::parse_pair("a,6").is_err());
        assert!(RowLayout::parse_pair("5,13").is_err());
    }
}
