//! Which map borders a movement crossed.
//!
//! The map wraps on both axes. Movement that leaves through one edge comes
//! back through the opposite one; renderers and ship routing need to know
//! when that happened.

use std::ops::BitOrAssign;

/// One of the four map borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Border {
    /// Left edge (`x` wrapped from 0 to `width - 1`).
    Left,
    /// Top edge (`y` wrapped from 0 to `height - 1`).
    Top,
    /// Right edge (`x` wrapped from `width - 1` to 0).
    Right,
    /// Bottom edge (`y` wrapped from `height - 1` to 0).
    Bottom,
}

/// Set of borders crossed along a route.
///
/// # Examples
///
/// ```
/// use hexmap_space::{Border, CrossBorders};
///
/// let mut crossed = CrossBorders::default();
/// assert!(crossed.is_empty());
/// crossed.record(Border::Left);
/// assert!(crossed.left);
/// assert!(!crossed.right);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CrossBorders {
    /// Crossed the left edge.
    pub left: bool,
    /// Crossed the top edge.
    pub top: bool,
    /// Crossed the right edge.
    pub right: bool,
    /// Crossed the bottom edge.
    pub bottom: bool,
}

impl CrossBorders {
    /// Mark `border` as crossed.
    pub fn record(&mut self, border: Border) {
        match border {
            Border::Left => self.left = true,
            Border::Top => self.top = true,
            Border::Right => self.right = true,
            Border::Bottom => self.bottom = true,
        }
    }

    /// True if no border was crossed.
    pub fn is_empty(&self) -> bool {
        !(self.left || self.top || self.right || self.bottom)
    }
}

impl BitOrAssign for CrossBorders {
    fn bitor_assign(&mut self, rhs: Self) {
        self.left |= rhs.left;
        self.top |= rhs.top;
        self.right |= rhs.right;
        self.bottom |= rhs.bottom;
    }
}
