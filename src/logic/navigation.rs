//! Grid selection logic
//!
//! Pure functions for moving the selected card around a grid laid out in
//! rows of `columns` cards.

/// Direction of a selection move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Calculate the selection after moving in `direction`
///
/// Left/Right walk the cards in order (wrapping at either end), Up/Down
/// jump a whole row and stop at the edges.
///
/// # Examples
/// ```
/// use photogrid::logic::navigation::{move_selection, Direction};
///
/// // Empty grid
/// assert_eq!(move_selection(None, 0, 3, Direction::Right), None);
///
/// // No selection yet selects the first card
/// assert_eq!(move_selection(None, 5, 3, Direction::Down), Some(0));
///
/// // 5 cards in rows of 3: [0 1 2] [3 4]
/// assert_eq!(move_selection(Some(2), 5, 3, Direction::Right), Some(3));
/// assert_eq!(move_selection(Some(4), 5, 3, Direction::Right), Some(0));
/// assert_eq!(move_selection(Some(1), 5, 3, Direction::Down), Some(4));
/// assert_eq!(move_selection(Some(2), 5, 3, Direction::Down), Some(4));
/// assert_eq!(move_selection(Some(4), 5, 3, Direction::Up), Some(1));
/// ```
pub fn move_selection(
    current: Option<usize>,
    len: usize,
    columns: usize,
    direction: Direction,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let Some(current) = current else {
        return Some(0);
    };
    let current = current.min(len - 1);
    let columns = columns.max(1);

    Some(match direction {
        Direction::Right if current >= len - 1 => 0, // Wrap to start
        Direction::Right => current + 1,
        Direction::Left if current == 0 => len - 1, // Wrap to end
        Direction::Left => current - 1,
        Direction::Down => {
            let target = current + columns;
            if target < len {
                target
            } else if current / columns < (len - 1) / columns {
                // Partial last row: land on its last card
                len - 1
            } else {
                current
            }
        }
        Direction::Up if current < columns => current,
        Direction::Up => current - columns,
    })
}

/// Clamp a selection after the grid was rebuilt with `len` cards
pub fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(len - 1))
}
