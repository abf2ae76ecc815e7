//! Responsive grid policy.
//!
//! Maps the available viewport width to a column count for the link grid.

/// Widths strictly above this get three columns.
pub const THREE_COLUMN_MIN_EXCLUSIVE: f32 = 660.0;

/// Widths at or above this (up to the three-column bound) get two columns.
pub const TWO_COLUMN_MIN: f32 = 440.0;

/// Maximum width of the page content.
pub const CONTENT_MAX_WIDTH: f32 = 760.0;

/// Horizontal padding around the content.
pub const CONTENT_PADDING_X: f32 = 32.0;

/// Spacing between grid rows and cells.
pub const GRID_SPACING: f32 = 8.0;

/// Avatar diameter.
pub const AVATAR_SIZE: f32 = 128.0;

/// Space above the avatar.
pub const AVATAR_PADDING_TOP: f32 = 32.0;

/// Space under the tagline.
pub const TAGLINE_PADDING_BOTTOM: f32 = 24.0;

/// Vertical padding around the footer.
pub const FOOTER_PADDING_Y: f32 = 32.0;

/// Number of grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Columns {
    /// Narrow viewports.
    One,
    /// Medium viewports.
    Two,
    /// Wide viewports.
    Three,
}

impl Columns {
    /// Returns the column count as a number.
    pub fn count(&self) -> usize {
        match self {
            Columns::One => 1,
            Columns::Two => 2,
            Columns::Three => 3,
        }
    }

    /// Whether more than one column is shown.
    pub fn is_multi(&self) -> bool {
        *self != Columns::One
    }
}

/// Picks the column count for a viewport width in logical pixels.
///
/// Total over all inputs: NaN and negative widths fall through to a
/// single column.
pub fn columns_for(width: f32) -> Columns {
    if width > THREE_COLUMN_MIN_EXCLUSIVE {
        Columns::Three
    } else if width >= TWO_COLUMN_MIN {
        Columns::Two
    } else {
        Columns::One
    }
}
