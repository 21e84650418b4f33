use crossterm::style::{Color, Stylize};

use std::fmt;

/// One slot of the rendered wall grid: either a wall, an open passage, or an
/// open slot carrying a traversal marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
    /// The search source (top-left corner).
    Source,
    /// The search target (bottom-right corner).
    Target,
    /// Discovered during traversal, shown while the visited order replays.
    Explored,
    /// Part of the reconstructed solution route.
    Route,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Wall => "██".with(Color::DarkGrey),
            Cell::Open => "  ".with(Color::Reset),
            Cell::Source => "S ".with(Color::Green),
            Cell::Target => "G ".with(Color::Red),
            Cell::Explored => "· ".with(Color::Cyan),
            Cell::Route => "░░".with(Color::Blue),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
