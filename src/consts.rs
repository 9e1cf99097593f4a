//! Assorted constants & hard-coded configuration
use crate::game::Grid;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Width of the playing field in pixels
pub(crate) const SCREEN_WIDTH: u16 = 640;

/// Height of the playing field in pixels
pub(crate) const SCREEN_HEIGHT: u16 = 480;

/// Edge length of one grid cell in pixels.  All positions are multiples of
/// this.
pub(crate) const CELL_SIZE: u16 = 20;

/// The playing field: 32 × 24 cells
pub(crate) const GRID: Grid = Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE);

/// A rock is dropped onto the field every time this many pieces of food have
/// been eaten since the last reset.
pub(crate) const OBSTACLE_CADENCE: u32 = 3;

/// How many random cells to try before falling back to scanning the whole
/// grid for a free one
pub(crate) const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Ticks per second at startup
pub(crate) const INITIAL_TICK_RATE: u32 = 15;

/// Slowest selectable tick rate
pub(crate) const MIN_TICK_RATE: u32 = 5;

/// Fastest selectable tick rate
pub(crate) const MAX_TICK_RATE: u32 = 30;

/// Amount by which a single speed-up/slow-down request changes the tick rate
pub(crate) const TICK_RATE_STEP: u32 = 5;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: the field plus its border, a status line, and a help
/// line.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 44,
    height: 28,
};

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for rocks
pub(crate) const OBSTACLE_SYMBOL: char = '█';

/// Glyph for an empty cell
pub(crate) const BACKGROUND_SYMBOL: char = ' ';

/// Style for the snake's body
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style =
    Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Red);

/// Style for rocks
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Gray);

/// Style for empty cells
pub(crate) const BACKGROUND_STYLE: Style = Style::new();

/// Style for the border around the field
pub(crate) const BORDER_STYLE: Style = Style::new().fg(Color::Rgb(93, 216, 228));

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
