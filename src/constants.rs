// Layout and palette for the Canvas 2D presentation.

// Sprites
pub const ENTITY_FILL: &str = "yellow";
pub const OBSTACLE_FILL: &str = "green";

// Score, right-aligned
pub const SCORE_FONT: &str = "24px serif";
pub const SCORE_FILL: &str = "black";
pub const SCORE_MARGIN_RIGHT: f64 = 10.0;
pub const SCORE_BASELINE_Y: f64 = 30.0;

// Countdown bar
pub const BAR_X: f64 = 10.0;
pub const BAR_Y: f64 = 15.0;
pub const BAR_WIDTH: f64 = 100.0;
pub const BAR_HEIGHT: f64 = 20.0;
pub const BAR_EMPTY_FILL: &str = "red";
pub const BAR_FULL_FILL: &str = "green";
pub const BAR_TICK_STROKE: &str = "black";
// Fractions of the bar width where the judgment and capture marks sit
pub const BAR_TICKS: [f64; 2] = [1.0 / 5.0, 2.0 / 5.0];

// Mode indicator, offsets relative to the bar origin
pub const MODE_FONT: &str = "18px serif";
pub const MODE_FILL: &str = "black";
pub const MODE_BASELINE_DY: f64 = 40.0;
pub const MODE_TEXT_DX: f64 = 60.0;
pub const MODE_COLOR_DX: f64 = 120.0;
pub const MODE_HIGHLIGHT_FILL: &str = "lightgray";
pub const MODE_HIGHLIGHT_DY: f64 = 25.0;
pub const MODE_HIGHLIGHT_HEIGHT: f64 = 25.0;
// (dx, width) of the highlight box painted for each mode
pub const MODE_HIGHLIGHT_TEXT: (f64, f64) = (115.0, 60.0);
pub const MODE_HIGHLIGHT_COLOR: (f64, f64) = (55.0, 50.0);

// Challenge word
pub const WORD_FONT: &str = "36px serif";
pub const WORD_DX: f64 = 20.0;
pub const WORD_BASELINE_DY: f64 = 80.0;

// End screen
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const GAME_OVER_FONT: &str = "48px serif";
pub const GAME_OVER_FILL: &str = "red";
pub const GAME_OVER_DX: f64 = -100.0; // from the horizontal center
