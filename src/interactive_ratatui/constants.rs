//! Constants for the interactive TUI module
//!
//! Timing, layout and history limits shared by the runtime loop and the
//! components.

// Timing constants
/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Spinner frame duration in milliseconds
pub const SPINNER_FRAME_MS: u128 = 100;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the key hint bar at the bottom of the screen
pub const HINT_BAR_HEIGHT: u16 = 1;

/// Percentage of the body width given to the results
pub const RESULTS_WIDTH_PERCENT: u16 = 75;

/// Height of the Filter/Share/Menu button row
pub const CONTROLS_HEIGHT: u16 = 3;

/// Height of the status filter bar
pub const STATUS_FILTER_HEIGHT: u16 = 3;

/// Height of the display mode toggle
pub const DISPLAY_TOGGLE_HEIGHT: u16 = 3;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Result list constants
/// Rows used by one hit in the table layout
pub const RESULT_ROW_HEIGHT: u16 = 4;

/// Width of the mark name column
pub const MARK_COLUMN_WIDTH: u16 = 22;

/// Width of the status column
pub const STATUS_COLUMN_WIDTH: u16 = 28;

// Result grid constants
/// Minimum width of one card in the grid layout
pub const CARD_MIN_WIDTH: u16 = 36;

/// Height of one card in the grid layout
pub const CARD_HEIGHT: u16 = 9;

/// Visual lines a description may take in either layout
pub const DESCRIPTION_VISUAL_LINES: usize = 2;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

// Acknowledgement dialog
/// Width of the "Link copied" dialog
pub const ACK_DIALOG_WIDTH: u16 = 40;

/// Height of the "Link copied" dialog
pub const ACK_DIALOG_HEIGHT: u16 = 5;

// Navigation history
/// Maximum location history entries
pub const MAX_NAVIGATION_HISTORY: usize = 50;
