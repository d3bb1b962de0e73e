//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Flash color for the input border after a rejected (empty) submission.
pub const ERROR_RED: Color = Color::Rgb(255, 107, 107);

/// Status bar background.
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
