//! Color theme constants for the sample viewer UI.
//!
//! Minimal dark palette, consistent across the table and controls.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Regular emphasis color for interactive elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for disabled controls and secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Marker color for the selected table row
pub const COLOR_SELECTED: Color = Color::LightGreen;

/// Foreground of the active page button
pub const COLOR_PAGE_ACTIVE_FG: Color = Color::Black;

/// Background of the active page button
pub const COLOR_PAGE_ACTIVE_BG: Color = Color::White;
