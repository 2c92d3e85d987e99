//! Color theme constants for the blogdeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused form field
pub const COLOR_BORDER_FOCUS: Color = Color::White;

/// Accent color - used for the active card marker and focused labels
pub const COLOR_ACCENT: Color = Color::Rgb(99, 102, 241); // indigo #6366F1

/// Header text color - white for the brand
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Secondary body text
pub const COLOR_MUTED: Color = Color::Gray;

/// Category tags
pub const COLOR_CATEGORY: Color = Color::Rgb(129, 140, 248); // indigo #818CF8

// ============================================================================
// Status Colors
// ============================================================================

/// Success notices
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Errors and failed queries
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for the create dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
