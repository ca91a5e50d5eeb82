//! Keyboard chord matching for the hidden dashboard.

/// `KeyboardEvent.code` of the dashboard chord's letter key.
pub const DASHBOARD_CHORD_CODE: &str = "KeyX";

/// Ctrl+Shift+X toggles the dashboard. Matches on the physical key code so
/// keyboard layouts and the shifted character do not matter.
pub fn is_dashboard_chord(ctrl: bool, shift: bool, code: &str) -> bool {
    ctrl && shift && code == DASHBOARD_CHORD_CODE
}
