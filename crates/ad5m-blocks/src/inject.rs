//! Spaghetti detector marker injection.

use crate::markers::{
    FILAMENT_END_MARKER, FILAMENT_START_MARKER, SPAGHETTI_DETECTOR_DISABLE,
    SPAGHETTI_DETECTOR_ENABLE,
};

/// Bracket the extrusion region of `body` with spaghetti detector commands.
///
/// The enable command goes before every line mentioning the filament start
/// gcode; otherwise the disable command goes before every line mentioning the
/// filament end gcode. Every occurrence gets its own command.
///
/// Returns the augmented body and the number of commands added.
///
/// # Example
/// ```
/// use ad5m_blocks::inject::inject_safety_markers;
///
/// let body = ["; filament start gcode\n", "G1 X0\n", "; filament end gcode\n"];
/// let (lines, injected) = inject_safety_markers(&body);
/// assert_eq!(injected, 2);
/// assert_eq!(lines.len(), 5);
/// ```
pub fn inject_safety_markers<'a>(body: &[&'a str]) -> (Vec<&'a str>, usize) {
    let mut lines = Vec::with_capacity(body.len() + 2);
    let mut injected = 0;

    for &line in body {
        if line.contains(FILAMENT_START_MARKER) {
            lines.push(SPAGHETTI_DETECTOR_ENABLE);
            injected += 1;
        } else if line.contains(FILAMENT_END_MARKER) {
            lines.push(SPAGHETTI_DETECTOR_DISABLE);
            injected += 1;
        }
        lines.push(line);
    }

    tracing::debug!(injected, "Injected spaghetti detector commands");
    (lines, injected)
}
