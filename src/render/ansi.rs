//! Terminal control sequences used by the renderer.
//!
//! Zoneclock assumes a VT100-compatible terminal emulator. All sequences are
//! emitted as part of a single frame buffer, never on their own.

/// Resets all SGR attributes to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Clears from the cursor to the end of the current line.
pub const CLEAR_LINE: &str = "\x1b[K";

/// Clears from the cursor to the end of the screen.
pub const CLEAR_BELOW: &str = "\x1b[J";

/// Moves the cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[1;1H";

/// Terminator for each entry in vertical layout: reset colors, clear any
/// stale characters left on the row, then move to the next line.
pub const LINE_END_VERTICAL: &str = "\x1b[0m\x1b[K\n";

/// Separator between entries in horizontal layout: reset colors, then four
/// spaces.
pub const LINE_END_HORIZONTAL: &str = "\x1b[0m    ";

/// Frame closure for vertical layout: clear stale content below the output
/// and rehome the cursor so the next frame overwrites in place.
pub const FRAME_END_VERTICAL: &str = "\x1b[J\x1b[1;1H";

/// Frame closure for horizontal layout: also clears the remainder of the
/// single output row before clearing below and rehoming.
pub const FRAME_END_HORIZONTAL: &str = "\x1b[K\x1b[J\n\x1b[1;1H";
