use chrono::{DateTime, Timelike, Utc};

use super::{ansi, format::DisplayFormat};
use crate::config::Config;

/// Renders one complete frame for the given tick.
///
/// The result is a single contiguous buffer, including every entry line and
/// the closing clear/rehome sequences, so the caller can hand the whole
/// frame to the terminal in one write. Writing line by line would let the
/// cursor flicker across the screen at the one-second redraw cadence.
///
/// Pure in its inputs: the same tick and configuration always produce
/// byte-identical output.
pub fn render_frame(tick: DateTime<Utc>, config: &Config, format: &DisplayFormat) -> String {
    let settings = &config.settings;

    let (line_end, frame_end) = if settings.horizontal_display {
        (ansi::LINE_END_HORIZONTAL, ansi::FRAME_END_HORIZONTAL)
    } else {
        (ansi::LINE_END_VERTICAL, ansi::FRAME_END_VERTICAL)
    };

    let mut frame = String::new();

    if settings.show_unix_time {
        frame.push_str(&settings.unix_time_name_color.prefix());
        frame.push_str("Unix Time: ");
        frame.push_str(&settings.unix_time_color.prefix());
        frame.push_str(&tick.timestamp().to_string());
        frame.push_str(line_end);
    }

    for entry in &config.zones {
        let local = tick.with_timezone(&entry.tz);

        // Classify from the zoned datetime itself, not the rendered text;
        // a custom format may not put the hour anywhere predictable.
        let time_color = if settings.is_daytime(local.hour()) {
            &settings.daytime_color
        } else {
            &settings.nighttime_color
        };

        frame.push_str(&settings.entry_name_color.prefix());
        frame.push_str(&entry.label);
        frame.push_str(": ");
        frame.push_str(&time_color.prefix());
        frame.push_str(&format.render(&local));
        frame.push_str(line_end);
    }

    frame.push_str(frame_end);
    frame
}
