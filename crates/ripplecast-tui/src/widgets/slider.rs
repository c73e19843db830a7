//! Horizontal slider track — ▰▰▰▱▱ proportional fill for the control
//! surface.

/// Render a slider track of `width` cells, filled proportionally to
/// `value` within `[min, max]`. Degenerate ranges render as empty.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::as_conversions
)]
pub fn track(value: u32, min: u32, max: u32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let filled = if max <= min {
        0
    } else {
        let fraction = f64::from(value.clamp(min, max) - min) / f64::from(max - min);
        (fraction * width as f64).round() as usize
    };

    let mut track = String::with_capacity(width * 3);
    for i in 0..width {
        track.push(if i < filled { '\u{25b0}' } else { '\u{25b1}' });
    }
    track
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fills_proportionally() {
        assert_eq!(track(0, 0, 100, 4), "▱▱▱▱");
        assert_eq!(track(50, 0, 100, 4), "▰▰▱▱");
        assert_eq!(track(100, 0, 100, 4), "▰▰▰▰");
    }

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(track(500, 0, 100, 4), "▰▰▰▰");
    }

    #[test]
    fn degenerate_range_renders_empty_track() {
        assert_eq!(track(5, 10, 10, 4), "▱▱▱▱");
        assert_eq!(track(5, 0, 100, 0), "");
    }
}
