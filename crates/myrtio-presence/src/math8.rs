/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

/// Step an 8-bit level down by `step`, never below zero
///
/// A zero step jumps straight to zero so a ramp always terminates.
#[inline]
pub fn step_down8(level: u8, step: u8) -> u8 {
    if step == 0 {
        return 0;
    }
    level.saturating_sub(step)
}
