use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Map a wheel position to a color
///
/// The wheel is split into three linear segments:
/// `[0, 85)` red to green, `[85, 170)` green to blue and
/// `[170, 255]` blue back to red. Positions outside `0..=255` are black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn wheel(position: i32) -> Rgb {
    if position < 0 || position > 255 {
        return BLACK;
    }
    if position < 85 {
        let pos = position as u8;
        return Rgb {
            r: 255 - pos * 3,
            g: pos * 3,
            b: 0,
        };
    }
    if position < 170 {
        let pos = (position - 85) as u8;
        return Rgb {
            r: 0,
            g: 255 - pos * 3,
            b: pos * 3,
        };
    }
    let pos = (position - 170) as u8;
    Rgb {
        r: pos * 3,
        g: 0,
        b: 255 - pos * 3,
    }
}

/// Interpolate one channel between `from` and `to`
///
/// Computes `from + floor((to - from) * step / steps)` and clamps the
/// result to the channel range. `steps == 0` yields `to`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn lerp_channel(from: u8, to: u8, step: u32, steps: u32) -> u8 {
    if steps == 0 {
        return to;
    }
    if from == to {
        return from;
    }
    let delta = i64::from(to) - i64::from(from);
    let value = (delta * i64::from(step)).div_euclid(i64::from(steps)) + i64::from(from);

    value.clamp(0, 255) as u8
}

/// Interpolate every channel of two colors
///
/// # Arguments
/// * `from` - Color at step 0
/// * `to` - Color at step `steps`
/// * `step` - Current step
/// * `steps` - Total number of steps
pub fn crossfade(from: Rgb, to: Rgb, step: u32, steps: u32) -> Rgb {
    Rgb {
        r: lerp_channel(from.r, to.r, step, steps),
        g: lerp_channel(from.g, to.g, step, steps),
        b: lerp_channel(from.b, to.b, step, steps),
    }
}
