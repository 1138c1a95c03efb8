/// Linearly rescales `value` from `[min, max]` onto `[0, 100]`, clamped.
///
/// Out-of-domain inputs are common for real-world metrics (crime rates,
/// price ratios) and clamp instead of erroring. With `inverse` set, low raw
/// values map to high scores (crime rate, price, CBD distance). A degenerate
/// domain (`max == min`) counts as fully satisfied and returns 100.
pub fn normalize(value: f64, min: f64, max: f64, inverse: bool) -> f64 {
    if max == min {
        return 100.0;
    }

    let scaled = if inverse {
        (max - value) / (max - min) * 100.0
    } else {
        (value - min) / (max - min) * 100.0
    };

    scaled.clamp(0.0, 100.0)
}

/// One-decimal rounding used for every published score value.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
