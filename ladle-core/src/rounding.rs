//! Grocery-realistic quantity rounding.
//!
//! Scaled quantities land on amounts a person can actually weigh or
//! measure: whole grams for small amounts, multiples of 5 or 10 as the
//! quantity grows, and standard cup fractions for volumes.

/// Unit of the value passed to [`round_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUnit {
    /// Mass in grams.
    Grams,
    /// Volume in US cups.
    Cups,
    /// Counted whole items; passed through unrounded.
    Each,
}

/// Cup fractions a measuring set can produce, ascending.
pub const CUP_FRACTIONS: &[f64] = &[
    0.0,
    1.0 / 8.0,
    1.0 / 6.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    2.0 / 3.0,
    3.0 / 4.0,
    1.0,
];

/// Round a raw scaled quantity to a realistic measurable amount.
///
/// The name is currently unused; it is threaded through so per-food
/// rounding rules (e.g. whole eggs) can be added without changing callers.
pub fn round_quantity(_name: &str, unit: QuantityUnit, value: f64) -> f64 {
    match unit {
        QuantityUnit::Grams => round_grams(value),
        QuantityUnit::Cups => round_cups(value),
        QuantityUnit::Each => value,
    }
}

/// Round a gram amount with granularity that coarsens as quantity grows.
///
/// Non-finite values and negatives return 0. Amounts up to 20 g round to
/// the nearest gram, up to 150 g to the nearest 5 g, and above that to the
/// nearest 10 g.
pub fn round_grams(value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        return 0.0;
    }
    if value <= 20.0 {
        value.round()
    } else if value <= 150.0 {
        (value / 5.0).round() * 5.0
    } else {
        (value / 10.0).round() * 10.0
    }
}

/// Snap a cup amount to the nearest entry in [`CUP_FRACTIONS`].
///
/// The scan only replaces the current best on a strictly smaller
/// difference, so an exact tie keeps the earlier (smaller) fraction.
pub fn round_cups(value: f64) -> f64 {
    let mut best = CUP_FRACTIONS[0];
    let mut best_diff = (value - best).abs();
    for &candidate in &CUP_FRACTIONS[1..] {
        let diff = (value - candidate).abs();
        if diff < best_diff {
            best = candidate;
            best_diff = diff;
        }
    }
    best
}
