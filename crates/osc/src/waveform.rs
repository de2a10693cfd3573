//! Closed-form tableless generators
//!
//! Waveforms computed directly from the full native-width phase, with no
//! stored table. Every generator is a pure function of its inputs, safe
//! for unsynchronized concurrent use, and continuous across the phase
//! wrap. Selection between waveform segments goes through all-ones /
//! all-zeros integer masks instead of conditionals, keeping per-sample
//! cost constant.
//!
//! Shape parameters outside their documented range are clamped, not
//! rejected; validation belongs to the calling layer.

use crate::phase::Phase;

/// One full cycle expressed in f64, i.e. 2^W for the native word width W.
const PHASE_SPAN: f64 = (1u128 << usize::BITS) as f64;

/// Phase-to-[-1, 1) scale for the two sawtooth ramps.
const SAW_SCALE: f64 = 2.0 / PHASE_SPAN;

/// Phase-to-[-1, 1) scale for the symmetric triangle's folded half cycle.
const TRIANGLE_SCALE: f64 = 4.0 / PHASE_SPAN;

/// Per-lane bitwise select: `mask` must be all ones or all zeros.
#[inline(always)]
fn mask_select(mask: u32, on_set: f32, on_clear: f32) -> f32 {
    f32::from_bits((on_set.to_bits() & mask) | (on_clear.to_bits() & !mask))
}

/// Rising sawtooth: maps the full phase range linearly onto [-1, 1].
///
/// Strictly monotonic over the cycle, with an instant wrap at phase
/// overflow. `saw(0) == -1.0` and `saw(Phase::MAX) == 1.0`.
#[inline(always)]
pub fn saw(phase: Phase) -> f32 {
    (phase as f64 * SAW_SCALE - 1.0) as f32
}

/// Time-reversed sawtooth; for every phase, `saw(p) + saw_down(p)` is
/// zero to within rounding.
#[inline(always)]
pub fn saw_down(phase: Phase) -> f32 {
    (1.0 - phase as f64 * SAW_SCALE) as f32
}

/// Duty-cycle pulse: −1 while the normalized phase is below `width`,
/// +1 from the threshold on.
///
/// The threshold is computed once per call from `width`, which is clamped
/// to [0, 1]. For the fixed 50% cycle, `square` skips the multiply.
#[inline(always)]
pub fn pulse(phase: Phase, width: f32) -> f32 {
    let threshold = (width.clamp(0.0, 1.0) as f64 * PHASE_SPAN) as usize;
    let mask = ((phase >= threshold) as u32).wrapping_neg();
    mask_select(mask, 1.0, -1.0)
}

/// 50% duty-cycle square wave: −1 for the first half cycle, +1 for the
/// second.
///
/// Special case of `pulse` at width 0.5; the threshold test collapses to
/// the phase sign bit, so no scaling multiply is needed.
#[inline(always)]
pub fn square(phase: Phase) -> f32 {
    let mask = ((phase >> (usize::BITS - 1)) as u32).wrapping_neg();
    mask_select(mask, 1.0, -1.0)
}

/// Symmetric triangle: ramps −1 → +1 over the first half cycle, back
/// down over the second.
///
/// The phase is folded at the midpoint by XOR with an all-ones /
/// all-zeros mask from the phase's top bit, then rescaled. Values at
/// phase 0 and `Phase::MAX` are adjacent on the falling-to-rising seam,
/// so the wrap is continuous.
#[inline(always)]
pub fn triangle(phase: Phase) -> f32 {
    // All ones when the phase sits in the falling half
    let fold = (phase >> (usize::BITS - 1)).wrapping_neg();
    let folded = phase ^ fold;
    (folded as f64 * TRIANGLE_SCALE - 1.0) as f32
}

/// Asymmetric triangle: the rising segment occupies `slope` of the
/// cycle, the falling segment the remainder.
///
/// Both ramps are computed unconditionally with their own scale and the
/// result picked by a bitmask from `phase > pivot`. `slope` is clamped
/// to [0.01, 0.99] so neither segment collapses to zero length.
/// `triangle_asym(p, 0.5)` matches `triangle(p)` to within rounding; the
/// dedicated fold in `triangle` avoids the two divisions.
#[inline(always)]
pub fn triangle_asym(phase: Phase, slope: f32) -> f32 {
    let pivot = (slope.clamp(0.01, 0.99) as f64 * PHASE_SPAN) as usize;

    let rising = phase as f64 * (2.0 / pivot as f64) - 1.0;
    let falling = (PHASE_SPAN - phase as f64) * (2.0 / (PHASE_SPAN - pivot as f64)) - 1.0;

    let mask = ((phase > pivot) as u32).wrapping_neg();
    mask_select(mask, falling as f32, rising as f32)
}
