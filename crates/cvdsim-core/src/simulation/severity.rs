//! Severity blending between the original and the simulated color.

/// Severities at or above this (and not above 1.0) skip the blend entirely.
pub const FULL_SEVERITY_THRESHOLD: f32 = 0.999;

/// Linearly interpolate from `original` (severity 0) to `simulated` (severity 1).
///
/// ```text
/// out = simulated × severity + original × (1 − severity)
/// ```
///
/// The blend happens in linear RGB. Because every projection in this crate is
/// linear, blending there is equivalent to blending in LMS.
///
/// Severities outside `[0, 1]` are not clamped: the formula extrapolates.
#[inline]
pub fn blend(simulated: [f32; 3], original: [f32; 3], severity: f32) -> [f32; 3] {
    if is_full(severity) {
        return simulated;
    }
    let keep = 1.0 - severity;
    [
        simulated[0] * severity + original[0] * keep,
        simulated[1] * severity + original[1] * keep,
        simulated[2] * severity + original[2] * keep,
    ]
}

/// Whether `severity` is close enough to 1.0 to return the simulated color as is.
#[inline]
pub fn is_full(severity: f32) -> bool {
    (FULL_SEVERITY_THRESHOLD..=1.0).contains(&severity)
}

/// Whether `severity` lies in the nominal `[0, 1]` range.
#[inline]
pub fn is_nominal(severity: f32) -> bool {
    (0.0..=1.0).contains(&severity)
}
