/// `max` that propagates `NaN` from either side.
///
/// `f64::max` silently drops a `NaN` operand; timing reductions must not, so a malformed
/// duration stays visible in every value derived from it.
pub(crate) fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
