// File: crates/snake-core/src/grid.rs
// Summary: Tick/grid layout helpers (even spacing and rounded "nice" steps).

/// Evenly spaced values from `start` to `end`, both included. Interpolates per
/// value so a span that overflows `f64` still yields finite output.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let last = (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            let t = i as f64 / last;
            start * (1.0 - t) + end * t
        })
        .collect()
}

/// Step of the form {1, 2, 5} x 10^k closest to `span / count`.
pub fn nice_step(span: f64, count: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) || count == 0 {
        return 1.0;
    }
    let raw = span / count as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 { 1.0 } else if norm < 3.0 { 2.0 } else if norm < 7.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Multiples of `nice_step` that fall inside `[min, max]`.
///
/// Falls back to `linspace` when the span is not representable or the rounded
/// steps would produce far more ticks than asked for.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if !span.is_finite() {
        return linspace(lo, hi, count.max(2));
    }
    let step = nice_step(span, count);
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if !(first.is_finite() && last.is_finite()) || last - first > (count.max(1) * 4) as f64 {
        return linspace(lo, hi, count.max(2));
    }
    let (first, last) = (first as i64, last as i64);
    (first..=last).map(|k| k as f64 * step).collect()
}
