//! Series math used by the indicator modules.
//!
//! Every `*_series` helper returns a vector aligned index-for-index with its input.

/// Smoothing factor for a span-based EMA: `2 / (span + 1)`.
pub fn span_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Simple moving average over a trailing window.
///
/// `None` until `window` values (inclusive of the current one) are available.
pub fn sma_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                let slice = &values[i + 1 - window..=i];
                Some(slice.iter().sum::<f64>() / window as f64)
            }
        })
        .collect()
}

/// Recursive exponential moving average seeded at the first value.
///
/// `ema[0] = values[0]`, then `ema[t] = ema[t-1] + alpha * (values[t] - ema[t-1])`,
/// which is the same recurrence as `alpha*v + (1-alpha)*prev` but keeps a
/// constant input exactly constant.
pub fn ema_series(values: &[f64], alpha: f64) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };

    values
        .iter()
        .scan(first, |prev, &v| {
            *prev += alpha * (v - *prev);
            Some(*prev)
        })
        .collect()
}

/// EMA with span-based smoothing (`alpha = 2 / (span + 1)`).
pub fn ema_series_span(values: &[f64], span: usize) -> Vec<f64> {
    ema_series(values, span_alpha(span))
}

/// True range of one bar. Without a previous close it is just `high - low`.
pub fn true_range(high: f64, low: f64, prev_close: Option<f64>) -> f64 {
    let range = high - low;
    match prev_close {
        Some(prev) => range.max((high - prev).abs()).max((low - prev).abs()),
        None => range,
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Value at the final index of an aligned series, if defined and finite.
pub fn latest_value(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten().filter(|v| v.is_finite())
}
