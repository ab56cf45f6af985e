//! Spearman rank correlation between computed scores and human ratings.

use std::cmp::Ordering;

use crate::types::{WsdError, WsdResult};

/// Spearman's rho: Pearson correlation of the two series' ranks.
///
/// Tied values share their average rank. A constant series has no defined
/// correlation and yields `NaN`.
pub fn spearman(a: &[f64], b: &[f64]) -> WsdResult<f64> {
    if a.len() != b.len() {
        return Err(WsdError::InvalidSeries {
            reason: format!("length mismatch: {} vs {}", a.len(), b.len()),
        });
    }
    if a.len() < 2 {
        return Err(WsdError::InvalidSeries {
            reason: format!("need at least 2 pairs, got {}", a.len()),
        });
    }
    if let Some(v) = a.iter().chain(b).find(|v| v.is_nan()) {
        return Err(WsdError::InvalidSeries {
            reason: format!("series contains {}", v),
        });
    }
    Ok(pearson(&rank(a), &rank(b)))
}

/// 1-based ranks, ties averaged.
pub fn rank(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
    order.sort_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && order[j].1 == order[i].1 {
            j += 1;
        }
        let shared = (i + j - 1) as f64 / 2.0 + 1.0;
        for &(idx, _) in &order[i..j] {
            ranks[idx] = shared;
        }
        i = j;
    }
    ranks
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}
