//! ASCII time-vs-size charts for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - measured points: `o`
//! - fitted curve of the winning candidate: `-` line
//!
//! The x axis is logarithmic: size lists typically span several decades
//! (10 .. 2000), and a linear axis would pile the small sizes onto one
//! column.

use crate::domain::{CandidateFit, EstimationResult};
use crate::models::{basis_value, predict};

/// Render a time-vs-size chart for one estimation result.
pub fn render_ascii_plot(result: &EstimationResult, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let m = &result.measurements;
    let (n_min, n_max) = size_range(&m.sizes).unwrap_or((1.0, 2048.0));

    let curve = result
        .selection
        .best
        .map(|fit| sample_curve(&fit, n_min, n_max, width.max(2)));

    let (t_min, t_max) = time_range(&m.times, curve.as_deref()).unwrap_or((0.0, 1.0));
    let (t_min, t_max) = pad_range(t_min, t_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the curve first so measured points can overlay it.
    if let Some(curve) = &curve {
        draw_curve(&mut grid, curve, n_min, n_max, t_min, t_max);
    }

    for (&n, &t) in m.sizes.iter().zip(m.times.iter()) {
        let x = map_x(n as f64, n_min, n_max, width);
        let y = map_y(t, t_min, t_max, height);
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {} ({}) | n=[{}, {}] | t=[{t_min:.3e}, {t_max:.3e}]s\n",
        result.name,
        result.best_label(),
        n_min as u64,
        n_max as u64,
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn size_range(sizes: &[u64]) -> Option<(f64, f64)> {
    let min = *sizes.iter().min()? as f64;
    let max = *sizes.iter().max()? as f64;
    if max > min { Some((min, max)) } else { None }
}

fn time_range(times: &[f64], curve: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    let mut min_t = f64::INFINITY;
    let mut max_t = f64::NEG_INFINITY;

    for &t in times {
        min_t = min_t.min(t);
        max_t = max_t.max(t);
    }
    if let Some(curve) = curve {
        for &(_, t) in curve {
            min_t = min_t.min(t);
            max_t = max_t.max(t);
        }
    }

    if min_t.is_finite() && max_t.is_finite() && max_t > min_t {
        Some((min_t, max_t))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

/// Sample the fitted curve at geometrically spaced sizes.
fn sample_curve(fit: &CandidateFit, n_min: f64, n_max: f64, count: usize) -> Vec<(f64, f64)> {
    let count = count.max(2);
    let ln_min = n_min.max(1.0).ln();
    let ln_max = n_max.max(1.0).ln();

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let u = i as f64 / (count as f64 - 1.0);
        let n = (ln_min + u * (ln_max - ln_min)).exp();
        let size = n.round().max(1.0) as u64;
        let t = predict(fit.class, size, fit.coefficient);
        if basis_value(fit.class, size).is_finite() {
            out.push((n, t));
        }
    }
    out
}

fn map_x(n: f64, n_min: f64, n_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let ln_min = n_min.max(1.0).ln();
    let ln_max = n_max.max(1.0).ln();
    let u = ((n.max(1.0).ln() - ln_min) / (ln_max - ln_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(t: f64, t_min: f64, t_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    // t=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    n_min: f64,
    n_max: f64,
    t_min: f64,
    t_max: f64,
) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(n, t) in curve {
        let x = map_x(n, n_min, n_max, width);
        let y = map_y(t, t_min, t_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, '-');
        } else {
            grid[y][x] = '-';
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComplexityClass, FitSelection, Measurements};

    #[test]
    fn plot_golden_snapshot_small() {
        let result = EstimationResult {
            name: "probe".to_string(),
            measurements: Measurements {
                sizes: vec![10, 1000],
                times: vec![0.0, 0.01],
            },
            selection: FitSelection {
                best: Some(CandidateFit {
                    class: ComplexityClass::Constant,
                    coefficient: 0.005,
                    mse: 0.0,
                }),
                fits: vec![],
                skipped: vec![],
            },
        };

        let txt = render_ascii_plot(&result, 10, 5);
        let expected = concat!(
            "Plot: probe (O(1)) | n=[10, 1000] | t=[-5.000e-4, 1.050e-2]s\n",
            "         o\n",
            "          \n",
            "----------\n",
            "          \n",
            "o         \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn no_fit_plot_still_renders_points() {
        let result = EstimationResult {
            name: "odd".to_string(),
            measurements: Measurements {
                sizes: vec![10, 100, 1000],
                times: vec![0.001, 0.002, 0.003],
            },
            selection: FitSelection {
                best: None,
                fits: vec![],
                skipped: vec![],
            },
        };

        let txt = render_ascii_plot(&result, 20, 8);
        assert!(txt.starts_with("Plot: odd (no fit found)"));
        // Count markers over the grid rows only; the header text also
        // contains 'o's.
        let grid: String = txt.lines().skip(1).collect();
        assert_eq!(grid.matches('o').count(), 3);
        // No winning candidate means no fitted curve in the grid rows.
        assert!(!grid.contains('-'));
    }
}
