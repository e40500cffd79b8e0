// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales mapping data values to pixel positions.
//!
//! Continuous scales ([`ScaleLinear`], [`ScaleLog`]) map a numeric domain
//! onto a pixel range and generate rounded tick values. Discrete scales
//! ([`ScalePoint`], [`ScaleBand`]) position an indexed set of categories
//! along the range. The free functions at the bottom re-fit already built
//! scales against each other (shared zero lines, equalized units).

use crate::spec::DimensionDef;

/// A continuous linear mapping from a numeric domain to a pixel range.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a linear scale.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// The current domain.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The current range.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Replaces the domain, keeping the range.
    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    /// Replaces the range, keeping the domain.
    pub fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    /// Maps a domain value to its pixel position.
    ///
    /// A zero-width domain maps everything to the range start.
    #[must_use]
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (x - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Generates about `count` round tick values covering the domain.
    /// Returns the ticks and the step between them.
    #[must_use]
    pub fn ticks(&self, count: usize) -> (Vec<f64>, f64) {
        let (d0, d1) = self.domain;
        nice_ticks(d0.min(d1), d0.max(d1), count)
    }
}

/// A base-10 logarithmic mapping from a positive domain to a pixel range.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLog {
    /// Creates a log scale. Both domain endpoints must be positive.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// The current domain.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The current range.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Replaces the domain, keeping the range.
    pub fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    /// Replaces the range, keeping the domain.
    pub fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    /// Maps a domain value to its pixel position. Non-positive inputs and
    /// zero-width domains map to the range start.
    #[must_use]
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 || d0 == d1 {
            return r0;
        }
        let (l0, l1) = (d0.log10(), d1.log10());
        r0 + (x.log10() - l0) / (l1 - l0) * (r1 - r0)
    }

    /// The powers of ten falling inside the domain. The returned step is
    /// zero; callers format log ticks from the values themselves.
    #[must_use]
    pub fn ticks(&self) -> (Vec<f64>, f64) {
        let (d0, d1) = self.domain;
        let (lo, hi) = (d0.min(d1), d0.max(d1));
        if lo <= 0.0 || hi <= 0.0 {
            return (Vec::new(), 0.0);
        }
        let first = lo.log10().ceil() as i32;
        let last = hi.log10().floor() as i32;
        let ticks = (first..=last).map(|e| 10f64.powi(e)).collect();
        (ticks, 0.0)
    }
}

/// A continuous scale, linear or logarithmic.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleContinuous {
    /// Linear mapping.
    Linear(ScaleLinear),
    /// Base-10 logarithmic mapping.
    Log(ScaleLog),
}

impl ScaleContinuous {
    /// Creates a linear scale.
    #[must_use]
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::Linear(ScaleLinear::new(domain, range))
    }

    /// Creates a log scale.
    #[must_use]
    pub fn log(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::Log(ScaleLog::new(domain, range))
    }

    /// The current domain.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.domain(),
            Self::Log(s) => s.domain(),
        }
    }

    /// The current range.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.range(),
            Self::Log(s) => s.range(),
        }
    }

    /// Replaces the domain, keeping the range.
    pub fn set_domain(&mut self, domain: (f64, f64)) {
        match self {
            Self::Linear(s) => s.set_domain(domain),
            Self::Log(s) => s.set_domain(domain),
        }
    }

    /// Replaces the range, keeping the domain.
    pub fn set_range(&mut self, range: (f64, f64)) {
        match self {
            Self::Linear(s) => s.set_range(range),
            Self::Log(s) => s.set_range(range),
        }
    }

    /// Maps a domain value to its pixel position.
    #[must_use]
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
        }
    }

    /// Generates tick values and their step.
    #[must_use]
    pub fn ticks(&self, count: usize) -> (Vec<f64>, f64) {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Log(s) => s.ticks(),
        }
    }
}

/// Evenly spaced positions for `count` categories across a range.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalePoint {
    range: (f64, f64),
    count: usize,
    padding: f64,
}

impl ScalePoint {
    /// Creates a point scale with `padding` outer steps on each side.
    #[must_use]
    pub fn new(range: (f64, f64), count: usize, padding: f64) -> Self {
        Self {
            range,
            count,
            padding,
        }
    }

    /// The spacing between adjacent points.
    #[must_use]
    pub fn step(&self) -> f64 {
        let span = self.range.1 - self.range.0;
        let n = self.count;
        if n == 0 {
            return 0.0;
        }
        let divisor = (n as f64 - 1.0).max(0.0) + 2.0 * self.padding;
        if divisor == 0.0 { 0.0 } else { span / divisor }
    }

    /// The pixel position of category `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> f64 {
        let step = self.step();
        self.range.0 + self.padding * step + step * index as f64
    }
}

/// Banded positions with inner and outer padding, for column layouts.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a band scale.
    #[must_use]
    pub fn new(range: (f64, f64), count: usize, padding_inner: f64, padding_outer: f64) -> Self {
        Self {
            range,
            count,
            padding_inner,
            padding_outer,
        }
    }

    fn step(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let span = (self.range.1 - self.range.0).abs();
        let divisor = self.count as f64 - self.padding_inner + 2.0 * self.padding_outer;
        if divisor == 0.0 { 0.0 } else { span / divisor }
    }

    /// The width of each band.
    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// The pixel position of the leading edge of band `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> f64 {
        let start = self.range.0.min(self.range.1);
        let step = self.step();
        start + step * self.padding_outer + step * index as f64
    }
}

/// A discrete scale, points or bands.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleDiscrete {
    /// Evenly spaced points.
    Point(ScalePoint),
    /// Padded bands.
    Band(ScaleBand),
}

impl ScaleDiscrete {
    /// The pixel position of category `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> f64 {
        match self {
            Self::Point(s) => s.position(index),
            Self::Band(s) => s.position(index),
        }
    }

    /// The band width; zero for point scales.
    #[must_use]
    pub fn band_width(&self) -> f64 {
        match self {
            Self::Point(_) => 0.0,
            Self::Band(s) => s.band_width(),
        }
    }

    /// The number of categories.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Point(s) => s.count,
            Self::Band(s) => s.count,
        }
    }
}

/// Generates about `count` round ticks covering `[min, max]`, returning the
/// ticks and the step between them.
pub(crate) fn nice_ticks(min: f64, max: f64, count: usize) -> (Vec<f64>, f64) {
    let span = max - min;
    if span <= 0.0 || span.is_nan() || count == 0 {
        return (vec![min], 0.0);
    }
    let mut step = 10f64.powf((span / count as f64).log10().floor());
    let err = count as f64 / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step + step * 0.5;
    let mut ticks = Vec::new();
    let mut t = start;
    while t < stop {
        ticks.push(t);
        t += step;
    }
    (ticks, step)
}

/// Extends the domain of `scale` so that `scale.map(x) == y`, keeping the
/// range fixed. The new domain is always a superset of the previous one;
/// a target that could only be met by shrinking the domain is ignored.
pub fn adjust_scale_domain(scale: &mut ScaleContinuous, x: f64, y: f64) {
    match scale {
        ScaleContinuous::Linear(s) => {
            let domain = adjust_domain(s.domain(), s.range(), x, y);
            s.set_domain(domain);
        }
        ScaleContinuous::Log(s) => {
            // Solve in log space, where the mapping is affine.
            let (d0, d1) = s.domain();
            if d0 <= 0.0 || d1 <= 0.0 || x <= 0.0 {
                return;
            }
            let (l0, l1) = adjust_domain((d0.log10(), d1.log10()), s.range(), x.log10(), y);
            s.set_domain((10f64.powf(l0), 10f64.powf(l1)));
        }
    }
}

/// Affine-solves a new `[d0, d1]` so that `x` maps to `y`, moving only the
/// endpoint whose move enlarges the domain.
fn adjust_domain(domain: (f64, f64), range: (f64, f64), x: f64, y: f64) -> (f64, f64) {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if r1 == r0 {
        return domain;
    }
    let t = (y - r0) / (r1 - r0);
    // Keep d1 and move the lower endpoint, or keep d0 and move the upper
    // one. When neither move enlarges the domain the target is
    // unsatisfiable under the superset rule, so leave the domain alone.
    let lower = (t != 1.0).then(|| (x - t * d1) / (1.0 - t));
    let upper = (t != 0.0).then(|| d0 + (x - d0) / t);
    match (lower, upper) {
        (Some(lo), _) if lo <= d0 => (lo, d1),
        (_, Some(hi)) if hi >= d1 => (d0, hi),
        _ => domain,
    }
}

/// Moves the zero lines of two scales to a common pixel position, chosen as
/// the average of where each scale currently places zero. Both domains only
/// ever grow.
pub fn synchronize_scale_zeros(a: &mut ScaleContinuous, b: &mut ScaleContinuous) {
    let z = (a.map(0.0) + b.map(0.0)) / 2.0;
    adjust_scale_domain(a, 0.0, z);
    adjust_scale_domain(b, 0.0, z);
}

/// Gives two axes over comparable units the same domain-per-pixel density
/// by shrinking the denser axis's range. Returns `false` without touching
/// either scale when the dimensions are not unit-comparable.
pub fn equalize_scales(
    x_dim: &DimensionDef,
    y_dim: &DimensionDef,
    x_scale: &mut ScaleContinuous,
    y_scale: &mut ScaleContinuous,
) -> bool {
    let comparable = (x_dim.is_true_numerical() && y_dim.is_true_numerical())
        || (x_dim.is_date() && y_dim.is_date());
    if !comparable {
        return false;
    }
    let ratio = |s: &ScaleContinuous| {
        let (d0, d1) = s.domain();
        let (r0, r1) = s.range();
        let span = (r1 - r0).abs();
        if span == 0.0 { 0.0 } else { (d1 - d0).abs() / span }
    };
    let x_ratio = ratio(x_scale);
    let y_ratio = ratio(y_scale);
    if x_ratio == 0.0 || y_ratio == 0.0 {
        return true;
    }
    let shrink = |s: &mut ScaleContinuous, to_ratio: f64| {
        let (d0, d1) = s.domain();
        let (r0, r1) = s.range();
        let dir = (r1 - r0).signum();
        s.set_range((r0, r0 + dir * (d1 - d0).abs() / to_ratio));
    };
    if x_ratio < y_ratio {
        shrink(x_scale, y_ratio);
    } else if y_ratio < x_ratio {
        shrink(y_scale, x_ratio);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::DimensionKind;

    #[test]
    fn linear_map_is_affine() {
        let s = ScaleLinear::new((0.0, 100.0), (0.0, 500.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(50.0), 250.0);
        assert_eq!(s.map(100.0), 500.0);
    }

    #[test]
    fn linear_map_handles_degenerate_domain() {
        let s = ScaleLinear::new((7.0, 7.0), (10.0, 500.0));
        assert_eq!(s.map(7.0), 10.0);
        assert_eq!(s.map(123.0), 10.0);
    }

    #[test]
    fn linear_ticks_are_round() {
        let s = ScaleLinear::new((0.0, 100.0), (0.0, 500.0));
        let (ticks, step) = s.ticks(10);
        assert_eq!(step, 10.0);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(100.0));
        assert_eq!(ticks.len(), 11);
    }

    #[test]
    fn log_map_and_ticks() {
        let s = ScaleLog::new((1.0, 1000.0), (0.0, 300.0));
        assert_eq!(s.map(1.0), 0.0);
        assert!((s.map(10.0) - 100.0).abs() < 1e-9);
        assert_eq!(s.map(1000.0), 300.0);
        assert_eq!(s.map(-4.0), 0.0);
        let (ticks, _) = s.ticks();
        assert_eq!(ticks, vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn point_positions_include_outer_padding() {
        // Three points, half-step padding: steps at 1/6, 3/6, 5/6 of the span.
        let s = ScalePoint::new((0.0, 300.0), 3, 0.5);
        assert_eq!(s.step(), 100.0);
        assert_eq!(s.position(0), 50.0);
        assert_eq!(s.position(1), 150.0);
        assert_eq!(s.position(2), 250.0);
    }

    #[test]
    fn band_positions_and_width() {
        // With outer padding = inner / 2 the step divides the span exactly.
        let s = ScaleBand::new((0.0, 400.0), 4, 0.2, 0.1);
        assert!((s.band_width() - 80.0).abs() < 1e-9);
        assert!((s.position(0) - 10.0).abs() < 1e-9);
        assert!((s.position(3) - 310.0).abs() < 1e-9);
    }

    #[test]
    fn adjusted_domain_is_a_superset_and_hits_the_target() {
        let mut s = ScaleContinuous::linear((0.0, 100.0), (500.0, 0.0));
        adjust_scale_domain(&mut s, -20.0, 500.0);
        let (d0, d1) = s.domain();
        assert!(d0 <= -20.0 && d1 >= 100.0);
        assert!((s.map(-20.0) - 500.0).abs() < 1e-9);

        let mut s = ScaleContinuous::linear((0.0, 100.0), (0.0, 500.0));
        adjust_scale_domain(&mut s, 150.0, 500.0);
        let (d0, d1) = s.domain();
        assert!(d0 <= 0.0 && d1 >= 150.0);
        assert!((s.map(150.0) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn unsatisfiable_targets_leave_the_domain_unchanged() {
        // Pinning an interior value to the far range endpoint would require
        // shrinking the domain; it must stay as it was.
        let mut s = ScaleContinuous::linear((0.0, 100.0), (0.0, 500.0));
        adjust_scale_domain(&mut s, 50.0, 500.0);
        assert_eq!(s.domain(), (0.0, 100.0));

        let mut s = ScaleContinuous::linear((0.0, 100.0), (500.0, 0.0));
        adjust_scale_domain(&mut s, 50.0, 500.0);
        assert_eq!(s.domain(), (0.0, 100.0));
    }

    #[test]
    fn synchronized_zeros_share_a_pixel() {
        let mut a = ScaleContinuous::linear((-10.0, 90.0), (400.0, 0.0));
        let mut b = ScaleContinuous::linear((-50.0, 50.0), (400.0, 0.0));
        synchronize_scale_zeros(&mut a, &mut b);
        assert!((a.map(0.0) - b.map(0.0)).abs() < 1e-9);
        let (a0, a1) = a.domain();
        assert!(a0 <= -10.0 && a1 >= 90.0);
        let (b0, b1) = b.domain();
        assert!(b0 <= -50.0 && b1 >= 50.0);
    }

    #[test]
    fn equalized_scales_have_equal_density() {
        let x_dim = DimensionDef::new("x", DimensionKind::Numerical { binned: false });
        let y_dim = DimensionDef::new("y", DimensionKind::Numerical { binned: false });
        let mut x = ScaleContinuous::linear((0.0, 100.0), (0.0, 400.0));
        let mut y = ScaleContinuous::linear((0.0, 50.0), (300.0, 0.0));
        assert!(equalize_scales(&x_dim, &y_dim, &mut x, &mut y));
        let density = |s: &ScaleContinuous| {
            let (d0, d1) = s.domain();
            let (r0, r1) = s.range();
            (d1 - d0).abs() / (r1 - r0).abs()
        };
        assert!((density(&x) - density(&y)).abs() < 1e-9);
    }

    #[test]
    fn incomparable_dimensions_are_left_alone() {
        let x_dim = DimensionDef::new("x", DimensionKind::Alphanum);
        let y_dim = DimensionDef::new("y", DimensionKind::Numerical { binned: false });
        let mut x = ScaleContinuous::linear((0.0, 100.0), (0.0, 400.0));
        let mut y = ScaleContinuous::linear((0.0, 50.0), (300.0, 0.0));
        assert!(!equalize_scales(&x_dim, &y_dim, &mut x, &mut y));
        assert_eq!(x.range(), (0.0, 400.0));
        assert_eq!(y.range(), (300.0, 0.0));
    }
}
