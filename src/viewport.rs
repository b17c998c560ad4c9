use crate::config::RenderConfig;

/// The visible rectangular window of the complex plane.
///
/// Always a sub-rectangle of the configured outer extent. Only the zoom
/// controller mutates it; the engine reads it once per pass to map pixel
/// coordinates to complex values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    /// The full outer extent, which is also the zoom-out target.
    pub fn full(config: &RenderConfig) -> Self {
        Viewport {
            x_min: config.x_min_min,
            x_max: config.x_max_max,
            y_min: config.y_min_min,
            y_max: config.y_max_max,
        }
    }

    pub fn span_x(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn span_y(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Complex value under pixel position (x, y) on a width x height canvas.
    /// Row 0 is the top of the image and maps to y_max, so the Y axis is
    /// flipped relative to math convention.
    pub fn point_at(&self, x: f64, y: f64, width: usize, height: usize) -> (f64, f64) {
        let re = self.x_min + self.span_x() * x / width as f64;
        let im = self.y_min + self.span_y() * (height as f64 - y) / height as f64;
        (re, im)
    }

    /// Window of size old/factor centered on the epicenter. When a centered
    /// window would cross the outer extent, the whole window is shifted so
    /// the offending edge lies exactly on the boundary; the window is never
    /// shrunk, so the result is always exactly old/factor wide and tall.
    pub fn zoomed_in(&self, epi_re: f64, epi_im: f64, factor: f64, extent: &Viewport) -> Viewport {
        let (x_min, x_max) =
            shifted_bounds(epi_re, self.span_x() / factor, extent.x_min, extent.x_max);
        let (y_min, y_max) =
            shifted_bounds(epi_im, self.span_y() / factor, extent.y_min, extent.y_max);
        Viewport {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

fn shifted_bounds(epicenter: f64, span: f64, limit_min: f64, limit_max: f64) -> (f64, f64) {
    let mut new_min = epicenter - 0.5 * span;
    let mut new_max = epicenter + 0.5 * span;
    if new_min < limit_min {
        new_min = limit_min;
        new_max = limit_min + span;
    } else if new_max > limit_max {
        new_max = limit_max;
        new_min = limit_max - span;
    }
    (new_min, new_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn extent() -> Viewport {
        Viewport::full(&RenderConfig::default())
    }

    #[test]
    fn full_matches_outer_extent() {
        let vp = extent();
        assert_eq!(vp.x_min, -2.05);
        assert_eq!(vp.x_max, 0.47);
        assert_eq!(vp.y_min, -1.12);
        assert_eq!(vp.y_max, 1.12);
    }

    #[test]
    fn top_left_pixel_maps_to_min_x_max_y() {
        let vp = extent();
        let (re, im) = vp.point_at(0.0, 0.0, 100, 100);
        assert!((re - vp.x_min).abs() < EPS);
        assert!((im - vp.y_max).abs() < EPS);
    }

    #[test]
    fn centered_zoom_keeps_center_and_divides_span() {
        // Scenario: epicenter at the exact center, factor 8, no clamping.
        let vp = Viewport {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -0.5,
            y_max: 0.5,
        };
        let zoomed = vp.zoomed_in(0.0, 0.0, 8.0, &extent());
        assert!((zoomed.span_x() - 0.25).abs() < EPS);
        assert!((zoomed.span_y() - 0.125).abs() < EPS);
        assert!(((zoomed.x_min + zoomed.x_max) / 2.0).abs() < EPS);
        assert!(((zoomed.y_min + zoomed.y_max) / 2.0).abs() < EPS);
    }

    #[test]
    fn boundary_epicenter_shifts_instead_of_shrinking() {
        let outer = extent();
        let zoomed = outer.zoomed_in(outer.x_min, outer.y_max, 8.0, &outer);
        // Exact size, never truncated.
        assert!((zoomed.span_x() - outer.span_x() / 8.0).abs() < EPS);
        assert!((zoomed.span_y() - outer.span_y() / 8.0).abs() < EPS);
        // Shifted flush against the violated edges.
        assert!((zoomed.x_min - outer.x_min).abs() < EPS);
        assert!((zoomed.y_max - outer.y_max).abs() < EPS);
    }

    #[test]
    fn zoomed_window_stays_inside_extent() {
        let outer = extent();
        for &(re, im) in &[
            (-2.05, -1.12),
            (0.47, 1.12),
            (0.0, 0.0),
            (-2.05, 1.12),
            (0.3, -1.0),
        ] {
            let zoomed = outer.zoomed_in(re, im, 8.0, &outer);
            assert!(zoomed.x_min >= outer.x_min - EPS);
            assert!(zoomed.x_max <= outer.x_max + EPS);
            assert!(zoomed.y_min >= outer.y_min - EPS);
            assert!(zoomed.y_max <= outer.y_max + EPS);
            assert!(zoomed.x_min < zoomed.x_max);
            assert!(zoomed.y_min < zoomed.y_max);
        }
    }
}
