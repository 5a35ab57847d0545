use crate::{
    config::{DF, PLOT_CONFIG},
    domain::{GeoBounds, GeoPoint, MapView},
    models::HeatSample,
    utils::normalize_max,
};

/// One raster cell of the heat layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCell {
    pub bounds: GeoBounds,
    /// Normalized heat in [0, 1]
    pub heat: f64,
}

/// Heat samples splatted onto a regular lat/lon raster with a gaussian kernel,
/// then max-normalized so the hottest cell is 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatGrid {
    bounds: GeoBounds,
    cells_per_axis: usize,
    // Row-major, row 0 = min_lat
    values: Vec<f64>,
}

impl HeatGrid {
    /// Kernel cut-off in standard deviations. Contributions beyond this are ignored.
    const KERNEL_CUTOFF_SIGMAS: f64 = 3.0;

    pub fn build(
        samples: &[HeatSample],
        bounds: GeoBounds,
        cells_per_axis: usize,
        sigma_deg: f64,
    ) -> Self {
        let n = cells_per_axis.max(1);
        let cell_lat = bounds.lat_span() / n as f64;
        let cell_lon = bounds.lon_span() / n as f64;
        let cutoff = sigma_deg * Self::KERNEL_CUTOFF_SIGMAS;
        let two_sigma_sq = 2.0 * sigma_deg * sigma_deg;

        let mut raw = vec![0.0_f64; n * n];
        if sigma_deg > 0.0 {
            for row in 0..n {
                let lat = bounds.min_lat + (row as f64 + 0.5) * cell_lat;
                // Longitude degrees shrink towards the poles
                let lon_scale = lat.to_radians().cos().abs();
                for col in 0..n {
                    let lon = bounds.min_lon + (col as f64 + 0.5) * cell_lon;
                    raw[row * n + col] = samples
                        .iter()
                        .filter_map(|s| {
                            let d_lat = s.lat() - lat;
                            let d_lon = (s.lon() - lon) * lon_scale;
                            let d_sq = d_lat * d_lat + d_lon * d_lon;
                            (d_sq <= cutoff * cutoff)
                                .then(|| s.intensity * (-d_sq / two_sigma_sq).exp())
                        })
                        .sum::<f64>();
                }
            }
        }

        Self {
            bounds,
            cells_per_axis: n,
            values: normalize_max(&raw),
        }
    }

    /// Grid covering every sample of a selection plus the kernel footprint,
    /// with the kernel sized from the view's pixel scale.
    pub fn for_selection(
        samples: &[HeatSample],
        center: GeoPoint,
        view: &MapView,
        jitter_deg: f64,
    ) -> Self {
        let footprint_px = PLOT_CONFIG.heat_radius_px + PLOT_CONFIG.heat_blur_px;
        let footprint_deg = footprint_px * view.deg_per_px();
        let sigma_deg = footprint_deg / Self::KERNEL_CUTOFF_SIGMAS;
        let half = jitter_deg + footprint_deg;
        let grid = crate::trace_time!("Build Heat Grid", 2_000, {
            Self::build(
                samples,
                GeoBounds::around(center, half, half),
                PLOT_CONFIG.heat_grid_cells,
                sigma_deg,
            )
        });

        #[cfg(debug_assertions)]
        if DF.log_heat_grid {
            log::info!(
                "Heat grid rebuilt: {}x{} cells, sigma {:.5} deg, {} hot cells",
                grid.cells_per_axis,
                grid.cells_per_axis,
                sigma_deg,
                grid.values.iter().filter(|v| **v > PLOT_CONFIG.heat_floor).count()
            );
        }
        grid
    }

    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    pub fn cells_per_axis(&self) -> usize {
        self.cells_per_axis
    }

    pub fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.cells_per_axis || col >= self.cells_per_axis {
            return None;
        }
        self.values.get(row * self.cells_per_axis + col).copied()
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn cells(&self) -> impl Iterator<Item = HeatCell> + '_ {
        let n = self.cells_per_axis;
        let cell_lat = self.bounds.lat_span() / n as f64;
        let cell_lon = self.bounds.lon_span() / n as f64;
        self.values.iter().enumerate().map(move |(i, &heat)| {
            let (row, col) = (i / n, i % n);
            let min_lat = self.bounds.min_lat + row as f64 * cell_lat;
            let min_lon = self.bounds.min_lon + col as f64 * cell_lon;
            HeatCell {
                bounds: GeoBounds {
                    min_lat,
                    max_lat: min_lat + cell_lat,
                    min_lon,
                    max_lon: min_lon + cell_lon,
                },
                heat,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(center: GeoPoint, half: f64) -> GeoBounds {
        GeoBounds::around(center, half, half)
    }

    #[test]
    fn empty_sample_set_gives_cold_grid() {
        let grid = HeatGrid::build(&[], square(GeoPoint::new(0.0, 0.0), 0.02), 16, 0.002);
        assert_eq!(grid.cells().count(), 16 * 16);
        assert_eq!(grid.max(), 0.0);
    }

    #[test]
    fn hottest_cell_is_one_and_sits_on_the_sample() {
        let center = GeoPoint::new(24.9, 91.87);
        let samples = [HeatSample::new(24.9, 91.87, 0.8)];
        let grid = HeatGrid::build(&samples, square(center, 0.02), 21, 0.003);

        assert!((grid.max() - 1.0).abs() < 1e-12);
        assert!(grid.cells().all(|c| (0.0..=1.0).contains(&c.heat)));

        let hottest = grid
            .cells()
            .fold(None::<HeatCell>, |best, c| match best {
                Some(b) if b.heat >= c.heat => Some(b),
                _ => Some(c),
            });
        let hottest = hottest.map(|c| c.bounds);
        assert!(hottest.is_some_and(|b| b.contains(center)));
    }

    #[test]
    fn far_cells_stay_cold() {
        let center = GeoPoint::new(0.0, 0.0);
        let samples = [HeatSample::new(0.0, 0.0, 1.0)];
        let grid = HeatGrid::build(&samples, square(center, 0.05), 10, 0.001);
        // Corner cell is ~0.06 deg away, far past 3 sigma
        assert_eq!(grid.value_at(0, 0), Some(0.0));
        assert_eq!(grid.value_at(10, 0), None);
    }

    #[test]
    fn selection_grid_covers_jitter_square() {
        let center = GeoPoint::new(24.9, 91.87);
        let view = MapView::focused_on(center);
        let grid = HeatGrid::for_selection(&[], center, &view, 0.01);
        let b = grid.bounds();
        assert!(b.contains(center.offset(0.01, 0.01)));
        assert!(b.contains(center.offset(-0.01, -0.01)));
        assert_eq!(grid.cells_per_axis(), PLOT_CONFIG.heat_grid_cells);
    }
}
