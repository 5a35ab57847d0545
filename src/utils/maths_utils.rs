use argminmax::ArgMinMax;

#[inline]
pub(crate) fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

/// Normalizes a vector of (positive) f64 to 0.0 to 1.0. Guarantees largest value is 1.0.
/// Empty input, or a max at or below zero, is returned unchanged.
#[inline]
pub(crate) fn normalize_max(vec: &[f64]) -> Vec<f64> {
    if vec.is_empty() {
        return Vec::new();
    }
    let max_value = get_max(vec);
    if max_value <= f64::EPSILON {
        return vec.to_vec();
    }
    vec.iter().map(|&x| x / max_value).collect()
}

/// Linearly maps a value from one range to another while preserving its relative proportion.
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let t = (val - in_min) / (in_max - in_min);
    out_min + t * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_max_scales_peak_to_one() {
        let out = normalize_max(&[0.0, 2.0, 4.0]);
        assert_eq!(out, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn normalize_max_leaves_all_zero_input() {
        assert_eq!(normalize_max(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(normalize_max(&[]).is_empty());
    }

    #[test]
    fn remap_is_linear() {
        assert!((remap(0.5, 0.0, 1.0, 0.05, 0.85) - 0.45).abs() < 1e-12);
    }
}
