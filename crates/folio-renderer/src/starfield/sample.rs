//! Uniform point-in-sphere sampling.

use rand::Rng;

/// Sample `count` points uniformly distributed by volume inside a solid
/// sphere of the given radius.
///
/// Returns a flat buffer of length `3 * count` (x, y, z triples). For
/// each point, three independent uniforms are drawn: the radius uses a
/// cube-root transform (corrects for the r² Jacobian so density is
/// uniform by volume, not by radius), and the polar angle uses
/// `acos(2v - 1)` so points do not bunch at the poles. No retries; the
/// loop always runs exactly `count` iterations.
pub fn sample_sphere_points<R: Rng + ?Sized>(count: u32, radius: f32, rng: &mut R) -> Vec<f32> {
    let mut points = Vec::with_capacity(count as usize * 3);

    for _ in 0..count {
        let r = radius * rng.gen::<f32>().cbrt();
        let theta = rng.gen::<f32>() * 2.0 * std::f32::consts::PI;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();

        let sin_phi = phi.sin();
        points.push(r * sin_phi * theta.cos());
        points.push(r * sin_phi * theta.sin());
        points.push(r * phi.cos());
    }

    points
}

/// Sample with the thread-local RNG.
pub fn sample_sphere_points_default(count: u32, radius: f32) -> Vec<f32> {
    sample_sphere_points(count, radius, &mut rand::thread_rng())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn norms(points: &[f32]) -> Vec<f32> {
        points
            .chunks_exact(3)
            .map(|p| (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt())
            .collect()
    }

    #[test]
    fn returns_exactly_three_floats_per_point() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = sample_sphere_points(1000, 1.5, &mut rng);
        assert_eq!(points.len(), 3000);
    }

    #[test]
    fn zero_points_returns_empty_buffer() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = sample_sphere_points(0, 1.5, &mut rng);
        assert!(points.is_empty());
    }

    #[test]
    fn single_point_unit_radius_has_norm_at_most_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = sample_sphere_points(1, 1.0, &mut rng);
        assert_eq!(points.len(), 3);
        assert!(norms(&points)[0] <= 1.0 + 1e-5);
    }

    #[test]
    fn all_points_lie_inside_the_sphere() {
        let mut rng = StdRng::seed_from_u64(42);
        let radius = 1.5;
        let points = sample_sphere_points(10_000, radius, &mut rng);
        for n in norms(&points) {
            assert!(n <= radius + 1e-4, "norm {n} exceeds radius {radius}");
        }
    }

    #[test]
    fn density_is_uniform_by_volume() {
        // The half-radius ball holds (1/2)³ = 1/8 of the volume, so over
        // a large sample about 12.5% of the points should fall inside it.
        let mut rng = StdRng::seed_from_u64(1234);
        let radius = 1.5;
        let count = 100_000;
        let points = sample_sphere_points(count, radius, &mut rng);

        let inside = norms(&points)
            .iter()
            .filter(|&&n| n <= radius / 2.0)
            .count();
        let fraction = inside as f64 / count as f64;
        assert!(
            (fraction - 0.125).abs() < 0.01,
            "fraction within half radius was {fraction}, expected ~0.125"
        );
    }

    #[test]
    fn hemispheres_are_roughly_balanced() {
        let mut rng = StdRng::seed_from_u64(99);
        let count = 50_000;
        let points = sample_sphere_points(count, 1.0, &mut rng);

        let upper = points.chunks_exact(3).filter(|p| p[2] > 0.0).count();
        let fraction = upper as f64 / count as f64;
        assert!(
            (fraction - 0.5).abs() < 0.02,
            "upper hemisphere fraction was {fraction}"
        );
    }

    #[test]
    fn seeded_sampling_is_deterministic() {
        let a = sample_sphere_points(100, 1.5, &mut StdRng::seed_from_u64(5));
        let b = sample_sphere_points(100, 1.5, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
