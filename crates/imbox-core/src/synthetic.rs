//! Synthetic dataset generation
//!
//! Reproducible test data for the demo binary and integration tests.
//! Uses a small seeded splitmix-style RNG rather than an external
//! crate; the same seed always yields the same datasets.

/// Generate the demo's three datasets: a wide uniform spread with a
/// constant center block and high/low flier bands, a second like it
/// shifted down, and every other sample of the second.
pub fn demo_datasets(seed: u64) -> Vec<Vec<f64>> {
    let mut rng = SimpleRng::new(seed);

    let first = spread_with_fliers(&mut rng, 50.0);
    let second = spread_with_fliers(&mut rng, 40.0);
    let third: Vec<f64> = second.iter().copied().step_by(2).collect();

    vec![first, second, third]
}

/// One dataset: 50 uniform samples in [0, 100), 25 copies of
/// `center`, 10 high fliers in [100, 200), 10 low fliers in (-100, 0].
fn spread_with_fliers(rng: &mut SimpleRng, center: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(95);
    data.extend((0..50).map(|_| rng.next_f64() * 100.0));
    data.extend(std::iter::repeat(center).take(25));
    data.extend((0..10).map(|_| rng.next_f64() * 100.0 + 100.0));
    data.extend((0..10).map(|_| rng.next_f64() * -100.0));
    data
}

/// Normally distributed samples via the Box-Muller transform.
pub fn gaussian_dataset(seed: u64, n: usize, mean: f64, std_dev: f64) -> Vec<f64> {
    let mut rng = SimpleRng::new(seed);
    (0..n)
        .map(|_| {
            let (g, _) = box_muller(&mut rng);
            mean + std_dev * g
        })
        .collect()
}

/// Simple RNG for reproducible generation
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(0x9E3779B97F4A7C15),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64)
    }
}

/// Box-Muller transform for generating Gaussian-distributed values
fn box_muller(rng: &mut SimpleRng) -> (f64, f64) {
    let u1 = rng.next_f64().max(1e-10); // Avoid log(0)
    let u2 = rng.next_f64();

    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;

    (r * theta.cos(), r * theta.sin())
}
