use crate::{TourRing, ring::distance};

#[derive(Debug, Default, PartialEq)]
pub struct TourMetrics {
    pub n: usize,
    pub total: f64,
    pub longest: f64,
    pub average: f64,
}

impl TourMetrics {
    pub fn from_ring(ring: &TourRing) -> Self {
        let n = ring.len();

        if n < 2 {
            log::info!("metrics: n < 2 so there's nothing to report");
            return Self {
                n,
                ..Self::default()
            };
        }

        let distances: Vec<f64> = ring.edges().map(|(a, b)| distance(&a, &b)).collect();
        let total: f64 = distances.iter().sum();
        let average = total / (n as f64);
        let longest = distances.iter().copied().fold(0.0_f64, f64::max);

        log::info!("metrics: n={n} total={total:.3} longest={longest:.3} avg={average:.3}");

        Self {
            n,
            total,
            longest,
            average,
        }
    }
}
