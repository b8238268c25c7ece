//! Built-in sensor packages used by `tracker demo`.

use crate::dispatch::Package;

/// The three reference packages, in the order they are reported.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
