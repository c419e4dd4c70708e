use hll_estimator::{Estimator, EstimatorConfig, HashFunction, WyHash128};

fn main() {
    let records: Vec<String> = (0..100_000).map(|i| format!("item_{}", i % 25_000)).collect();

    let estimator = Estimator::new(12).unwrap();
    println!("murmur3 estimate = {:.1}", estimator.estimate(&records).unwrap());

    let config = EstimatorConfig::new(14).with_hasher(HashFunction::WyHash128(WyHash128));
    let estimator = Estimator::from_config(&config).unwrap();
    let result = estimator.estimate_detailed(&records).unwrap();
    println!(
        "wyhash128 estimate = {:.1} (raw = {:.1}, correction = {:?}, expected error = {:.4})",
        result.value,
        result.raw,
        result.correction,
        config.standard_error().unwrap()
    );
}
