#![no_main]

use hll_estimator::Estimator;
use libfuzzer_sys::fuzz_target;
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let prefix_length = (wyhash(data, 0) % 16) as u32 + 1;
    let estimator = Estimator::new(prefix_length).unwrap();

    let records: Vec<&[u8]> = data.chunks(4).collect();
    let estimate = estimator.estimate(&records).unwrap();
    assert!(estimate.is_finite());
    assert!(estimate > 0.0);

    // repeating records never changes the estimate
    let repeated = records.iter().chain(records.iter());
    assert_eq!(estimator.estimate(repeated).unwrap(), estimate);
});
