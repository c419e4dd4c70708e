#![no_main]

use hll_estimator::prefix::extract_prefix;
use hll_estimator::rank::count_zeros;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&p, digest)) = data.split_first() else {
        return;
    };
    let prefix_length = u32::from(p % 40);

    if let Ok(idx) = extract_prefix(digest, prefix_length) {
        assert!(u64::from(idx) < 1u64 << prefix_length);
    }

    let start = usize::from(p);
    if let Ok(zeros) = count_zeros(digest, start) {
        assert!(start + zeros as usize <= digest.len() * 8);
    }
});
