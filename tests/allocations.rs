#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use hll_estimator::{Estimator, HashFunction, WyHash128};

#[test]
fn test_allocations() {
    let records: Vec<Vec<u8>> = (0..100_000)
        .map(|i| format!("item_{}", i).into_bytes())
        .collect();

    let _profiler = dhat::Profiler::builder().testing().build();

    // first estimation registers logging callsites
    Estimator::new(4).unwrap().estimate(&records[..1]).unwrap();

    for hasher in [HashFunction::default(), HashFunction::WyHash128(WyHash128)] {
        for prefix_length in [4, 10, 14] {
            let estimator = Estimator::with_hasher(prefix_length, hasher).unwrap();
            for n in [0, 1_000, 100_000] {
                let before = dhat::HeapStats::get();
                estimator.estimate(&records[..n]).unwrap();
                let after = dhat::HeapStats::get();

                // a single register array is allocated regardless of the input size ...
                assert_eq!(after.total_blocks - before.total_blocks, 1);
                assert_eq!(
                    after.total_bytes - before.total_bytes,
                    estimator.size_of() as u64
                );
                // ... and released before returning
                assert_eq!(after.curr_blocks, before.curr_blocks);
                assert_eq!(after.curr_bytes, before.curr_bytes);
            }
        }
    }
}
