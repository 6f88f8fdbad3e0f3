use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lww_dict::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn populated(first_timestamp: u64, keys: &[u32]) -> LWWDictionary<u32, u64, CounterClock> {
    let mut dict = LWWDictionary::new(CounterClock::starting_at(first_timestamp));
    for &key in keys {
        dict.put(key, u64::from(key) * 2);
    }
    dict
}

fn bench_put(c: &mut Criterion) {
    c.bench_function("LWWDictionary::put x1000", |b| {
        b.iter(|| {
            let mut dict = LWWDictionary::new(CounterClock::new());
            for key in 0..1000u32 {
                dict.put(key, key);
            }
            black_box(dict.len())
        })
    });
}

fn bench_put_remove_churn(c: &mut Criterion) {
    c.bench_function("LWWDictionary::put+remove x500", |b| {
        b.iter(|| {
            let mut dict = LWWDictionary::new(CounterClock::new());
            for key in 0..500u32 {
                dict.put(key, key);
                dict.remove(&key);
            }
            black_box(dict.len())
        })
    });
}

fn bench_merge(c: &mut Criterion) {
    // 10 replicas with randomly overlapping key sets
    let mut rng = StdRng::seed_from_u64(7);
    let mut all_keys: Vec<u32> = (0..1000).collect();

    let replicas: Vec<_> = (0..10)
        .map(|i| {
            all_keys.shuffle(&mut rng);
            populated(i * 100, &all_keys[..100])
        })
        .collect();

    c.bench_function("LWWDictionary::merge 10 replicas x100 keys", |b| {
        b.iter(|| {
            let mut out = replicas[0].clone();
            for other in &replicas[1..] {
                out.merge(other);
            }
            black_box(out.len())
        })
    });
}

fn bench_presence_scan(c: &mut Criterion) {
    let keys: Vec<u32> = (0..1000).collect();
    let mut dict = populated(0, &keys);
    for key in (0..1000u32).step_by(2) {
        dict.remove(&key);
    }

    c.bench_function("LWWDictionary::contains x1000 half removed", |b| {
        b.iter(|| {
            let mut present = 0usize;
            for key in 0..1000u32 {
                if dict.contains(&key) {
                    present += 1;
                }
            }
            black_box(present)
        })
    });
}

criterion_group!(
    benches,
    bench_put,
    bench_put_remove_churn,
    bench_merge,
    bench_presence_scan
);
criterion_main!(benches);
