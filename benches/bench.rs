// Criterion benchmarks for Scran It

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use scran_it::core::{Matcher, chain::resolve, distance::haversine_distance};
use scran_it::models::{ChainBrand, Coordinate, PriceTier, Venue};

const CUISINES: [(&str, &[&str]); 5] = [
    ("Mexican", &["mexican", "tacos", "burritos"]),
    ("Italian", &["italian", "pasta", "pizza"]),
    ("Japanese", &["japanese", "sushi", "ramen"]),
    ("Thai", &["thai", "curry", "pad thai"]),
    ("American", &["american", "burgers", "salads"]),
];

fn create_venue(id: usize, lat: f64, lng: f64) -> Venue {
    let (cuisine, types) = CUISINES[id % CUISINES.len()];
    Venue {
        id: id as u64,
        name: format!("Venue {}", id),
        cuisine: cuisine.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        lat,
        lng,
        price: PriceTier::Mid,
        address: format!("{} Main St", id),
        photo: None,
    }
}

fn create_catalog(count: usize) -> Vec<Venue> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.001) % 0.5;
            let lng_offset = (i as f64 * 0.0007) % 0.5;
            create_venue(i, 30.0985 + lat_offset, -97.8964 + lng_offset)
        })
        .collect()
}

fn create_chains() -> Vec<ChainBrand> {
    (0..200)
        .map(|i| ChainBrand {
            name: format!("Chain Brand {}", i),
            cuisine: "Fast Food".to_string(),
            types: vec!["fast food".to_string(), "burger".to_string()],
        })
        .chain(std::iter::once(ChainBrand {
            name: "Taco Bell".to_string(),
            cuisine: "Mexican".to_string(),
            types: vec!["tacos".to_string(), "fast food".to_string()],
        }))
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(30.2672),
                black_box(-97.7431),
                black_box(30.28),
                black_box(-97.75),
            )
        });
    });
}

fn bench_chain_resolution(c: &mut Criterion) {
    let chains = create_chains();

    c.bench_function("chain_resolve_last_brand", |b| {
        b.iter(|| resolve(black_box(&chains), black_box("taco bell")));
    });
}

fn bench_search(c: &mut Criterion) {
    let matcher = Matcher::default();
    let chains = create_chains();
    let reference = Coordinate::new(30.2672, -97.7431);

    let mut group = c.benchmark_group("search");

    for venue_count in [100, 1000, 5000].iter() {
        let catalog = create_catalog(*venue_count);

        group.bench_with_input(
            BenchmarkId::new("text_query", venue_count),
            venue_count,
            |b, _| {
                b.iter(|| matcher.search(black_box("sushi"), reference, black_box(&catalog), &chains));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("chain_query", venue_count),
            venue_count,
            |b, _| {
                b.iter(|| matcher.search(black_box("taco bell"), reference, black_box(&catalog), &chains));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearby", venue_count),
            venue_count,
            |b, _| {
                b.iter(|| matcher.nearby(reference, black_box(&catalog), Some(5.0), Some(20)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_chain_resolution,
    bench_search
);

criterion_main!(benches);
