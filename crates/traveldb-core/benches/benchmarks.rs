use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use traveldb_core::prelude::*;

fn synthetic_db(countries: usize, cities_per_country: usize) -> DefaultTravelDb {
    let place = |name: String| Place::<DefaultBackend> {
        description: format!("A destination near {name} with beaches and temples"),
        image_url: format!("images/{name}.jpg"),
        name,
    };

    TravelDb {
        beaches: (0..50).map(|i| place(format!("Beach {i}"))).collect(),
        temples: (0..50).map(|i| place(format!("Temple {i}"))).collect(),
        countries: (0..countries)
            .map(|c| Country {
                name: format!("Country {c}"),
                cities: (0..cities_per_country)
                    .map(|i| place(format!("City {c}-{i}")))
                    .collect(),
            })
            .collect(),
    }
}

fn bench_search(c: &mut Criterion) {
    let db = synthetic_db(100, 20);

    c.bench_function("recommend_category", |b| {
        b.iter(|| black_box(db.recommend(black_box("countries")).len()))
    });

    c.bench_function("recommend_free_text", |b| {
        b.iter(|| black_box(db.recommend(black_box("city 42")).len()))
    });

    c.bench_function("find_by_substring_miss", |b| {
        b.iter(|| black_box(db.find_by_substring(black_box("atlantis")).len()))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
