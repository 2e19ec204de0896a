use criterion::{criterion_group, criterion_main, Criterion};
use placenames_core::model::{Attributes, Feature};
use placenames_core::search::{rank, SearchFilters, SearchScope, SortMode};
use placenames_core::DatasetStats;
use std::hint::black_box;

const SURNAMES: [&str; 8] = [
    "Cook", "Mawson", "Griffin", "Lyons", "Ainslie", "Bruce", "Florey", "Hughes",
];
const KINDS: [&str; 4] = ["Street", "Place", "Crescent", "Circuit"];

fn synthetic_dataset(n: usize) -> Vec<Feature> {
    (0..n)
        .map(|i| {
            let surname = SURNAMES[i % SURNAMES.len()];
            let kind = KINDS[i % KINDS.len()];
            Feature {
                attributes: Attributes {
                    object_id: i as i64,
                    name: Some(format!("{surname} {kind} {i}")),
                    category_name: Some(kind.to_string()),
                    division_code: Some(format!("D{}", i % 90)),
                    description: Some(format!(
                        "Feature name: {surname} {kind}\nCommemorated name: {surname}\nBiography: Person number {i}, remembered in the ACT."
                    )),
                    ..Attributes::default()
                },
                geometry: None,
            }
        })
        .collect()
}

fn bench_ranking(c: &mut Criterion) {
    let data = synthetic_dataset(4_000);
    let all = SearchFilters::default();
    let bio = SearchFilters::default().with_scope(SearchScope::Biography);

    c.bench_function("rank 4k / 'cook'", |b| {
        b.iter(|| rank(black_box(&data), black_box("cook"), &all, SortMode::Relevance).len())
    });
    c.bench_function("rank 4k / empty query", |b| {
        b.iter(|| rank(black_box(&data), black_box(""), &all, SortMode::Relevance).len())
    });
    c.bench_function("rank 4k / biography scope", |b| {
        b.iter(|| rank(black_box(&data), black_box("remembered"), &bio, SortMode::Name).len())
    });
    c.bench_function("stats 4k", |b| {
        b.iter(|| DatasetStats::from_features(black_box(&data)).total_features)
    });
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
