// Criterion benchmarks for Breed Finder

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use breed_finder::core::{admits, extract, Ranker};
use breed_finder::models::{BreedRecord, Measurement};

const TEMPERAMENTS: &[&str] = &[
    "Friendly, Alert",
    "Loyal, Protective, Calm",
    "Playful, Curious, Energetic",
    "Independent, Stubborn",
    "Gentle, Affectionate, Quiet",
];

fn create_breed(id: usize) -> BreedRecord {
    let min_weight = 5 + (id % 60) as u32;
    BreedRecord {
        id: Some(id as u32),
        name: format!("Breed {}", id),
        temperament: Some(TEMPERAMENTS[id % TEMPERAMENTS.len()].to_string()),
        weight: Some(Measurement::imperial(&format!("{} - {}", min_weight, min_weight + 15))),
        height: Some(Measurement::imperial(&format!("{} - {}", 8 + id % 20, 12 + id % 20))),
        life_span: Some(format!("{} - {} years", 9 + id % 5, 12 + id % 5)),
        breed_group: Some(if id % 7 == 0 { "Toy" } else { "Working" }.to_string()),
        ..Default::default()
    }
}

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_constraints", |b| {
        b.iter(|| {
            extract(black_box(
                "friendly small dogs under 40 lbs, at least 10 lbs, lifespan 10-12, height 10-20 inches, terrier",
            ))
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::default();
    let constraints = extract("friendly alert dogs at most 40 lbs lifespan 10-16");

    let mut group = c.benchmark_group("ranking");

    for breed_count in [10, 50, 100, 500, 1000].iter() {
        let breeds: Vec<BreedRecord> = (0..*breed_count).map(create_breed).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", breed_count),
            breed_count,
            |b, _| {
                b.iter(|| ranker.rank(black_box(&breeds), black_box(&constraints)));
            },
        );
    }

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let constraints = extract("small playful dogs at least 10 lbs at most 30 lbs");
    let breeds: Vec<BreedRecord> = (0..200).map(create_breed).collect();

    c.bench_function("strict_filter_200_breeds", |b| {
        b.iter(|| {
            let admitted = breeds
                .iter()
                .filter(|breed| admits(breed, &constraints))
                .count();

            black_box(admitted)
        });
    });
}

criterion_group!(
    benches,
    bench_extract,
    bench_ranking,
    bench_filtering
);

criterion_main!(benches);
