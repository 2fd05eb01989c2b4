use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use warmpath_core::config::{InfluenceConfig, MultiplierWeights};
use warmpath_core::{Contact, Relationship};
use warmpath_graph::{
    broker_scores, build_graph, introduction_opportunities, network_multipliers, structural_holes,
    warm_intro_paths,
};

const SIZES: [usize; 3] = [100, 500, 2_000];
const CATEGORIES: [&str; 4] = ["VC", "LP", "Founder", "Operator"];

/// Random network with roughly `avg_degree` ties per contact.
fn synthetic_network(n: usize, avg_degree: usize, seed: u64) -> (Vec<Contact>, Vec<Relationship>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let contacts = (0..n)
        .map(|i| {
            let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            Contact::new(format!("c{i}"), format!("Contact {i}"), "", category, rng.gen_range(1..4))
        })
        .collect();

    let relationships = (0..n * avg_degree / 2)
        .filter_map(|_| {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            (a != b).then(|| Relationship::new(format!("c{a}"), format!("c{b}"), rng.gen_range(0.0..=1.0)))
        })
        .collect();

    (contacts, relationships)
}

fn bench_ego_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("ego_network");

    for n in SIZES {
        let (contacts, relationships) = synthetic_network(n, 8, 0x57A2_u64 + n as u64);
        let graph = build_graph(&relationships);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("build_graph", n), &relationships, |b, rels| {
            b.iter(|| black_box(build_graph(rels)));
        });

        group.bench_with_input(BenchmarkId::new("broker_scores", n), &contacts, |b, cs| {
            b.iter(|| black_box(broker_scores(cs, &graph)));
        });

        group.bench_with_input(BenchmarkId::new("structural_holes", n), &contacts, |b, cs| {
            b.iter(|| black_box(structural_holes(cs, &graph)));
        });

        group.bench_with_input(BenchmarkId::new("network_multipliers", n), &contacts, |b, cs| {
            b.iter(|| {
                black_box(network_multipliers(
                    cs,
                    &graph,
                    &MultiplierWeights::default(),
                    &InfluenceConfig::default(),
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("warm_intro_paths", n), &contacts, |b, cs| {
            b.iter(|| black_box(warm_intro_paths("c0", 2, &graph, cs)));
        });

        group.bench_with_input(BenchmarkId::new("introduction_opportunities", n), &contacts, |b, cs| {
            b.iter(|| black_box(introduction_opportunities(cs, &graph)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ego_metrics);
criterion_main!(benches);
