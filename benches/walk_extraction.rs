use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grafwalk::walkers::{AnonymousWalker, RandomWalker, Walker, WalkerConfig};
use grafwalk::KnowledgeGraph;

fn ring_graph(nodes: usize) -> KnowledgeGraph {
    let mut kg = KnowledgeGraph::new();
    // Ring of `nodes` entities with a chord every 7th node.
    for i in 0..nodes {
        let s = format!("node_{i}");
        let o = format!("node_{}", (i + 1) % nodes);
        kg.add_edge(s.as_str(), "connects_to", o.as_str());
        if i % 7 == 0 {
            let chord = format!("node_{}", (i + nodes / 2) % nodes);
            kg.add_edge(s.as_str(), "shortcut_to", chord.as_str());
        }
    }
    kg
}

fn bench_random_walks(c: &mut Criterion) {
    let kg = ring_graph(1000);
    let roots: Vec<String> = (0..100).map(|i| format!("node_{}", i * 10)).collect();
    let config = WalkerConfig::new(4).with_max_walks(10).with_random_state(42);

    c.bench_function("random_walks_1000_nodes", |b| {
        b.iter(|| {
            let mut walker = RandomWalker::new(config.clone()).unwrap();
            walker.extract(black_box(&kg), black_box(&roots)).unwrap()
        })
    });
}

fn bench_anonymous_walks(c: &mut Criterion) {
    let kg = ring_graph(1000);
    let roots: Vec<String> = (0..100).map(|i| format!("node_{}", i * 10)).collect();
    let config = WalkerConfig::new(4).with_max_walks(10).with_random_state(42);

    c.bench_function("anonymous_walks_1000_nodes", |b| {
        b.iter(|| {
            let mut walker = AnonymousWalker::new(config.clone()).unwrap();
            walker.extract(black_box(&kg), black_box(&roots)).unwrap()
        })
    });
}

criterion_group!(benches, bench_random_walks, bench_anonymous_walks);
criterion_main!(benches);
