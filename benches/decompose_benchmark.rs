//! Benchmarks for host decomposition and URL parsing.
//!
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tldurl::{decompose, parse, CacheConfig, CachedDecomposer, RuleSet};

/// Generate a suffix list with the given number of plain and wildcard rules.
fn generate_list(plain_count: usize, wildcard_count: usize) -> String {
    let mut list = String::from("// ===BEGIN ICANN DOMAINS===\ncom\nuk\nco.uk\njp\n");

    for i in 0..plain_count {
        list.push_str(&format!("tld{}\nco.tld{}\n", i, i));
    }

    for i in 0..wildcard_count {
        list.push_str(&format!("*.region{}.jp\n!city.region{}.jp\n", i, i));
    }

    list.push_str("// ===END ICANN DOMAINS===\n");
    list.push_str("// ===BEGIN PRIVATE DOMAINS===\n");
    for i in 0..plain_count / 10 {
        list.push_str(&format!("app{}.com\n", i));
    }
    list.push_str("// ===END PRIVATE DOMAINS===\n");
    list
}

fn generate_rules(plain_count: usize, wildcard_count: usize) -> RuleSet {
    RuleSet::parse(&generate_list(plain_count, wildcard_count)).unwrap()
}

/// Generate hosts - mix of listed suffixes and unlisted ones.
fn generate_hosts(count: usize, listed_ratio: f64) -> Vec<String> {
    let mut hosts = Vec::with_capacity(count);
    let listed = (count as f64 * listed_ratio) as usize;

    for i in 0..listed {
        match i % 4 {
            0 => hosts.push(format!("www.site{}.co.tld{}", i, i % 1000)),
            1 => hosts.push(format!("a.b.site{}.region{}.jp", i, i % 100)),
            2 => hosts.push(format!("www.city.region{}.jp", i % 100)),
            _ => hosts.push(format!("user{}.app{}.com", i, i % 100)),
        }
    }

    for i in listed..count {
        hosts.push(format!("host{}.unlisted{}", i, i));
    }

    hosts
}

/// Benchmark list loading.
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [1_000, 10_000].iter() {
        let list = generate_list(*size, size / 10);
        group.throughput(Throughput::Bytes(list.len() as u64));
        group.bench_with_input(BenchmarkId::new("rules", size), &list, |b, list| {
            b.iter(|| black_box(RuleSet::parse(list).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark decomposition throughput without cache.
fn bench_decompose_no_cache(c: &mut Criterion) {
    let rules = generate_rules(10_000, 1_000);
    let hosts = generate_hosts(1000, 0.8);

    let mut group = c.benchmark_group("decompose_no_cache");
    group.throughput(Throughput::Elements(hosts.len() as u64));

    group.bench_function("mixed_hosts", |b| {
        b.iter(|| {
            for host in &hosts {
                black_box(decompose(&rules, host));
            }
        })
    });

    group.finish();
}

/// Benchmark decomposition throughput with a warm cache.
fn bench_decompose_with_cache(c: &mut Criterion) {
    let rules = Arc::new(generate_rules(10_000, 1_000));
    let decomposer = CachedDecomposer::new(rules, CacheConfig::with_capacity(10_000));
    let hosts = generate_hosts(1000, 0.8);

    // Warm up cache
    for host in &hosts {
        let _ = decomposer.decompose(host);
    }

    let mut group = c.benchmark_group("decompose_with_cache");
    group.throughput(Throughput::Elements(hosts.len() as u64));

    group.bench_function("cache_hit", |b| {
        b.iter(|| {
            for host in &hosts {
                black_box(decomposer.decompose(host));
            }
        })
    });

    group.bench_function("single_host_miss", |b| {
        b.iter_batched(
            || {
                decomposer.clear_cache();
                "www.site1.co.tld1"
            },
            |host| black_box(decomposer.decompose(host)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark the individual matching paths.
fn bench_rule_kinds(c: &mut Criterion) {
    let rules = generate_rules(1_000, 100);

    let mut group = c.benchmark_group("rule_kinds");

    group.bench_function("plain", |b| {
        b.iter(|| black_box(decompose(&rules, "www.example.co.uk")))
    });

    group.bench_function("wildcard", |b| {
        b.iter(|| black_box(decompose(&rules, "www.example.region7.jp")))
    });

    group.bench_function("exception", |b| {
        b.iter(|| black_box(decompose(&rules, "www.city.region7.jp")))
    });

    group.bench_function("implicit", |b| {
        b.iter(|| black_box(decompose(&rules, "a.b.c.d.e.example.unlisted")))
    });

    group.bench_function("ip_literal", |b| {
        b.iter(|| black_box(decompose(&rules, "2001:db8::1")))
    });

    group.finish();
}

/// Benchmark full URL parsing.
fn bench_parse_url(c: &mut Criterion) {
    let rules = generate_rules(1_000, 100);

    let mut group = c.benchmark_group("parse_url");

    group.bench_function("with_port_and_query", |b| {
        b.iter(|| black_box(parse(&rules, "https://api.example.co.uk:8443/v1/items?page=2#top")))
    });

    group.finish();
}

/// Benchmark hot reload.
fn bench_hot_reload(c: &mut Criterion) {
    let rules = Arc::new(generate_rules(10_000, 1_000));
    let replacement = Arc::new(generate_rules(10_000, 1_000));
    let decomposer = CachedDecomposer::new(rules, CacheConfig::with_capacity(10_000));

    let mut group = c.benchmark_group("hot_reload");

    group.bench_function("reload_10k_rules", |b| {
        b.iter_batched(
            || Arc::clone(&replacement),
            |rules| decomposer.reload(rules),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_load,
    bench_decompose_no_cache,
    bench_decompose_with_cache,
    bench_rule_kinds,
    bench_parse_url,
    bench_hot_reload,
);

criterion_main!(benches);
