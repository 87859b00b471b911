use aasm_directory::{AffiliationIndex, build_working_group_byline, sort_by_family_name};
use aasm_domain::people::{Person, WorkingGroup};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn committee(size: usize) -> Vec<Person> {
    (0..size)
        .map(|i| Person::new(format!("Member{i} Family{}", (i * 7919) % size), format!("Institute {i}")))
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_family_name");

    for size in [16usize, 256, 4096] {
        let people = committee(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &people, |b, p| {
            b.iter(|| sort_by_family_name(black_box(p)));
        });
    }

    group.finish();
}

fn bench_bylines(c: &mut Criterion) {
    let people = committee(256);
    let index = AffiliationIndex::new(&people);
    let group = WorkingGroup::new([people[3].name.clone(), people[200].name.clone()], "Topic");

    c.bench_function("byline_indexed", |b| {
        b.iter(|| build_working_group_byline(black_box(&group), &index));
    });
    c.bench_function("byline_substring", |b| {
        b.iter(|| build_working_group_byline(black_box(&group), people.as_slice()));
    });
}

criterion_group!(benches, bench_sort, bench_bylines);
criterion_main!(benches);
