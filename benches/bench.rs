#[macro_use]
extern crate criterion;

use criterion::{Criterion, Throughput};
use morph::converter::ConverterBuilder;
use morph::schema::{Field, Kind, Schema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
struct User {
    id: i64,
    login: String,
}

impl Schema for User {
    fn fields() -> Vec<Field> {
        vec![
            Field::required("id", Kind::Int),
            Field::required("login", Kind::Str),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct Mirror {
    id: i64,
    login: String,
}

impl Schema for Mirror {
    fn fields() -> Vec<Field> {
        vec![
            Field::required("id", Kind::Int),
            Field::required("login", Kind::Str),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct Printed {
    id: String,
    login: String,
}

impl Schema for Printed {
    fn fields() -> Vec<Field> {
        vec![
            Field::required("id", Kind::Str),
            Field::required("login", Kind::Str),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct Plan {
    plan: String,
}

impl Schema for Plan {
    fn fields() -> Vec<Field> {
        vec![Field::required("plan", Kind::Str)]
    }
}

#[derive(Debug, Serialize)]
struct Wide {
    top1: i64,
    top2: i64,
    top3: i64,
    top4: i64,
    top5: i64,
    top6: i64,
    top7: i64,
    top8: i64,
    top9: i64,
    top10: i64,
}

impl Schema for Wide {
    fn fields() -> Vec<Field> {
        vec![
            Field::required("top1", Kind::Int),
            Field::required("top2", Kind::Int),
            Field::required("top3", Kind::Int),
            Field::required("top4", Kind::Int),
            Field::required("top5", Kind::Int),
            Field::required("top6", Kind::Int),
            Field::required("top7", Kind::Int),
            Field::required("top8", Kind::Int),
            Field::required("top9", Kind::Int),
            Field::required("top10", Kind::Int),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct WideMirror {
    top1: i64,
    top2: i64,
    top3: i64,
    top4: i64,
    top5: i64,
    top6: i64,
    top7: i64,
    top8: i64,
    top9: i64,
    top10: i64,
}

impl Schema for WideMirror {
    fn fields() -> Vec<Field> {
        Wide::fields()
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let user = User {
        id: 7,
        login: String::from("deankarn"),
    };

    let converter = ConverterBuilder::<User, Mirror>::new().build().unwrap();
    let mut group = c.benchmark_group("direct");
    group.throughput(Throughput::Elements(2));
    group.bench_function("2_direct", |b| b.iter(|| converter.convert(&user)));
    group.finish();

    let converter = ConverterBuilder::<User, Printed>::new().build().unwrap();
    let mut group = c.benchmark_group("coercing");
    group.throughput(Throughput::Elements(2));
    group.bench_function("2_coercing", |b| b.iter(|| converter.convert(&user)));
    group.finish();

    let converter = ConverterBuilder::<User, Plan>::new()
        .add_compute("plan", |origin: &User| Ok(Value::from(origin.login.clone())))
        .build()
        .unwrap();
    let mut group = c.benchmark_group("computed");
    group.throughput(Throughput::Elements(1));
    group.bench_function("1_computed", |b| b.iter(|| converter.convert(&user)));
    group.finish();

    let wide = Wide {
        top1: 1,
        top2: 2,
        top3: 3,
        top4: 4,
        top5: 5,
        top6: 6,
        top7: 7,
        top8: 8,
        top9: 9,
        top10: 10,
    };
    let converter = ConverterBuilder::<Wide, WideMirror>::new().build().unwrap();
    let mut group = c.benchmark_group("direct_wide");
    group.throughput(Throughput::Elements(10));
    group.bench_function("10_direct", |b| b.iter(|| converter.convert(&wide)));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
