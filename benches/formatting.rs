use criterion::{Criterion, criterion_group, criterion_main};
use levlog::output::Record;
use levlog::{Header, Joined, Level, Logger};
use std::hint::black_box;
use std::io;
use std::panic::Location;

fn bench_record_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Record::render");
    let record = Record {
        level: Level::Info,
        message: "Application started successfully\n",
        location: Location::caller(),
        time: chrono::Local::now(),
    };

    for (name, header) in [
        ("none", Header::NONE),
        ("standard", Header::STANDARD),
        ("default", Header::default()),
        ("microseconds", Header::default().microseconds(true)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| record.render(black_box(&header), black_box("app ")));
        });
    }

    group.finish();
}

fn bench_joined(c: &mut Criterion) {
    c.bench_function("Joined::to_string", |b| {
        b.iter(|| Joined(&[&"retry", &3, &true, &black_box(2.5)]).to_string());
    });
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logger");

    let logger = Logger::builder().writer(io::sink()).build();
    group.bench_function("infof", |b| {
        b.iter(|| logger.infof(format_args!("request {} done", black_box(42))));
    });

    logger.set_level("error");
    group.bench_function("infof filtered", |b| {
        b.iter(|| logger.infof(format_args!("request {} done", black_box(42))));
    });

    group.finish();
}

criterion_group!(benches, bench_record_render, bench_joined, bench_emit);
criterion_main!(benches);
