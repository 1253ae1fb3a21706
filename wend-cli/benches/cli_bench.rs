use std::process::Command;

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

const CHUNK_PATTERN: &str = "{root}/data/{dataset}/chunk_{idx:04d}-of-{total:04d}.parquet";

fn wend() -> Command {
    let mut cmd = Command::cargo_bin("wend").expect("failed to locate wend binary");
    cmd.arg("--no-env");
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let output = wend().arg("--version").output().expect("failed to run wend");
            black_box(output);
        });
    });
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("cli_resolve");

    group.bench_function("bind_flags", |b| {
        b.iter(|| {
            let output = wend()
                .args(["resolve", CHUNK_PATTERN])
                .args(["--bind", "root=/mnt/storage", "--bind", "dataset=train"])
                .args(["--bind", "idx=7", "--bind", "total=100"])
                .output()
                .expect("failed to run wend resolve");
            black_box(output);
        });
    });

    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let bindings = temp_dir.path().join("bindings.yaml");
    std::fs::write(
        &bindings,
        "root: /mnt/storage\ndataset: train\nidx: 7\ntotal: 100\n",
    )
    .expect("failed to write bindings file");

    group.bench_function("bindings_file", |b| {
        b.iter(|| {
            let output = wend()
                .arg("--bindings")
                .arg(&bindings)
                .args(["resolve", CHUNK_PATTERN])
                .output()
                .expect("failed to run wend resolve");
            black_box(output);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cli_startup, bench_resolve);
criterion_main!(benches);
