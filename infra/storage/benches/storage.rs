use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gshop_storage::{Compression, Storage};
use std::hint::black_box;
use tempfile::TempDir;

fn slot_payload(items: usize) -> Vec<u8> {
    let mut out = b"[".to_vec();
    for i in 0..items {
        if i > 0 {
            out.push(b',');
        }
        out.extend_from_slice(
            format!(
                r#"{{"id":{i},"game":"lol","rank":"Diamond IV","server":"VN","price":500000}}"#
            )
            .as_bytes(),
        );
    }
    out.push(b']');
    out
}

fn bench_slot_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_write");
    let rt = tokio::runtime::Runtime::new().unwrap();

    for compression in [Compression::None, Compression::Lz4] {
        let temp = TempDir::new().unwrap();
        let ns = rt.block_on(async {
            Storage::builder()
                .root(temp.path())
                .compression(compression)
                .connect()
                .await
                .unwrap()
                .namespace("gameshop")
                .unwrap()
        });
        let data = slot_payload(200);
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("accounts", format!("{compression:?}")),
            &data,
            |b, data| {
                b.to_async(&rt).iter(|| async {
                    ns.write("accounts.json", black_box(data)).await.unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_slot_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_read");
    let rt = tokio::runtime::Runtime::new().unwrap();

    for compression in [Compression::None, Compression::Lz4] {
        let temp = TempDir::new().unwrap();
        let ns = rt.block_on(async {
            let ns = Storage::builder()
                .root(temp.path())
                .compression(compression)
                .connect()
                .await
                .unwrap()
                .namespace("gameshop")
                .unwrap();
            ns.write("accounts.json", &slot_payload(200)).await.unwrap();
            ns
        });

        group.bench_function(BenchmarkId::new("accounts", format!("{compression:?}")), |b| {
            b.to_async(&rt).iter(|| async { black_box(ns.read("accounts.json").await.unwrap()) });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_slot_write, bench_slot_read);
criterion_main!(benches);
