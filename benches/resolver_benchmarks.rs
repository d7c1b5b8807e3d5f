//! Performance benchmarks for type interning and intrinsic resolution.
//!
//! The suite measures:
//! - Interning: hash-consing hits and misses on composite types
//! - Catalog: building the WGSL builtin table
//! - Resolution: successful lookups across builtins, operators and
//!   constructors, and the failure path that renders a diagnostic
//!
//! ## Profiling with Puffin
//!
//! Run with the `profile-with-puffin` feature to collect per-scope timings:
//!
//! ```bash
//! cargo bench --features profile-with-puffin -- --profile-time 5
//! ```

#![allow(clippy::collapsible_if)]

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shader_sema::{
    BinaryOp, Catalog, EvaluationStage, IntrinsicTable, Span, TextureDimension, TypeHandle,
    TypeUniverse,
};
use std::hint::black_box;

#[cfg(feature = "profile-with-puffin")]
use std::collections::HashMap;

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

/// Call at the end of each benchmark iteration to flush profiling data.
#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

#[cfg(feature = "profile-with-puffin")]
fn collect_scopes_recursive(
    stream: &puffin::Stream,
    scope: &puffin::Scope,
    scope_collection: &puffin::ScopeCollection,
    scope_timings: &mut HashMap<String, i64>,
) {
    use puffin::Reader;

    if let Some(details) = scope_collection.fetch_by_id(&scope.id) {
        let name = details.name().to_string();
        *scope_timings.entry(name).or_insert(0) += scope.record.duration_ns;
    }

    if scope.child_begin_position < scope.child_end_position {
        if let Ok(reader) = Reader::with_offset(stream, scope.child_begin_position) {
            if let Ok(children) = reader.read_top_scopes() {
                for child in children {
                    collect_scopes_recursive(stream, &child, scope_collection, scope_timings);
                }
            }
        }
    }
}

/// Print the average time per frame of every recorded scope.
#[cfg(feature = "profile-with-puffin")]
fn print_profiling_stats() {
    use puffin::Reader;

    let Some(frame_view) = FRAME_VIEW.get() else {
        println!("Profiler not initialized");
        return;
    };

    let view = frame_view.lock();
    let scope_collection = view.scope_collection();

    let mut scope_timings: HashMap<String, i64> = HashMap::new();
    let mut frame_count = 0i64;

    for frame in view.recent_frames() {
        frame_count += 1;
        let Ok(unpacked) = frame.unpacked() else {
            continue;
        };
        for (_thread_info, stream_info) in unpacked.thread_streams.iter() {
            let reader = Reader::from_start(&stream_info.stream);
            if let Ok(scopes) = reader.read_top_scopes() {
                for scope in scopes {
                    collect_scopes_recursive(
                        &stream_info.stream,
                        &scope,
                        scope_collection,
                        &mut scope_timings,
                    );
                }
            }
        }
    }

    println!("\n=== Resolver Profile ({} frames) ===", frame_count);
    if scope_timings.is_empty() {
        println!("  No scopes recorded. Build with the `profiling` feature.");
    } else {
        let mut entries: Vec<_> = scope_timings.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        for (name, ns) in entries {
            let avg_ns = if frame_count > 0 {
                *ns / frame_count
            } else {
                *ns
            };
            println!(
                "  {:40} {:>10.2?} avg",
                name,
                std::time::Duration::from_nanos(avg_ns as u64)
            );
        }
    }
    println!("=====================================\n");
}

#[cfg(not(feature = "profile-with-puffin"))]
fn print_profiling_stats() {}

fn interning_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("interner");

    group.bench_function("vector_hit", |b| {
        let mut types = TypeUniverse::new();
        types.vector(TypeHandle::F32, 4);
        b.iter(|| black_box(types.vector(black_box(TypeHandle::F32), 4)));
    });

    group.throughput(Throughput::Elements(3 * 3 * 4));
    group.bench_function("fresh_universe_all_matrices", |b| {
        b.iter(|| {
            let mut types = TypeUniverse::new();
            for element in [TypeHandle::F32, TypeHandle::F16, TypeHandle::ABSTRACT_FLOAT] {
                for columns in 2..=4 {
                    for rows in 2..=4 {
                        black_box(types.matrix(element, columns, rows));
                    }
                }
            }
            black_box(types.len())
        });
    });

    group.finish();
}

fn catalog_benchmarks(c: &mut Criterion) {
    c.bench_function("catalog/build_wgsl", |b| {
        b.iter(|| black_box(Catalog::wgsl().unwrap().overload_count()));
    });
}

fn resolution_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let catalog = Catalog::wgsl().unwrap();
    let mut group = c.benchmark_group("resolver");

    group.bench_function("builtin/clamp_abstract", |b| {
        let mut types = TypeUniverse::new();
        let mut table = IntrinsicTable::new(&catalog);
        let args = [TypeHandle::ABSTRACT_FLOAT; 3];
        b.iter(|| {
            let result = table
                .builtin(
                    &mut types,
                    "clamp",
                    black_box(&args[..]),
                    EvaluationStage::Runtime,
                    Span::UNKNOWN,
                )
                .unwrap();
            end_profiling_frame();
            black_box(result.return_type)
        });
    });

    group.bench_function("builtin/texture_load", |b| {
        let mut types = TypeUniverse::new();
        let mut table = IntrinsicTable::new(&catalog);
        let texture = types.sampled_texture(TextureDimension::D2, TypeHandle::F32);
        let coords = types.vector(TypeHandle::I32, 2);
        let args = [texture, coords, TypeHandle::I32];
        b.iter(|| {
            let result = table
                .builtin(
                    &mut types,
                    "textureLoad",
                    black_box(&args[..]),
                    EvaluationStage::Runtime,
                    Span::UNKNOWN,
                )
                .unwrap();
            end_profiling_frame();
            black_box(result.signature)
        });
    });

    group.bench_function("operator/mat_times_vec", |b| {
        let mut types = TypeUniverse::new();
        let mut table = IntrinsicTable::new(&catalog);
        let m = types.matrix(TypeHandle::F32, 4, 4);
        let v = types.vector(TypeHandle::F32, 4);
        b.iter(|| {
            let result = table
                .binary(
                    &mut types,
                    BinaryOp::Multiply,
                    m,
                    v,
                    EvaluationStage::Runtime,
                    Span::UNKNOWN,
                )
                .unwrap();
            end_profiling_frame();
            black_box(result.return_type)
        });
    });

    group.bench_function("constructor/vec4_components", |b| {
        let mut types = TypeUniverse::new();
        let mut table = IntrinsicTable::new(&catalog);
        let args = [TypeHandle::ABSTRACT_INT; 4];
        b.iter(|| {
            let result = table
                .construct(
                    &mut types,
                    "vec4",
                    None,
                    black_box(&args[..]),
                    EvaluationStage::Constant,
                    Span::UNKNOWN,
                )
                .unwrap();
            end_profiling_frame();
            black_box(result.return_type)
        });
    });

    group.bench_function("failure/operator_diagnostic", |b| {
        let mut types = TypeUniverse::new();
        let mut table = IntrinsicTable::new(&catalog);
        b.iter(|| {
            let err = table
                .binary(
                    &mut types,
                    BinaryOp::Multiply,
                    TypeHandle::F32,
                    TypeHandle::BOOL,
                    EvaluationStage::Runtime,
                    Span::UNKNOWN,
                )
                .unwrap_err();
            end_profiling_frame();
            black_box(err.to_string().len())
        });
    });

    group.finish();
    print_profiling_stats();
}

criterion_group!(
    benches,
    interning_benchmarks,
    catalog_benchmarks,
    resolution_benchmarks
);

criterion_main!(benches);
