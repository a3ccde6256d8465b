use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use setcalc::{Session, SessionOptions, SetOp, SmallSet, parse_command};
use std::{collections::BTreeSet, hint::black_box};

fn bench_member_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("member_operations");

    group.bench_function("insert", |b| {
        let mut set = SmallSet::new();
        let mut i = 0u8;
        b.iter(|| {
            set.insert(black_box(i % 128));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("contains", |b| {
        let set: SmallSet = (0..128).step_by(3).collect();
        let mut i = 0u8;
        b.iter(|| {
            black_box(set.contains(i % 128));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for step in &[1usize, 2, 8, 32] {
        let set: SmallSet = (0..128).step_by(*step).collect();

        group.bench_with_input(BenchmarkId::new("forward", step), &set, |b, set| {
            b.iter(|| {
                for n in set {
                    black_box(n);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("display", step), &set, |b, set| {
            b.iter(|| black_box(set.to_string()));
        });
    }

    group.finish();
}

fn bench_binary_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_operations");

    let a: SmallSet = (0..128).step_by(2).collect();
    let b: SmallSet = (0..128).step_by(3).collect();

    for op in SetOp::ALL {
        group.bench_with_input(BenchmarkId::new("apply", op), &op, |bench, op| {
            bench.iter(|| black_box(op.apply(&a, &b)));
        });
    }

    // Ordered std set for reference
    let a_tree: BTreeSet<u8> = a.iter().collect();
    let b_tree: BTreeSet<u8> = b.iter().collect();
    group.bench_function("btreeset_union", |bench| {
        bench.iter(|| black_box(a_tree.union(&b_tree).count()));
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_command");

    let lines = [
        ("print", "print_set SETA".to_string()),
        ("binary", "symdiff_set SETA, SETB, SETC".to_string()),
        ("error", "read_set SETA 1, 2, -1".to_string()),
        ("read_full", {
            let mut line = String::from("read_set SETA");
            for n in 0..128 {
                line.push_str(&format!(", {n}"));
            }
            line.push_str(", -1");
            line
        }),
    ];

    for (name, line) in &lines {
        group.bench_with_input(BenchmarkId::from_parameter(name), line, |b, line| {
            b.iter(|| black_box(parse_command(line)));
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let script = "read_set SETA, 1, 2, 3, 64, 127, -1\n\
                  read_set SETB, 3, 4, 64, -1\n\
                  union_set SETA, SETB, SETC\n\
                  intersect_set SETA, SETB, SETD\n\
                  sub_set SETA, SETB, SETE\n\
                  symdiff_set SETA, SETB, SETF\n\
                  print_set SETF\n\
                  stop\n";
    let options = SessionOptions {
        prompt: false,
        echo: false,
    };

    c.bench_function("session_script", |b| {
        b.iter(|| {
            let mut session = Session::with_options(script.as_bytes(), Vec::new(), options);
            session.run().unwrap();
            black_box(session.into_output());
        });
    });
}

criterion_group!(
    benches,
    bench_member_operations,
    bench_iteration,
    bench_binary_operations,
    bench_parse,
    bench_session,
);

criterion_main!(benches);
