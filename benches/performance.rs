use criterion::{black_box, criterion_group, criterion_main, Criterion};
use selfdeps::core::{DependencyGraphExtractor, FileSystemLocator};

fn benchmark_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("class_extraction");

    let bench_dir = std::env::temp_dir().join("selfdeps_bench");
    std::fs::create_dir_all(&bench_dir).unwrap();

    // a chain of public outputs, each leaning on a private helper
    let mut code = String::from("class Pipeline:\n    def base(self):\n        return 1\n\n");
    for i in 0..50 {
        let prev = if i == 0 {
            "base".to_string()
        } else {
            format!("step_{}", i - 1)
        };
        code.push_str(&format!(
            "    def step_{i}(self):\n        return self._lift_{i}() + self.{prev}\n\n"
        ));
        code.push_str(&format!(
            "    def _lift_{i}(self):\n        return self.base\n\n"
        ));
    }
    std::fs::write(bench_dir.join("pipeline.py"), &code).unwrap();

    // noise files the locator has to walk past
    for i in 0..20 {
        std::fs::write(
            bench_dir.join(format!("noise_{i}.py")),
            "class Unrelated:\n    pass\n",
        )
        .unwrap();
    }

    group.bench_function("fifty_method_chain", |b| {
        b.iter(|| {
            let extractor =
                DependencyGraphExtractor::new(FileSystemLocator::new(black_box(&bench_dir)));
            let graph = extractor.extract(black_box("Pipeline")).unwrap();
            black_box(graph)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_extraction);
criterion_main!(benches);
