use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use stepkmeans_rs::{Algorithm, KMeans, KMeansConfig, PointSet};
use std::time::Duration;

fn random_set(n_samples: usize, n_features: usize) -> PointSet {
    PointSet::from_array(Array2::random((n_samples, n_features), Uniform::new(-1.0, 1.0))).unwrap()
}

fn benchmark_step_varying_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_samples");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_features = 16;
    let k = 10;
    let sample_sizes = [1_000, 5_000, 10_000];

    for n_samples in sample_sizes.iter() {
        group.throughput(Throughput::Elements(*n_samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            n_samples,
            |b, &n_samples| {
                let data = random_set(n_samples, n_features);
                let config = KMeansConfig::new(k).with_seed(42);
                let mut algorithm = Algorithm::from_config(&data, &config).unwrap();

                b.iter(|| black_box(algorithm.step()));
            },
        );
    }
    group.finish();
}

fn benchmark_step_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_clusters");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_samples = 5_000;
    let n_features = 16;
    let cluster_counts = [5, 20, 50];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let data = random_set(n_samples, n_features);
            let config = KMeansConfig::new(k).with_seed(42);
            let mut algorithm = Algorithm::from_config(&data, &config).unwrap();

            b.iter(|| black_box(algorithm.step()));
        });
    }
    group.finish();
}

fn benchmark_train_varying_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("train_dimensions");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_samples = 2_000;
    let k = 8;
    let dimensions = [2, 16, 64];

    for n_features in dimensions.iter() {
        group.throughput(Throughput::Elements(*n_features as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_features),
            n_features,
            |b, &n_features| {
                let data = random_set(n_samples, n_features);
                let config = KMeansConfig::new(k).with_seed(42).with_max_steps(5);

                b.iter(|| {
                    let mut kmeans = KMeans::with_config(config.clone());
                    kmeans.train(black_box(&data)).unwrap();
                    kmeans
                });
            },
        );
    }
    group.finish();
}

fn benchmark_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_predict");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_features = 16;
    let predict_sizes = [1_000, 5_000];

    let train_data = random_set(2_000, n_features);
    let mut kmeans = KMeans::with_config(KMeansConfig::new(10).with_seed(42));
    kmeans.train(&train_data).unwrap();

    for n_predict in predict_sizes.iter() {
        group.throughput(Throughput::Elements(*n_predict as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_predict),
            n_predict,
            |b, &n_predict| {
                let test_data = Array2::random((n_predict, n_features), Uniform::new(-1.0, 1.0));

                b.iter(|| kmeans.predict(black_box(&test_data.view())).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_step_varying_samples,
    benchmark_step_varying_clusters,
    benchmark_train_varying_dimensions,
    benchmark_predict,
);

criterion_main!(benches);
