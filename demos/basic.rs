//! Basic example demonstrating stepkmeans-rs usage
//!
//! Run with: RUST_LOG=debug cargo run --example basic

use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use stepkmeans_rs::{Algorithm, KMeansConfig, PointSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== stepkmeans-rs example ===\n");

    // 3 clusters in 2D for easy visualization
    let n_samples = 300;
    let n_features = 2;
    let n_clusters = 3;

    println!("Generating {} samples with {} features...", n_samples, n_features);

    let centers: [[f64; 2]; 3] = [[-5.0, -5.0], [0.0, 5.0], [5.0, -5.0]];
    let mut data = PointSet::new(n_features)?;

    for i in 0..n_samples {
        let center = centers[i % n_clusters];
        let noise = Array2::random((1, n_features), Uniform::new(-1.0f64, 1.0));
        data.append(&[center[0] + noise[[0, 0]], center[1] + noise[[0, 1]]])?;
    }

    println!("True cluster centers:");
    for (i, center) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, center[0], center[1]);
    }
    println!();

    let config = KMeansConfig::new(n_clusters)
        .with_max_steps(100)
        .with_seed(42);

    println!("Running k-means with k={}, one step at a time...\n", n_clusters);

    let mut algorithm = Algorithm::from_config(&data, &config)?;
    for step in 1..=config.max_steps {
        let converged = algorithm.step();
        println!("Step {}:", step);
        for (i, cluster) in algorithm.clusters().iter().enumerate() {
            let centroid = cluster.centroid();
            println!(
                "  Cluster {}: centroid ({:.4}, {:.4}), {} members, radius {:.3}",
                i,
                centroid[0],
                centroid[1],
                cluster.member_indices().len(),
                cluster.radius()
            );
        }
        if converged {
            println!("\nConverged after {} steps", step);
            break;
        }
    }
    println!();

    // Show first few assignments
    let labels = algorithm.labels().ok_or("No partition has been computed")?;
    println!("First 10 sample assignments:");
    for i in 0..10 {
        let point = data.get(i)?;
        println!(
            "  Sample {} at ({:.2}, {:.2}) -> Cluster {}",
            i, point[0], point[1], labels[i]
        );
    }

    println!("\n=== Done! ===");
    Ok(())
}
