/// MNIST comparison of the three local learning rules.
///
/// Trains one single-layer classifier per rule (Hebbian, Hebbian-decay,
/// Oja) under identical conditions for several independent runs, then
/// reports test accuracy averaged over runs, per-digit accuracy, and the
/// validation-accuracy history per epoch.
///
/// Run with:
///   cargo run --example mnist --release
///
/// Data files must be present at demos/mnist_data/ (raw IDX binary format,
/// not gzipped).

use hebb_nn::data::idx::{load_idx_pair, split_train_val};
use hebb_nn::eval::run_test::{accuracy_per_label, as_digits};
use hebb_nn::experiment::driver::{run_experiment, ExperimentConfig};

fn main() {
    let train_images_path = "demos/mnist_data/train-images-idx3-ubyte";
    let train_labels_path = "demos/mnist_data/train-labels-idx1-ubyte";
    let test_images_path = "demos/mnist_data/t10k-images-idx3-ubyte";
    let test_labels_path = "demos/mnist_data/t10k-labels-idx1-ubyte";

    println!("Loading MNIST data...");
    let (data, labels) = load_idx_pair(train_images_path, train_labels_path, 10)
        .unwrap_or_else(|e| panic!("loading training data: {}", e));
    let (test_x, test_y) = load_idx_pair(test_images_path, test_labels_path, 10)
        .unwrap_or_else(|e| panic!("loading test data: {}", e));

    // Last 8% of the training file becomes the validation set.
    let (train_x, train_y, val_x, val_y) =
        split_train_val(data, labels, 0.92).expect("splitting train/validation");

    println!("  Training set:   {} images", train_x.len());
    println!("  Validation set: {} images", val_x.len());
    println!("  Test set:       {} images", test_x.len());

    let mut config = ExperimentConfig::new(2, 5);
    config.eta = 0.1;
    config.decay = 0.4;

    println!(
        "\nTraining {} runs x {} epochs per rule (eta = {}, decay = {})...\n",
        config.runs, config.epochs, config.eta, config.decay
    );

    let results = run_experiment(
        (&train_x, &train_y),
        (&val_x, &val_y),
        (&test_x, &test_y),
        &config,
    )
    .unwrap_or_else(|e| panic!("experiment failed: {}", e));

    // ── Test accuracy, averaged over runs ───────────────────────────────────
    println!("\nTest accuracy, average of {} runs:", config.runs);
    for rule in &results.rules {
        println!("  {:<8} {:>6.2}%", rule.rule.to_string(), rule.mean_accuracy() * 100.0);
    }

    // ── Per-digit accuracy (first run) ──────────────────────────────────────
    let test_digits = as_digits(&test_y);
    println!("\nPer-digit accuracy (run 1):");
    print!("{:>8}", "digit");
    for d in 0..10 {
        print!("{:>7}", d);
    }
    println!();
    for rule in &results.rules {
        let per_label = accuracy_per_label(&test_digits, &rule.wrong_indices[0], 10);
        print!("{:>8}", rule.rule.to_string());
        for acc in per_label {
            print!("{:>6.1}%", acc * 100.0);
        }
        println!();
    }

    // ── Validation history, averaged over runs ──────────────────────────────
    println!("\nValidation accuracy by epoch, average of {} runs:", config.runs);
    print!("{:>8}", "epoch");
    for e in 1..=config.epochs {
        print!("{:>7}", e);
    }
    println!();
    for rule in &results.rules {
        print!("{:>8}", rule.rule.to_string());
        for acc in rule.mean_val_history() {
            print!("{:>6.1}%", acc * 100.0);
        }
        println!();
    }

    let out_path = "demos/mnist_results.json";
    results
        .save_json(out_path)
        .expect("Failed to save results");
    println!("\nResults saved to {}", out_path);
}
