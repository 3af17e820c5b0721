// This binary crate is intentionally minimal.
// All learning-rule logic lives in the library (src/lib.rs and its modules).
// Run the rule comparison with:
//   cargo run --example mnist --release
fn main() {
    println!("hebb-nn: single-layer classifiers with local learning rules.");
    println!("Run `cargo run --example mnist --release` for the MNIST comparison.");
}
