/// Expose build metadata as environment variables at compile time.
///
/// `roster version` prints the target triple and cargo profile so bug
/// reports can say which binary produced a given demo run.
fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        std::env::var("TARGET").unwrap()
    );
    println!(
        "cargo:rustc-env=ROSTER_BUILD_PROFILE={}",
        std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string())
    );
}
