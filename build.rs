// Forwards the Opinet credential into the compile environment so the crate can
// pick it up with `option_env!("API_KEY")`. The process environment wins over
// a `.env` file next to Cargo.toml. The value itself is never printed.
const API_KEY_VAR: &str = "API_KEY";

fn main() {
    println!("cargo:rerun-if-env-changed={}", API_KEY_VAR);
    println!("cargo:rerun-if-changed=.env");

    if std::env::var(API_KEY_VAR).is_ok() {
        // Already visible to rustc through the inherited environment.
        return;
    }

    let Ok(iter) = dotenvy::from_filename_iter(".env") else {
        return;
    };

    for item in iter.flatten() {
        let (key, value) = item;
        if key == API_KEY_VAR && !value.trim().is_empty() {
            println!("cargo:rustc-env={}={}", API_KEY_VAR, value.trim());
            return;
        }
    }
}
