// Bakes RELEASES_* settings from .env into the binary, the browser has no environment.
fn main() {
    println!("cargo:rerun-if-changed=.env");

    if let Ok(vars) = dotenvy::dotenv_iter() {
        for (key, value) in vars.flatten() {
            if key.starts_with("RELEASES_") {
                println!("cargo:rustc-env={key}={value}");
            }
        }
    }
}
