use std::env;
use std::fs;
use std::path::Path;

// Ship config.toml next to the compiled binary so the exe-dir config
// lookup keeps working for packaged builds.
fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let config_path = Path::new("config.toml");
    let dest_path = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .unwrap()
        .join("config.toml");

    fs::copy(config_path, dest_path).unwrap();

    println!("cargo:rerun-if-changed=config.toml");
}
