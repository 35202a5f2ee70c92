use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").unwrap();
    let _profile = env::var("PROFILE").unwrap();

    let target_dir = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();

    // Copy config.toml next to the binary
    fs::copy("config.toml", target_dir.join("config.toml")).unwrap();

    // The bundle path in config.toml resolves relative to the executable,
    // so the mesh bundle rides along too
    let models_dir = target_dir.join("models");
    fs::create_dir_all(&models_dir).unwrap();
    fs::copy("models/potatoes.json", models_dir.join("potatoes.json")).unwrap();
}
