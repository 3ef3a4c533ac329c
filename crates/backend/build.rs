use std::env;
use std::fs;
use std::path::Path;

/// Sample data files shipped with the default file source
const DATA_FILES: [&str; 2] = ["rf_servidores.json", "rf_niveis.json"];

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    for file in DATA_FILES {
        println!("cargo:rerun-if-changed=../../data/{}", file);
    }

    // OUT_DIR is typically target/<profile>/build/payroll-backend-xxx/out
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    let out_path = Path::new(&out_dir);
    let target_dir = out_path
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        let dest_config = target_dir.join("config.toml");
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
        println!("cargo:warning=Copied config.toml to {:?}", dest_config);
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    // Data files land in target/<profile>/data so relative paths resolve next to the exe
    let dest_data = target_dir.join("data");
    for file in DATA_FILES {
        let source = workspace_root.join("data").join(file);
        if !source.exists() {
            continue;
        }
        fs::create_dir_all(&dest_data)
            .unwrap_or_else(|e| panic!("Failed to create {:?}: {}", dest_data, e));
        fs::copy(&source, dest_data.join(file))
            .unwrap_or_else(|e| panic!("Failed to copy {}: {}", file, e));
    }
}
