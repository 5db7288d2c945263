use std::env;
use std::fs;
use std::path::Path;

/// 接続先はビルド時に埋め込む（.env から読み込み、既存の環境変数を優先）
const KEYS: [&str; 2] = ["CATALOG_API_BASE_URL", "CATALOG_API_PATH"];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if KEYS.contains(&key) && env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=.env がありません。CATALOG_API_BASE_URL と CATALOG_API_PATH を環境変数で指定してください");
    }

    for key in KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
