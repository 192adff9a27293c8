use std::fs;
use std::path::{Path, PathBuf};
use toml::Value;

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir).expect("read_dir");
    for entry in entries {
        let entry = entry.expect("dir entry");
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, files);
            continue;
        }
        if path.extension().and_then(|value| value.to_str()) == Some("rs") {
            files.push(path);
        }
    }
}

#[test]
fn ui_manifest_avoids_direct_transport_crates() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let manifest = fs::read_to_string(root.join("Cargo.toml")).expect("manifest text");
    let parsed: Value = manifest.parse().expect("parse Cargo.toml");

    // The shell reaches the network only through the SessionBackend seam;
    // the HTTP stack stays behind intervu-api.
    for forbidden in ["reqwest", "intervu-config"] {
        assert!(
            !manifest_declares_dependency(&parsed, forbidden),
            "intervu-ui must not directly depend on {forbidden}"
        );
    }
}

#[test]
fn screen_modules_are_declared() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let screens_mod = fs::read_to_string(root.join("src/screens/mod.rs")).expect("screens/mod.rs");

    for declaration in [
        "pub(crate) mod landing;",
        "pub(crate) mod setup;",
        "pub(crate) mod session;",
        "pub(crate) mod analyzing;",
        "pub(crate) mod summary;",
        "pub(crate) mod history;",
    ] {
        assert!(
            screens_mod.contains(declaration),
            "expected screen module declaration missing: {declaration}"
        );
    }
}

#[test]
fn ui_sources_have_no_include_macros() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    collect_rs_files(&root.join("src"), &mut files);

    for file in files {
        let text = fs::read_to_string(&file).expect("source text");
        assert!(
            !text.contains("include!("),
            "{} must not use include!-based flattening",
            file.display()
        );
    }
}

fn manifest_declares_dependency(manifest: &Value, forbidden: &str) -> bool {
    for table_name in ["dependencies", "dev-dependencies", "build-dependencies"] {
        let Some(table) = manifest.get(table_name).and_then(Value::as_table) else {
            continue;
        };
        for (name, spec) in table {
            if name == forbidden {
                return true;
            }
            if spec
                .as_table()
                .and_then(|inline| inline.get("package"))
                .and_then(Value::as_str)
                == Some(forbidden)
            {
                return true;
            }
        }
    }
    false
}
