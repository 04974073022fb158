//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so the stylesheet can be served with
//! a far-future cache header and still bust caches on every change.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Length of the hex fingerprint embedded in the file name.
const FINGERPRINT_LEN: usize = 8;

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"));
    fingerprint_stylesheet(&manifest_dir);
}

/// Write `static/css/derived/main.<hash>.css` and export `CSS_HASH`.
fn fingerprint_stylesheet(manifest_dir: &Path) {
    let source = manifest_dir.join("static/css/main.css");
    println!("cargo:rerun-if-changed={}", source.display());

    let Ok(bytes) = fs::read(&source) else {
        println!("cargo:warning=stylesheet missing at {}", source.display());
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let digest = format!("{:x}", Sha256::digest(&bytes));
    let fingerprint = digest.get(..FINGERPRINT_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={fingerprint}");

    let derived = manifest_dir.join("static/css/derived");
    fs::create_dir_all(&derived).expect("create static/css/derived");
    fs::copy(&source, derived.join(format!("main.{fingerprint}.css")))
        .expect("copy fingerprinted stylesheet");
}
