//! Build script for the storefront crate.
//!
//! Derives a content hash for the stylesheet so templates can link it
//! under a name that changes whenever the content does.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    hash_css();
}

/// Hash `static/css/main.css` and copy it into `static/css/derived/`
/// with the short hash embedded in the filename.
///
/// The hash is exported as the `CSS_HASH` compile-time env var, which
/// the `css_hash` template filter reads.
fn hash_css() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    // The stylesheet may be absent on a fresh checkout; build with an
    // empty hash rather than failing.
    let Ok(content) = fs::read(&css_path) else {
        println!("cargo:warning=could not read {}", css_path.display());
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let mut hash = format!("{:x}", Sha256::digest(&content));
    hash.truncate(8);
    println!("cargo:rustc-env=CSS_HASH={hash}");

    let derived_dir = Path::new(&manifest_dir).join("static/css/derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived CSS directory");
    fs::copy(&css_path, derived_dir.join(format!("main.{hash}.css")))
        .expect("Failed to copy CSS to derived directory");
}
