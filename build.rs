// Build script embedding the SDK version as OMVIAN_SDK_VERSION.
// Release pipelines may stamp the patch number through OMVIAN_PATCH_VERSION.

use std::env;

fn main() {
    let pkg_version = env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION not set");

    let (major_minor, patch) = match pkg_version.rsplit_once('.') {
        Some((head, tail)) if head.contains('.') && !head.ends_with('.') => (head, tail),
        _ => panic!("Cargo.toml version must be major.minor.patch, got: {}", pkg_version),
    };

    let sdk_version = match env::var("OMVIAN_PATCH_VERSION") {
        Ok(stamped) if !stamped.is_empty() => format!("{}.{}", major_minor, stamped),
        _ => format!("{}.{}", major_minor, patch),
    };

    println!("cargo:rustc-env=OMVIAN_SDK_VERSION={}", sdk_version);
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=OMVIAN_PATCH_VERSION");
}
