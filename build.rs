fn main() {
    // Same layout as C's __DATE__, e.g. "Oct 16 2026"
    let date = chrono::Utc::now().format("%b %e %Y");
    println!("cargo:rustc-env=PARSEROPT_BUILD_DATE={}", date);
    println!("cargo:rerun-if-changed=build.rs");
}
