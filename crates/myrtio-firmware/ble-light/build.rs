fn main() {
    println!("cargo:rerun-if-env-changed=BUILD_VERSION");
    println!("cargo:rustc-link-arg=-Tlinkall.x");

    let version = std::env::var("BUILD_VERSION")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y%m%d.%H%M").to_string());
    println!("cargo:rustc-env=BUILD_VERSION={version}");
}
