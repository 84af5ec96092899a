// README-to-rustdoc conversion shared by every crate's build script.
// Include with: include!("../build_common.rs");
//
// The including file must import std::env, std::fs and std::path::Path.

/// Write the crate README, rewritten for rustdoc, to `$OUT_DIR/README_GENERATED.md`.
///
/// Links into `src/` become module links and links to the workspace README
/// become absolute repository links. A crate without a README gets an empty
/// file so `include_str!` in its `lib.rs` still resolves.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let content = fs::read_to_string(Path::new(crate_dir).join("README.md")).unwrap_or_default();

    let mut rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");
    if let Some(url) = workspace_repository_url(crate_dir) {
        rustdoc_content = rustdoc_content.replace("](../../README.md", &format!("]({url}"));
    }

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rustdoc_content)
        .expect("OUT_DIR is writable");
}

/// The `repository = "..."` value of the workspace manifest, if any.
fn workspace_repository_url(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir).parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;

    content.lines().map(str::trim).find_map(|line| {
        let value = line.strip_prefix("repository")?.trim_start().strip_prefix('=')?;
        let value = value.trim().strip_prefix('"')?;
        let end = value.find('"')?;
        Some(value[..end].to_string())
    })
}
