// README-to-rustdoc helpers shared by the crate build scripts.
// Pull in with `include!("../build_common.rs");` after importing
// `std::env`, `std::fs` and `std::path::Path`.

/// Link rewrites applied so README links resolve inside rustdoc.
///
/// `src/` prefixes and `.rs` suffixes are dropped so file links become module
/// links. A link to the workspace README becomes a link to the repository.
fn rustdoc_links(readme: &str, repo_url: Option<&str>) -> String {
    let doc = readme.replace("](src/", "](").replace(".rs)", ")");
    match repo_url {
        Some(url) => doc.replace("](../../README.md", &format!("]({url}")),
        None => doc,
    }
}

/// Write `README_GENERATED.md` to `OUT_DIR` for `#![doc = include_str!(..)]`.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let crate_dir = Path::new(crate_dir);
    let readme = fs::read_to_string(crate_dir.join("README.md")).unwrap_or_default();
    let repo_url = workspace_repository(crate_dir);
    let doc = rustdoc_links(&readme, repo_url.as_deref());

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), doc).unwrap();
}

/// `repository = "..."` from the workspace manifest two levels up.
fn workspace_repository(crate_dir: &Path) -> Option<String> {
    let manifest = fs::read_to_string(crate_dir.parent()?.parent()?.join("Cargo.toml")).ok()?;
    manifest.lines().find_map(|line| {
        let value = line.trim().strip_prefix("repository")?.trim_start();
        let value = value.strip_prefix('=')?.trim();
        Some(value.trim_matches('"').to_string())
    })
}
