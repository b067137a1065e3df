//! Print version information

/// Print the version, as text or JSON
pub fn version(json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "version": repo_catalog::VERSION
            })
        );
    } else {
        println!("repo-catalog v{}", repo_catalog::VERSION);
    }
}
