//! Build provenance.
//!
//! `build.rs` captures git metadata through vergen when the crate is
//! built inside a checkout; packaged and vendored builds fall back to
//! "unknown" fields.

/// Crate version as declared in Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Branch the binary was built from, "unknown" outside a checkout.
pub const GIT_BRANCH: &str = match option_env!("VERGEN_GIT_BRANCH") {
    Some(branch) => branch,
    None => "unknown",
};

/// Commit the binary was built from, "unknown" outside a checkout.
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// True when the build tree had uncommitted changes.
pub fn git_dirty() -> bool {
    option_env!("VERGEN_GIT_DIRTY") == Some("true")
}

/// Version line for startup banners and bug reports: package version,
/// then branch and short commit, with a trailing `.dirty` marker when
/// the tree had local edits (`0.1.0+main.4f9c21a.dirty`).
pub fn version_string() -> String {
    let short_sha = &GIT_SHA[..7.min(GIT_SHA.len())];
    let mut rendered = format!("{PKG_VERSION}+{GIT_BRANCH}.{short_sha}");
    if git_dirty() {
        rendered.push_str(".dirty");
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_is_package_version_plus_provenance() {
        let rendered = version_string();
        let (version, provenance) = rendered.split_once('+').expect("provenance separator");
        assert_eq!(version, PKG_VERSION);
        assert!(
            provenance.starts_with(GIT_BRANCH),
            "branch should lead the provenance segment: {rendered}"
        );
    }

    #[test]
    fn dirty_marker_is_a_suffix_or_absent() {
        let rendered = version_string();
        if git_dirty() {
            assert!(rendered.ends_with(".dirty"), "dirty build: {rendered}");
        } else {
            assert!(!rendered.ends_with(".dirty"), "clean build: {rendered}");
        }
    }
}
