//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "data/blog".into()
    }

    pub fn output() -> PathBuf {
        "app".into()
    }

    pub fn extensions() -> Vec<String> {
        vec!["md".into(), "mdx".into()]
    }

    pub mod slug {
        use super::super::super::SlugMode;

        pub fn mode() -> SlugMode {
            SlugMode::default()
        }
    }
}

// ============================================================================
// [index] Section Defaults
// ============================================================================

pub mod index {
    use std::path::PathBuf;

    pub fn tags() -> PathBuf {
        "tag-data.json".into()
    }

    pub fn archives() -> PathBuf {
        "archives-data.json".into()
    }
}

// ============================================================================
// [search] Section Defaults
// ============================================================================

pub mod search {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "search.json".into()
    }
}

// ============================================================================
// [archives] Section Defaults
// ============================================================================

pub mod archives {
    pub fn posts_per_page() -> usize {
        5
    }
}
