pub const BASE_PATH_ENV: &str = "FOLIO_BASE_PATH";

/// Maps logical asset paths (`/images/...`, `/videos/...`, `/models/...`) to
/// URLs under the deployment prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetResolver {
    prefix: String,
}

impl AssetResolver {
    pub fn new(prefix: &str) -> Self {
        Self { prefix: normalize_prefix(prefix) }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn resolve(&self, path: &str) -> String {
        if is_external(path) {
            return path.to_string();
        }

        let path = path.trim_start_matches('/');
        format!("{}/{}", self.prefix, path)
    }
}

pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

// "" stays empty, "repo/" and "/repo" both become "/repo"
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
