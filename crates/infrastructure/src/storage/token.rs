use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// Reads the optional bearer token: first line, trimmed.
///
/// A missing, unreadable or blank file yields `None`; the run continues
/// unauthenticated.
pub async fn load_token(path: &Path) -> Option<String> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "No token file, using anonymous requests");
            return None;
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Token file unreadable, using anonymous requests"
            );
            return None;
        }
    };

    let token = content.lines().next().map(str::trim).unwrap_or_default();
    if token.is_empty() {
        warn!(path = %path.display(), "Token file is empty, using anonymous requests");
        return None;
    }

    info!("Using token for authenticated GitHub requests");
    Some(token.to_string())
}
