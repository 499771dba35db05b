//! Environment/runtime helpers
//!
//! Sanity checks to ensure the store location is usable at startup.

use std::path::Path;

/// For file-backed SQLite URLs, create the parent directory so the first
/// connection does not fail on a missing path. Other URL schemes are
/// untouched.
pub async fn ensure_data_dir(database_url: &str) -> anyhow::Result<()> {
    let file = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"));
    let Some(file) = file else { return Ok(()) };
    if file.is_empty() || file.starts_with(':') {
        // ":memory:" and friends have no backing file
        return Ok(());
    }
    if let Some(parent) = Path::new(file).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_data_dir;

    #[tokio::test]
    async fn memory_urls_are_left_alone() {
        ensure_data_dir("sqlite::memory:").await.unwrap();
        ensure_data_dir("postgres://localhost/menu").await.unwrap();
    }

    #[tokio::test]
    async fn file_urls_get_their_directory() {
        let dir = std::env::temp_dir().join("menu-service-env-test");
        let url = format!("sqlite://{}/store.db", dir.display());
        ensure_data_dir(&url).await.unwrap();
        assert!(dir.exists());
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
