use crate::db::{Store, Tool};
use crate::error::CmsError;
use crate::service::catalog::builtin_catalog;
use tracing::info;

/// Replace the whole `tools` table with `tools`. Atomic: on failure the previous rows remain.
pub async fn seed_tools(store: &Store, tools: &[Tool]) -> Result<usize, CmsError> {
    let count = store.replace_all_tools(tools).await?;
    info!(count, "tools table replaced");
    Ok(count)
}

pub async fn seed_builtin(store: &Store) -> Result<usize, CmsError> {
    seed_tools(store, &builtin_catalog()).await
}
