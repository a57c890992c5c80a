#![cfg(feature = "std")]
//! Snapshot storage keyed by match and player.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use log::debug;
use tokio::sync::Mutex;

use crate::snapshot::NavySnapshot;

/// Identifies one player's navy in one match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct SnapshotKey {
    pub match_id: u64,
    pub player_id: u64,
}

impl SnapshotKey {
    pub fn new(match_id: u64, player_id: u64) -> Self {
        Self { match_id, player_id }
    }
}

/// Request/response persistence for navy snapshots.
#[async_trait::async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Store `snapshot` under `key`, replacing any previous one.
    async fn save(&self, key: SnapshotKey, snapshot: &NavySnapshot) -> anyhow::Result<()>;
    /// Fetch the snapshot under `key`, if any.
    async fn load(&self, key: SnapshotKey) -> anyhow::Result<Option<NavySnapshot>>;
    /// All stored keys in ascending order.
    async fn keys(&self) -> anyhow::Result<Vec<SnapshotKey>>;
}

/// Store that keeps encoded snapshots in memory. Clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    snapshots: Arc<Mutex<BTreeMap<SnapshotKey, Vec<u8>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SnapshotStore for InMemoryStore {
    async fn save(&self, key: SnapshotKey, snapshot: &NavySnapshot) -> anyhow::Result<()> {
        let bytes = snapshot.to_bytes()?;
        self.snapshots.lock().await.insert(key, bytes);
        Ok(())
    }

    async fn load(&self, key: SnapshotKey) -> anyhow::Result<Option<NavySnapshot>> {
        let snapshots = self.snapshots.lock().await;
        snapshots
            .get(&key)
            .map(|bytes| NavySnapshot::from_bytes(bytes))
            .transpose()
    }

    async fn keys(&self) -> anyhow::Result<Vec<SnapshotKey>> {
        Ok(self.snapshots.lock().await.keys().copied().collect())
    }
}

const EXTENSION: &str = "navy";

/// Store that writes one `<match>-<player>.navy` file per key under a root
/// directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: SnapshotKey) -> PathBuf {
        self.root
            .join(format!("{}-{}.{}", key.match_id, key.player_id, EXTENSION))
    }

    fn parse_key(path: &Path) -> Option<SnapshotKey> {
        if path.extension()? != EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        let (match_id, player_id) = stem.split_once('-')?;
        Some(SnapshotKey::new(match_id.parse().ok()?, player_id.parse().ok()?))
    }
}

#[async_trait::async_trait]
impl SnapshotStore for FileStore {
    async fn save(&self, key: SnapshotKey, snapshot: &NavySnapshot) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("creating {}", self.root.display()))?;
        let path = self.path(key);
        let bytes = snapshot.to_bytes()?;
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        debug!("saved snapshot to {}", path.display());
        Ok(())
    }

    async fn load(&self, key: SnapshotKey) -> anyhow::Result<Option<NavySnapshot>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(NavySnapshot::from_bytes(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    async fn keys(&self) -> anyhow::Result<Vec<SnapshotKey>> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).with_context(|| format!("listing {}", self.root.display())),
        };
        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(key) = Self::parse_key(&entry.path()) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}
