use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::namespace::{InsertError, Namespace, NodeId, NodeKind};

/// Thread-safe handle to a [`Namespace`].
///
/// Insertions take the write lock; queries run under a read guard, so any
/// number of readers may traverse at once but never while a node is being
/// attached.
#[derive(Debug, Clone, Default)]
pub struct SharedNamespace {
    inner: Arc<RwLock<Namespace>>,
}

impl SharedNamespace {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(namespace)),
        }
    }

    pub fn insert(
        &self,
        parent_path: &str,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, InsertError> {
        self.inner.write().insert(parent_path, name, kind)
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Namespace> {
        self.inner.read()
    }

    /// Clones the current state out of the lock.
    pub fn snapshot(&self) -> Namespace {
        self.inner.read().clone()
    }
}

impl From<Namespace> for SharedNamespace {
    fn from(namespace: Namespace) -> Self {
        Self::new(namespace)
    }
}
