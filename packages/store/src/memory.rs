use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::error::CifraError;
use crate::models::{Cifra, CifraDraft};
use crate::repo::CifraStore;

/// In-memory CifraStore for tests and local development without a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    cifras: Arc<Mutex<Vec<Cifra>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Cifra>>, CifraError> {
        self.cifras.lock().map_err(CifraError::storage)
    }
}

impl CifraStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Cifra>, CifraError> {
        Ok(self.lock()?.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Cifra>, CifraError> {
        Ok(self.lock()?.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, autor: &str, draft: &CifraDraft) -> Result<Cifra, CifraError> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let cifra = Cifra {
            id: format!("mem-{n:06}"),
            titulo: draft.titulo.clone(),
            autor: autor.to_string(),
            texto: draft.texto.clone(),
            video_url: draft.video_url.clone(),
            created_at: Utc::now(),
        };
        self.lock()?.push(cifra.clone());
        Ok(cifra)
    }

    async fn update(&self, id: &str, draft: &CifraDraft) -> Result<Cifra, CifraError> {
        let mut cifras = self.lock()?;
        let cifra = cifras
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CifraError::NotFound)?;
        cifra.apply(draft.clone());
        Ok(cifra.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), CifraError> {
        let mut cifras = self.lock()?;
        let before = cifras.len();
        cifras.retain(|c| c.id != id);
        if cifras.len() == before {
            return Err(CifraError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_delete() {
        let store = MemoryStore::new();
        assert!(store.list().await.unwrap().is_empty());

        let first = store
            .insert("ana", &CifraDraft::new("Wave", "Dm7 G7"))
            .await
            .unwrap();
        let second = store
            .insert("bia", &CifraDraft::new("Asa Branca", "G C D"))
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.list().await.unwrap().len(), 2);

        let loaded = store.get(&first.id).await.unwrap().unwrap();
        assert_eq!(loaded.autor, "ana");
        assert_eq!(loaded.texto, "Dm7 G7");

        store.delete(&first.id).await.unwrap();
        assert!(store.get(&first.id).await.unwrap().is_none());
        assert_eq!(store.delete(&first.id).await, Err(CifraError::NotFound));
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_author() {
        let store = MemoryStore::new();
        let cifra = store
            .insert("ana", &CifraDraft::new("Wave", "Dm7"))
            .await
            .unwrap();

        let updated = store
            .update(&cifra.id, &CifraDraft::new("Wave 2", "Dm7 G7"))
            .await
            .unwrap();
        assert_eq!(updated.id, cifra.id);
        assert_eq!(updated.autor, "ana");
        assert_eq!(updated.created_at, cifra.created_at);
        assert_eq!(updated.titulo, "Wave 2");

        assert_eq!(
            store.update("missing", &CifraDraft::new("x", "y")).await,
            Err(CifraError::NotFound)
        );
    }
}
