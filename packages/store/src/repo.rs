//! # Repository: cifra operations on an abstract store
//!
//! [`Repository`] holds the rules around persistence: every write validates its
//! input and checks the session before the store is touched, and edits and deletes
//! go through the author check in [`crate::access`]. The store itself is a plain
//! CRUD surface behind the [`CifraStore`] trait, so the same rules run against
//! PostgreSQL on the server and against [`crate::MemoryStore`] in tests.
//!
//! | Method | Checks, in order |
//! |--------|------------------|
//! | [`list`](Repository::list) | none; newest first |
//! | [`get`](Repository::get) | `NotFound` when absent |
//! | [`search`](Repository::search) | none |
//! | [`submit`](Repository::submit) | session → draft → insert with the session name as author |
//! | [`edit`](Repository::edit) | draft → exists → author → update |
//! | [`remove`](Repository::remove) | exists → author → delete |
//!
//! `session_name` is the display name of the logged-in user, or `None`.

use std::future::Future;

use crate::access::ensure_author;
use crate::error::CifraError;
use crate::models::{Cifra, CifraDraft};
use crate::search;
use crate::validate::validate_draft;

/// Async CRUD over the `cifras` collection.
pub trait CifraStore: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Cifra>, CifraError>> + Send;

    fn get(&self, id: &str) -> impl Future<Output = Result<Option<Cifra>, CifraError>> + Send;

    fn insert(
        &self,
        autor: &str,
        draft: &CifraDraft,
    ) -> impl Future<Output = Result<Cifra, CifraError>> + Send;

    /// Replace the editable fields. `NotFound` if the id vanished meanwhile.
    fn update(
        &self,
        id: &str,
        draft: &CifraDraft,
    ) -> impl Future<Output = Result<Cifra, CifraError>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<(), CifraError>> + Send;
}

/// Cifra operations backed by a [`CifraStore`].
pub struct Repository<S: CifraStore> {
    store: S,
}

impl<S: CifraStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All cifras, newest first.
    pub async fn list(&self) -> Result<Vec<Cifra>, CifraError> {
        let mut cifras = self.store.list().await?;
        cifras.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(cifras)
    }

    pub async fn get(&self, id: &str) -> Result<Cifra, CifraError> {
        self.store.get(id).await?.ok_or(CifraError::NotFound)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Cifra>, CifraError> {
        Ok(search::filter(self.list().await?, query))
    }

    pub async fn submit(
        &self,
        session_name: Option<&str>,
        draft: CifraDraft,
    ) -> Result<Cifra, CifraError> {
        let autor = session_name.ok_or(CifraError::Unauthenticated)?;
        let draft = draft.normalized();
        validate_draft(&draft)?;
        self.store.insert(autor, &draft).await
    }

    pub async fn edit(
        &self,
        session_name: Option<&str>,
        id: &str,
        draft: CifraDraft,
    ) -> Result<Cifra, CifraError> {
        let draft = draft.normalized();
        validate_draft(&draft)?;
        let current = self.get(id).await?;
        ensure_author(&current, session_name)?;
        self.store.update(id, &draft).await
    }

    pub async fn remove(&self, session_name: Option<&str>, id: &str) -> Result<(), CifraError> {
        let current = self.get(id).await?;
        ensure_author(&current, session_name)?;
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::memory::MemoryStore;

    /// Counts every call that reaches the store.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        calls: AtomicUsize,
    }

    impl CountingStore {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl CifraStore for CountingStore {
        async fn list(&self) -> Result<Vec<Cifra>, CifraError> {
            self.hit();
            self.inner.list().await
        }

        async fn get(&self, id: &str) -> Result<Option<Cifra>, CifraError> {
            self.hit();
            self.inner.get(id).await
        }

        async fn insert(&self, autor: &str, draft: &CifraDraft) -> Result<Cifra, CifraError> {
            self.hit();
            self.inner.insert(autor, draft).await
        }

        async fn update(&self, id: &str, draft: &CifraDraft) -> Result<Cifra, CifraError> {
            self.hit();
            self.inner.update(id, draft).await
        }

        async fn delete(&self, id: &str) -> Result<(), CifraError> {
            self.hit();
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn test_submit_sets_author_from_session() {
        let repo = Repository::new(MemoryStore::new());

        let cifra = repo
            .submit(
                Some("ana"),
                CifraDraft::new(" Wave ", "Dm7 G7\nVou te contar").with_video(""),
            )
            .await
            .unwrap();

        assert_eq!(cifra.autor, "ana");
        assert_eq!(cifra.titulo, "Wave");
        assert_eq!(cifra.video_url, None);
        assert_eq!(repo.get(&cifra.id).await.unwrap(), cifra);
    }

    #[tokio::test]
    async fn test_invalid_submit_never_reaches_store() {
        let repo = Repository::new(CountingStore::default());

        let err = repo
            .submit(Some("ana"), CifraDraft::new("", "C G"))
            .await
            .unwrap_err();
        assert!(matches!(err, CifraError::Validation(_)));

        let err = repo
            .submit(Some("ana"), CifraDraft::new("Wave", "   "))
            .await
            .unwrap_err();
        assert!(matches!(err, CifraError::Validation(_)));

        let err = repo
            .submit(None, CifraDraft::new("Wave", "C G"))
            .await
            .unwrap_err();
        assert_eq!(err, CifraError::Unauthenticated);

        assert_eq!(repo.store.calls(), 0);
    }

    #[tokio::test]
    async fn test_edit_by_author() {
        let repo = Repository::new(MemoryStore::new());
        let cifra = repo
            .submit(Some("ana"), CifraDraft::new("Wave", "Dm7 G7"))
            .await
            .unwrap();

        let edited = repo
            .edit(
                Some("ana"),
                &cifra.id,
                CifraDraft::new("Wave (Tom Jobim)", "Dm7 G7 C7M").with_video("https://youtu.be/x"),
            )
            .await
            .unwrap();

        assert_eq!(edited.id, cifra.id);
        assert_eq!(edited.autor, "ana");
        assert_eq!(edited.titulo, "Wave (Tom Jobim)");
        assert_eq!(edited.video_url.as_deref(), Some("https://youtu.be/x"));
        assert_eq!(repo.get(&cifra.id).await.unwrap(), edited);
    }

    #[tokio::test]
    async fn test_edit_and_remove_refused_for_other_names() {
        let repo = Repository::new(MemoryStore::new());
        let cifra = repo
            .submit(Some("ana"), CifraDraft::new("Wave", "Dm7 G7"))
            .await
            .unwrap();

        let err = repo
            .edit(Some("bia"), &cifra.id, CifraDraft::new("Hijack", "C"))
            .await
            .unwrap_err();
        assert_eq!(err, CifraError::NotAuthor);

        let err = repo.remove(None, &cifra.id).await.unwrap_err();
        assert_eq!(err, CifraError::Unauthenticated);

        let err = repo.remove(Some("bia"), &cifra.id).await.unwrap_err();
        assert_eq!(err, CifraError::NotAuthor);

        assert_eq!(repo.get(&cifra.id).await.unwrap().titulo, "Wave");
    }

    #[tokio::test]
    async fn test_remove_by_author() {
        let repo = Repository::new(MemoryStore::new());
        let cifra = repo
            .submit(Some("ana"), CifraDraft::new("Wave", "Dm7 G7"))
            .await
            .unwrap();

        repo.remove(Some("ana"), &cifra.id).await.unwrap();
        assert_eq!(repo.get(&cifra.id).await.unwrap_err(), CifraError::NotFound);
        assert_eq!(
            repo.remove(Some("ana"), &cifra.id).await.unwrap_err(),
            CifraError::NotFound
        );
    }

    #[tokio::test]
    async fn test_list_and_search() {
        let repo = Repository::new(MemoryStore::new());
        repo.submit(Some("ana"), CifraDraft::new("Wave", "Dm7"))
            .await
            .unwrap();
        repo.submit(Some("bia"), CifraDraft::new("Asa Branca", "G C D"))
            .await
            .unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);

        let found = repo.search("asa").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].autor, "bia");

        assert_eq!(repo.search("ANA").await.unwrap().len(), 1);
        assert_eq!(repo.search("").await.unwrap().len(), 2);
    }
}
