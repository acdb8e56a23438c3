use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::domain::model::book::Book;
use crate::domain::model::id::BookId;
use crate::domain::repository::BookStorage;

use super::config::StorageConfig;
use super::memory_store::InMemoryBookStorage;

/// スレッド間で共有できるBookStorage。ストア全体を1つのMutexで保護する。
/// Cloneしたハンドルは同じストアを指す。
#[derive(Debug, Clone, Default)]
pub struct SharedBookStorage {
    inner: Arc<Mutex<InMemoryBookStorage>>,
}

impl SharedBookStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StorageConfig) -> Self {
        Self::from(InMemoryBookStorage::with_config(config))
    }

    /// 全件を1回のロックで取得する。
    pub fn snapshot(&self) -> Vec<Book> {
        self.lock().retrieve_all_books()
    }

    // 各操作はpanic前に整合した状態を残すため、poisonは回復して続行する。
    fn lock(&self) -> MutexGuard<'_, InMemoryBookStorage> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("book storage lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl From<InMemoryBookStorage> for SharedBookStorage {
    fn from(storage: InMemoryBookStorage) -> Self {
        Self {
            inner: Arc::new(Mutex::new(storage)),
        }
    }
}

impl BookStorage for SharedBookStorage {
    fn save_book(&mut self, book: Book) -> Book {
        self.lock().save_book(book)
    }

    fn retrieve_book_by_id(&self, id: BookId) -> Option<Book> {
        self.lock().retrieve_book_by_id(id)
    }

    fn retrieve_all_books(&self) -> Vec<Book> {
        self.snapshot()
    }

    fn delete_book(&mut self, id: BookId) {
        self.lock().delete_book(id)
    }

    fn delete_all_books(&mut self) {
        self.lock().delete_all_books()
    }

    fn book_count(&self) -> usize {
        self.lock().book_count()
    }

    fn contains_book(&self, id: BookId) -> bool {
        self.lock().contains_book(id)
    }
}
