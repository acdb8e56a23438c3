use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::domain::model::book::Book;
use crate::domain::model::id::BookId;
use crate::domain::repository::BookStorage;

use super::config::StorageConfig;

/// インメモリのBookStorage実装。
///
/// 連番カウンタとレコードをインスタンスが所有する（グローバル状態なし）。
/// IDは単調増加なので、BTreeMapの順序 = 初回保存順。
#[derive(Debug, Default)]
pub struct InMemoryBookStorage {
    config: StorageConfig,
    books: BTreeMap<BookId, Book>,
    /// 最後に発行したID。delete_all_booksでのみ巻き戻る。
    last_id: Option<BookId>,
}

impl InMemoryBookStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StorageConfig) -> Self {
        Self {
            config,
            books: BTreeMap::new(),
            last_id: None,
        }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    fn next_id(&mut self) -> BookId {
        let id = self.last_id.map_or(BookId::FIRST, BookId::next);
        self.last_id = Some(id);
        id
    }
}

impl BookStorage for InMemoryBookStorage {
    fn save_book(&mut self, mut book: Book) -> Book {
        if let Some(id) = book.id() {
            if let Some(stored) = self.books.get_mut(&id) {
                *stored = book;
                debug!(storage = %self.config.name, book_id = %id, "book updated");
                return stored.clone();
            }
        }

        // 未保存 or 一致しないIDは無視して採番
        let forced = book.id();
        let id = self.next_id();
        book.assign_id(id);
        self.books.insert(id, book.clone());
        debug!(
            storage = %self.config.name,
            book_id = %id,
            ignored_id = ?forced,
            "book inserted"
        );
        book
    }

    fn retrieve_book_by_id(&self, id: BookId) -> Option<Book> {
        let found = self.books.get(&id).cloned();
        trace!(storage = %self.config.name, book_id = %id, found = found.is_some(), "retrieve book");
        found
    }

    fn retrieve_all_books(&self) -> Vec<Book> {
        trace!(storage = %self.config.name, count = self.books.len(), "retrieve all books");
        self.books.values().cloned().collect()
    }

    fn delete_book(&mut self, id: BookId) {
        if self.books.remove(&id).is_some() {
            debug!(storage = %self.config.name, book_id = %id, "book deleted");
        }
    }

    fn delete_all_books(&mut self) {
        let removed = self.books.len();
        self.books.clear();
        self.last_id = None;
        debug!(storage = %self.config.name, removed, "all books deleted");
    }

    fn book_count(&self) -> usize {
        self.books.len()
    }

    fn contains_book(&self, id: BookId) -> bool {
        self.books.contains_key(&id)
    }
}
