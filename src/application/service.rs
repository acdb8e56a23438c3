use crate::domain::model::book::Book;
use crate::domain::model::id::BookId;
use crate::domain::repository::BookStorage;
use crate::infra::config::StorageConfig;
use crate::infra::memory_store::InMemoryBookStorage;

use super::error::AppError;

/// Bookに対するユースケース。
/// ストレージ自体は失敗しないので、存在必須の操作だけが `AppError` を返す。
pub struct BookService<S: BookStorage> {
    storage: S,
}

impl BookService<InMemoryBookStorage> {
    /// JSON設定からインメモリストレージ付きのServiceを作る。
    pub fn in_memory_from_json(config: &str) -> Result<Self, AppError> {
        let config = StorageConfig::from_json(config)?;
        Ok(Self::new(InMemoryBookStorage::with_config(config)))
    }
}

impl<S: BookStorage> BookService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// 新規Bookを保存し、採番済みのBookを返す。
    pub fn add_book(&mut self, author: &str) -> Book {
        self.storage.save_book(Book::new(author))
    }

    pub fn find_book(&self, id: BookId) -> Option<Book> {
        self.storage.retrieve_book_by_id(id)
    }

    pub fn require_book(&self, id: BookId) -> Result<Book, AppError> {
        self.find_book(id).ok_or(AppError::BookNotFound(id))
    }

    /// 既存Bookの著者を変更する。load → mutate → save。
    pub fn update_author(&mut self, id: BookId, author: &str) -> Result<Book, AppError> {
        let mut book = self.require_book(id)?;
        book.set_author(author);
        Ok(self.storage.save_book(book))
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.storage.retrieve_all_books()
    }

    pub fn remove_book(&mut self, id: BookId) {
        self.storage.delete_book(id);
    }

    pub fn clear(&mut self) {
        self.storage.delete_all_books();
    }
}
