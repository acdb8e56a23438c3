//! Shared test harness for integration tests.

#![allow(dead_code)]

use book_storage::application::service::BookService;
use book_storage::domain::model::book::Book;
use book_storage::domain::repository::BookStorage;
use book_storage::infra::memory_store::InMemoryBookStorage;

// =============================================================================
// Fixtures
// =============================================================================

pub const MARTIN: &str = "George R.R. Martin";
pub const ADAMS: &str = "Douglas Adams";
pub const SCHNEIER: &str = "Bruce Schneier";

pub fn song_of_ice_and_fire() -> Book {
    Book::new(MARTIN)
}

pub fn hitchhikers_guide() -> Book {
    Book::new(ADAMS)
}

/// 空のストレージ。
pub fn empty_storage() -> InMemoryBookStorage {
    InMemoryBookStorage::new()
}

/// Martin(1), Adams(2) を保存済みのストレージ。
pub fn storage_with_two_books() -> InMemoryBookStorage {
    let mut storage = empty_storage();
    storage.save_book(song_of_ice_and_fire());
    storage.save_book(hitchhikers_guide());
    storage
}

pub fn service_with_two_books() -> BookService<InMemoryBookStorage> {
    BookService::new(storage_with_two_books())
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}

/// 全件の (id, author) を取り出す。
pub fn ids_and_authors(storage: &impl BookStorage) -> Vec<(u64, String)> {
    storage
        .retrieve_all_books()
        .into_iter()
        .map(|b| (b.id().map_or(0, |id| id.get()), b.author().to_string()))
        .collect()
}
