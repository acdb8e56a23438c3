//! Snapshot tests — observable listing regression detection.

mod common;

use common::{hitchhikers_guide, song_of_ice_and_fire, storage_with_two_books, SCHNEIER};
use insta::assert_json_snapshot;

use book_storage::domain::model::id::BookId;
use book_storage::domain::repository::BookStorage;
use book_storage::infra::memory_store::InMemoryBookStorage;

#[test]
fn snapshot_two_books() {
    let storage = storage_with_two_books();
    assert_json_snapshot!("two_books", storage.retrieve_all_books());
}

#[test]
fn snapshot_after_delete_first() {
    let mut storage = InMemoryBookStorage::new();
    storage.save_book(song_of_ice_and_fire());
    storage.save_book(hitchhikers_guide());
    storage.delete_book(BookId::new(1));

    assert_json_snapshot!("after_delete_first", storage.retrieve_all_books());
}

#[test]
fn snapshot_after_update() {
    let mut storage = storage_with_two_books();
    let mut book = storage.retrieve_book_by_id(BookId::new(1)).unwrap();
    book.set_author(SCHNEIER);
    storage.save_book(book);

    assert_json_snapshot!("after_update", storage.retrieve_all_books());
}
