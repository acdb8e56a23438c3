use super::model::book::Book;
use super::model::id::BookId;

/// Bookストレージの抽象。Infra層が実装する。
///
/// 全操作は失敗しない。存在しないIDは `None` / no-op で表す。
pub trait BookStorage {
    /// 挿入または更新。保存されたレコードのコピーを返す。
    ///
    /// IDが既存レコードと一致すれば更新（IDは維持）、それ以外は次の連番で挿入する。
    fn save_book(&mut self, book: Book) -> Book;

    fn retrieve_book_by_id(&self, id: BookId) -> Option<Book>;

    /// 挿入順で全件返す。
    fn retrieve_all_books(&self) -> Vec<Book>;

    /// 存在しなければ何もしない。
    fn delete_book(&mut self, id: BookId);

    /// 全件削除し、連番もリセットする。
    fn delete_all_books(&mut self);

    fn book_count(&self) -> usize {
        self.retrieve_all_books().len()
    }

    fn contains_book(&self, id: BookId) -> bool {
        self.retrieve_book_by_id(id).is_some()
    }
}
