use serde::{Deserialize, Serialize};

use super::id::BookId;

/// 保存対象のBook。
///
/// `id` はストレージが割り当てる。未保存なら `None`。
/// 呼び出し側が `set_id` で付けたIDは、既存レコードと一致する場合のみ更新として扱われる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<BookId>,
    author: String,
}

impl Book {
    /// 未保存のBookを作る。
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            id: None,
            author: author.into(),
        }
    }

    /// IDを指定したBookを作る（更新リクエスト用）。
    pub fn with_id(id: BookId, author: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            author: author.into(),
        }
    }

    pub fn id(&self) -> Option<BookId> {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_id(&mut self, id: Option<BookId>) {
        self.id = id;
    }

    /// ストレージ側でIDを確定させる。
    pub(crate) fn assign_id(&mut self, id: BookId) {
        self.id = Some(id);
    }
}
