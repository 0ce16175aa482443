use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub genre: String,

    /// Id of the author. Not checked against the author collection.
    pub authorid: String,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        genre: impl Into<String>,
        authorid: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            genre: genre.into(),
            authorid: authorid.into(),
        }
    }

    pub fn is_by(&self, author_id: &str) -> bool {
        self.authorid == author_id
    }
}
