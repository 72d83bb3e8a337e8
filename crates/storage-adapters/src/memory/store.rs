use dashmap::DashMap;

/// A registered user. Only `id` and `username` matter to the forum;
/// `password` holds whatever hash the caller stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            id: "user-123".into(),
            username: "dicoding".into(),
            password: "secret".into(),
            fullname: "Dicoding Indonesia".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub owner: String,
}

impl Default for ThreadRecord {
    fn default() -> Self {
        Self {
            id: "thread-123".into(),
            title: "Sebuah thread".into(),
            body: "Isi thread".into(),
            created_at: "2023-02-06T15:00:00.000Z".into(),
            owner: "user-123".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub is_delete: bool,
    pub thread: String,
    pub owner: String,
}

impl Default for CommentRecord {
    fn default() -> Self {
        Self {
            id: "comment-123".into(),
            content: "sebuah comment".into(),
            created_at: "2023-02-06T15:04:40.970Z".into(),
            is_delete: false,
            thread: "thread-123".into(),
            owner: "user-123".into(),
        }
    }
}

/// Process-local tables shared by the in-memory repositories.
///
/// Foreign keys are checked on insert the way the Postgres schema does, so a
/// comment can only land on an existing thread written by an existing user.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) users: DashMap<String, UserRecord>,
    pub(crate) threads: DashMap<String, ThreadRecord>,
    pub(crate) comments: DashMap<String, CommentRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: UserRecord) {
        self.users.insert(user.id.clone(), user);
    }

    /// Inserts a thread as-is, bypassing the owner check. Fixture use only.
    pub fn insert_thread(&self, thread: ThreadRecord) {
        self.threads.insert(thread.id.clone(), thread);
    }

    /// Inserts a comment row as-is, with its own `created_at`. Fixture use only.
    pub fn insert_comment(&self, comment: CommentRecord) {
        self.comments.insert(comment.id.clone(), comment);
    }

    pub fn find_thread(&self, id: &str) -> Option<ThreadRecord> {
        self.threads.get(id).map(|entry| entry.value().clone())
    }

    pub fn find_comment(&self, id: &str) -> Option<CommentRecord> {
        self.comments.get(id).map(|entry| entry.value().clone())
    }

    /// The soft-delete flag of a comment, `None` when no such row exists.
    pub fn is_comment_deleted(&self, id: &str) -> Option<bool> {
        self.comments.get(id).map(|entry| entry.is_delete)
    }

    pub(crate) fn username_of(&self, user_id: &str) -> Option<String> {
        self.users.get(user_id).map(|entry| entry.username.clone())
    }
}
