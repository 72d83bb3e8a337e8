//! Thread entities: the creation payload and its two read projections.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::comment::DetailComment;
use crate::payload::{Payload, Shape};

/// A request to open a new thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddThread {
    pub title: String,
    pub body: String,
    /// Id of the authenticated user opening the thread
    pub owner: String,
}

impl AddThread {
    pub fn parse(payload: &Payload) -> Result<Self, ValidationError> {
        let shape = Shape::new("ADD_THREAD", payload);
        shape.require(&["title", "body", "owner"])?;

        Ok(Self {
            title: shape.string("title")?,
            body: shape.string("body")?,
            owner: shape.string("owner")?,
        })
    }
}

/// What the caller gets back after a thread is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn parse(payload: &Payload) -> Result<Self, ValidationError> {
        let shape = Shape::new("ADDED_THREAD", payload);
        shape.require(&["id", "title", "owner"])?;

        Ok(Self {
            id: shape.string("id")?,
            title: shape.string("title")?,
            owner: shape.string("owner")?,
        })
    }
}

/// Read projection of a thread, joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailThread {
    pub id: String,
    pub title: String,
    pub body: String,
    /// ISO-8601 creation timestamp
    pub date: String,
    pub username: String,
}

impl DetailThread {
    pub fn parse(payload: &Payload) -> Result<Self, ValidationError> {
        let shape = Shape::new("DETAIL_THREAD", payload);
        shape.require(&["id", "title", "body", "date", "username"])?;

        Ok(Self {
            id: shape.string("id")?,
            title: shape.string("title")?,
            body: shape.string("body")?,
            date: shape.string("date")?,
            username: shape.string("username")?,
        })
    }

    /// Attaches the (already redacted) comment list.
    pub fn with_comments(self, comments: Vec<DetailComment>) -> ThreadWithComments {
        ThreadWithComments { thread: self, comments }
    }
}

/// A thread projection merged with its comments under a `comments` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadWithComments {
    #[serde(flatten)]
    pub thread: DetailThread,
    pub comments: Vec<DetailComment>,
}
