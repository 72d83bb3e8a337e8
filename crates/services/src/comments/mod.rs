pub mod add_comment;
pub mod delete_comment;

pub use add_comment::AddCommentUseCase;
pub use delete_comment::{DeleteCommentCommand, DeleteCommentUseCase};
