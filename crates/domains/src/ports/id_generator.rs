/// Produces the unique token appended to `thread-` / `comment-` ids.
///
/// Any `Fn() -> String` closure qualifies, which keeps test doubles trivial:
/// `Arc::new(|| "123".to_string())`.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}
