pub mod add_thread;
pub mod detail_thread;

pub use add_thread::AddThreadUseCase;
pub use detail_thread::DetailThreadUseCase;
