pub mod bookmark;
pub mod task;
pub mod todo;

pub use bookmark::Entity as Bookmark;
pub use task::Entity as Task;
pub use todo::Entity as Todo;
