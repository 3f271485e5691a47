pub mod search_actor;

pub use search_actor::{CancelSearchMessage, SearchActor, SubmitSearchMessage};
