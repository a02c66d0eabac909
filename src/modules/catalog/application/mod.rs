pub mod search_session;

pub use search_session::SearchSession;
