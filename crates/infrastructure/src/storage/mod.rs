pub mod fs_store;
pub mod token;

pub use fs_store::FsRuleFileStore;
pub use token::load_token;
