mod context;
pub mod publish;

pub use publish::run_publish;
