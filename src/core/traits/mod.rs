pub mod repository;

pub use repository::ReadRepository;
