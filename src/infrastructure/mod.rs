//! Infrastructure layer - External I/O and persistence

pub mod codec;
pub mod config;
pub mod repository;
pub mod storage;
pub mod telemetry;

pub use codec::PostCodec;
pub use config::{Config, ConfigOverrides};
pub use repository::PostRepository;
pub use storage::{FileStorage, FileSystemStorage};
