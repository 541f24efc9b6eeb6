//! 컬렉션별 저장 엔티티

pub mod users;
pub mod billing;
pub mod workspace;
pub mod settings;

pub use users::*;
pub use billing::*;
pub use workspace::*;
pub use settings::*;
