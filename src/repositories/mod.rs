//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 컬렉션마다 `async-trait` 기반의 저장소 trait을 두고, 두 가지 구현을 제공합니다.
//!
//! - MongoDB 구현 (`UserRepository`, `InvoiceRepository`, ...) - 운영 환경
//! - [`memory::MemoryStore`] - 테스트와 `STORE_BACKEND=memory` 로컬 실행
//!
//! 서비스 계층은 `Arc<dyn UserStore>`처럼 trait 객체만 알고 있으므로
//! 저장소 구현을 교체해도 서비스 코드는 바뀌지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod billing;
pub mod workspace;
pub mod settings;
pub mod memory;

pub use users::user_repo::{UserRepository, UserStore};
pub use billing::invoice_repo::{InvoiceRepository, InvoiceStore};
pub use workspace::project_repo::{ProjectRepository, ProjectStore};
pub use workspace::conversation_repo::{ConversationRepository, ConversationStore};
pub use settings::settings_repo::{SettingsRepository, SettingsStore};
pub use settings::system_config_repo::{ConfigStore, SystemConfigRepository};
pub use memory::MemoryStore;

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::error::{ErrorKind, WriteFailure};

/// MongoDB 유니크 인덱스 위반 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반(E11000) 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

/// `$set` 등 수동 업데이트 문서에 쓰는 타임스탬프 문자열.
/// 엔티티 직렬화와 같은 RFC 3339 형식을 사용합니다.
pub(crate) fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
