//! 비밀번호 해싱 서비스 (bcrypt)

use bcrypt::{hash, verify};
use crate::config::PasswordConfig;
use crate::errors::errors::AppError;

/// bcrypt 해싱/검증
///
/// cost는 [`PasswordConfig`]에서 주입받습니다 (개발 4, 스테이징 10, 운영 12).
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
    /// 같은 cost로 만든 해시. 없는 계정의 로그인도 검증 비용을 치르게 합니다.
    dummy_hash: Option<String>,
}

impl PasswordService {
    pub fn new(config: &PasswordConfig) -> Self {
        let dummy_hash = hash("devora-dummy-password", config.bcrypt_cost)
            .map_err(|e| log::warn!("더미 해시 생성 실패: {}", e))
            .ok();

        Self { cost: config.bcrypt_cost, dummy_hash }
    }

    /// 솔트가 포함된 해시를 생성합니다.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let start = std::time::Instant::now();

        let hashed = hash(password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 평문과 해시가 일치하는지 확인합니다. 손상된 해시는 불일치로 취급합니다.
    pub fn verify(&self, password: &str, hashed: &str) -> bool {
        match verify(password, hashed) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("저장된 비밀번호 해시 검증 실패: {}", e);
                false
            }
        }
    }

    /// 사용자가 없을 때 호출합니다. 실제 검증과 같은 시간이 걸립니다.
    pub fn verify_dummy(&self, password: &str) {
        if let Some(dummy_hash) = &self.dummy_hash {
            let _ = verify(password, dummy_hash);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = PasswordService::new(&PasswordConfig { bcrypt_cost: 4 });

        let hashed = service.hash("correct horse").unwrap();

        assert_ne!(hashed, "correct horse");
        assert!(service.verify("correct horse", &hashed));
        assert!(!service.verify("battery staple", &hashed));
    }

    #[test]
    fn test_hash_is_salted() {
        let service = PasswordService::new(&PasswordConfig { bcrypt_cost: 4 });

        let first = service.hash("same-password").unwrap();
        let second = service.hash("same-password").unwrap();

        assert_ne!(first, second);
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        let service = PasswordService::new(&PasswordConfig { bcrypt_cost: 4 });
        assert!(!service.verify("anything", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_dummy_hash_uses_configured_cost() {
        let service = PasswordService::new(&PasswordConfig { bcrypt_cost: 4 });

        let dummy_hash = service.dummy_hash.clone().unwrap();
        assert!(dummy_hash.starts_with("$2b$04$"));
        assert!(service.verify("devora-dummy-password", &dummy_hash));

        service.verify_dummy("anything");
    }
}
