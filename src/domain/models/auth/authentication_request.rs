/// 인증 미들웨어의 검사 수준
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 유효한 Bearer 토큰만 요구합니다.
    Required,
    /// 토큰의 사용자를 저장소에서 다시 읽어 `is_admin`과 활성 상태를 확인합니다.
    Admin,
}
