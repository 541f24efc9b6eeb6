//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 저장 문서 구조와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 컬렉션별 저장 문서 (users, invoices, projects, ...)
//! ├── DTOs          - 요청/응답 본문
//! └── Models        - 인증 컨텍스트, 토큰 클레임, 파생 통계
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`]
//! MongoDB 컬렉션마다 하나의 명시적인 스키마 구조체를 둡니다.
//! 읽기 시 serde가 문서를 검증하므로 필수 필드가 빠진 문서는 `DatabaseError`가 됩니다.
//! 모든 엔티티는 UUID 문자열 `id`로 식별되며 MongoDB의 `_id`는 사용하지 않습니다.
//!
//! ### [`dto`]
//! HTTP 요청 본문(`validator`로 검증)과 응답 본문입니다.
//! 응답 DTO는 비밀번호 해시처럼 외부로 나가면 안 되는 필드를 제거한 투영입니다.
//!
//! ### [`models`]
//! 저장되지 않는 도메인 값 객체입니다. 인증된 사용자 컨텍스트, JWT 클레임,
//! 관리자 대시보드 통계가 여기에 속합니다.

pub mod entities;
pub mod dto;
pub mod models;
