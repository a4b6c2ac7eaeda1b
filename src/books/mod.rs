//! 성경 66권의 식별 정보 테이블

pub mod registry;
