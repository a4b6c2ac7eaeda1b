//! 파싱 결과를 출력 문서로 조립하고 파일로 기록

pub mod builder;
pub mod writer;
