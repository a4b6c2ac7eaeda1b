//! 입력 형식별 파서
//!
//! 세 가지 입력 형식을 각각의 파서가 처리하며, 모두 동일한 중간 구조
//! ([`BookData`])를 생성합니다. 인식 불가 줄은 경고로 집계될 뿐 파싱을
//! 중단시키지 않습니다.

pub mod chapter_header;
pub mod easy_ko;
pub mod flat_ko;

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// 절 하나 (절 번호 + 본문)
///
/// 본문이 없는 절(참조만 있는 줄)도 허용됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub verse: u32,
    pub text: String,
}

/// 장 번호 → 절 목록 (장 번호 오름차순 유지)
pub type ChapterMap = BTreeMap<u32, Vec<Verse>>;

/// Book ID → 장 맵. 모든 파서가 생성하는 공통 중간 구조
pub type BookData = HashMap<&'static str, ChapterMap>;

/// 경고 출력 제한 - 처음 5건만 상세 출력, 이후는 집계
///
/// 줄 단위 경고가 수천 건 쏟아지는 입력에서도 로그가 읽을 만하도록
/// 상세 메시지 수를 제한합니다. 집계는 [`WarnLimiter::finish`]에서
/// 한 줄로 출력됩니다.
pub struct WarnLimiter {
    count: usize,
}

impl WarnLimiter {
    const DETAIL_LIMIT: usize = 5;

    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// 경고 1건 기록. 제한 이내면 상세 메시지 출력
    pub fn warn(&mut self, msg: String) {
        self.count += 1;
        if self.count <= Self::DETAIL_LIMIT {
            log::warn!("{}", msg);
        }
    }

    /// 지금까지 기록된 경고 수
    pub fn total(&self) -> usize {
        self.count
    }

    /// 제한을 넘긴 경고가 있으면 집계 한 줄 출력
    pub fn finish(&self) {
        if self.count > Self::DETAIL_LIMIT {
            log::warn!("...외 {}개 추가 경고", self.count - Self::DETAIL_LIMIT);
        }
    }
}

impl Default for WarnLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// 경고 메시지에 넣을 줄 앞부분 (최대 60자)
pub(crate) fn line_preview(line: &str) -> String {
    line.chars().take(60).collect()
}
