//! chapter_header 파서 - `[BookName N]` 헤더 + `N.본문` 절 형식
//!
//! NIV 영어 본문처럼 챕터 헤더 줄이 문맥을 정하고 이후 절 줄이 그 문맥에
//! 붙는 형식입니다. 파싱은 (현재 책, 현재 장) 두 필드짜리 상태 기계로,
//! 새 헤더가 나올 때마다 문맥이 교체됩니다.

use crate::books::registry::resolve_en_name;
use crate::parser::{BookData, Verse, WarnLimiter};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static CHAPTER_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.+?)\s+(\d+)\]$").unwrap());

static VERSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.(.+)$").unwrap());

/// 각주/네임스페이스 표기 줄은 문맥과 무관하게 건너뜀
const SKIP_PREFIX: &str = "ns ";

/// 파일을 읽어 파싱. UTF-8, 깨진 바이트는 대체 문자로 치환
pub fn parse_file(path: &Path) -> Result<BookData, String> {
    let bytes =
        fs::read(path).map_err(|e| format!("파일 읽기 실패 {}: {}", path.display(), e))?;
    let text = String::from_utf8_lossy(&bytes);

    let mut warn = WarnLimiter::new();
    let data = parse_text(&text, &mut warn);
    warn.finish();
    Ok(data)
}

/// 디코딩이 끝난 텍스트를 줄 단위로 파싱
///
/// 헤더 이전의 절 줄은 붙일 문맥이 없으므로 조용히 버립니다. 헤더의
/// 책 이름이 미등록이면 경고하되 장 상태는 갱신하고, 해당 구간의 절은
/// 저장하지 않습니다 (다음 유효한 헤더부터 정상 귀속 재개).
pub fn parse_text(text: &str, warn: &mut WarnLimiter) -> BookData {
    let mut data = BookData::new();

    let mut current_book: Option<&'static str> = None;
    let mut current_chapter: Option<u32> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(SKIP_PREFIX) {
            continue;
        }

        if let Some(caps) = CHAPTER_HEADER_RE.captures(line) {
            let book_name = &caps[1];
            current_book = resolve_en_name(book_name);
            if current_book.is_none() {
                warn.warn(format!("line {}: 알 수 없는 책 이름 '{}'", lineno, book_name));
            }
            current_chapter = caps[2].parse().ok();
            continue;
        }

        if let Some(caps) = VERSE_RE.captures(line) {
            if let (Some(book_id), Some(chapter)) = (current_book, current_chapter) {
                if let Ok(verse) = caps[1].parse::<u32>() {
                    data.entry(book_id)
                        .or_default()
                        .entry(chapter)
                        .or_default()
                        .push(Verse {
                            verse,
                            text: caps[2].trim().to_string(),
                        });
                }
            }
        }
    }

    data
}
