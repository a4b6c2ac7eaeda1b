//! flat_ko 파서 - 한 파일에 전체 성경, `{약어}{장}:{절} {본문}` 패턴
//!
//! 개역개정/개역한글판처럼 줄마다 한글 약어 참조가 붙는 단일 파일
//! 형식을 처리합니다.

use crate::books::registry::resolve_ko_abbr;
use crate::parser::{line_preview, BookData, Verse, WarnLimiter};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// 텍스트가 없는 절(참조만 있는 줄)도 허용
static FLAT_KO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([가-힣]+)(\d+):(\d+)\s*(.*)$").unwrap());

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
/// 패턴 불일치 줄과 미등록 약어는 경고 후 건너뜁니다.
pub fn parse_text(text: &str, warn: &mut WarnLimiter) -> BookData {
    let mut data = BookData::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(caps) = FLAT_KO_RE.captures(line) else {
            warn.warn(format!("line {}: 패턴 불일치 - {}", lineno, line_preview(line)));
            continue;
        };

        let raw_abbr = &caps[1];
        let Some(book_id) = resolve_ko_abbr(raw_abbr) else {
            warn.warn(format!("line {}: 알 수 없는 약어 '{}'", lineno, raw_abbr));
            continue;
        };

        // 정규식이 자릿수를 제한하지 않으므로 u32 범위 초과도 패턴 불일치로 처리
        let (Ok(chapter), Ok(verse)) = (caps[2].parse::<u32>(), caps[3].parse::<u32>()) else {
            warn.warn(format!("line {}: 장/절 번호 범위 초과 - {}", lineno, line_preview(line)));
            continue;
        };

        data.entry(book_id)
            .or_default()
            .entry(chapter)
            .or_default()
            .push(Verse {
                verse,
                text: caps[4].trim().to_string(),
            });
    }

    data
}
