//! easy_ko 파서 - 권별 파일 디렉토리, EUC-KR 인코딩
//!
//! 쉬운성경처럼 구약/신약 하위 디렉토리에 권별 .txt 파일이 흩어져 있는
//! 형식입니다. 줄 문법은 flat_ko와 같고 인코딩만 EUC-KR입니다.

use crate::parser::{flat_ko, BookData, WarnLimiter};
use encoding_rs::EUC_KR;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 디렉토리 아래 모든 .txt 파일을 경로 사전순으로 파싱해 병합
///
/// 매칭되는 파일이 없으면 에러 로그 후 빈 결과를 반환합니다
/// (상위에서 "0권 파싱" 규칙에 따라 치명적 오류로 처리됨).
pub fn parse_dir(dir: &Path) -> Result<BookData, String> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    let mut data = BookData::new();
    if files.is_empty() {
        log::error!("{} 에서 .txt 파일을 찾을 수 없습니다.", dir.display());
        return Ok(data);
    }

    let mut warn = WarnLimiter::new();
    for file in &files {
        let bytes =
            fs::read(file).map_err(|e| format!("파일 읽기 실패 {}: {}", file.display(), e))?;
        // 디코딩 불가 바이트는 대체 문자로 치환 (중단하지 않음)
        let (text, _, _) = EUC_KR.decode(&bytes);
        let file_data = flat_ko::parse_text(&text, &mut warn);
        merge(&mut data, file_data);
    }
    warn.finish();

    Ok(data)
}

/// 파일별 파싱 결과를 누적. 같은 책/장의 절은 파일 처리 순서대로 이어붙임
pub(crate) fn merge(into: &mut BookData, from: BookData) {
    for (book_id, chapters) in from {
        let book = into.entry(book_id).or_default();
        for (chapter, verses) in chapters {
            book.entry(chapter).or_default().extend(verses);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, warn: &mut WarnLimiter) -> BookData {
        flat_ko::parse_text(text, warn)
    }

    #[test]
    fn test_merge_concatenates_in_order() {
        let mut warn = WarnLimiter::new();
        let mut data = parse("창1:1 첫 파일\n", &mut warn);
        let second = parse("창1:2 둘째 파일\n창2:1 새 장\n", &mut warn);
        merge(&mut data, second);

        assert_eq!(data["GEN"][&1].len(), 2);
        assert_eq!(data["GEN"][&1][0].text, "첫 파일");
        assert_eq!(data["GEN"][&1][1].text, "둘째 파일");
        assert_eq!(data["GEN"][&2].len(), 1);
    }

    #[test]
    fn test_merge_distinct_books() {
        let mut warn = WarnLimiter::new();
        let mut data = parse("창1:1 창세기\n", &mut warn);
        merge(&mut data, parse("계1:1 계시록\n", &mut warn));
        assert_eq!(data.len(), 2);
        assert!(data.contains_key("GEN"));
        assert!(data.contains_key("REV"));
    }

    #[test]
    fn test_euckr_decoding() {
        // "한글" EUC-KR 바이트: C7 D1 B1 DB
        let (decoded, _, _) = EUC_KR.decode(&[0xC7, 0xD1, 0xB1, 0xDB]);
        assert_eq!(decoded, "한글");

        // 한 줄 전체를 EUC-KR로 왕복시켜 파싱까지 확인
        let (bytes, _, _) = EUC_KR.encode("창1:1 한글 본문");
        let (text, _, _) = EUC_KR.decode(&bytes);
        let mut warn = WarnLimiter::new();
        let data = parse(&text, &mut warn);
        assert_eq!(data["GEN"][&1][0].text, "한글 본문");
    }

    #[test]
    fn test_empty_dir_returns_empty() {
        let dir = std::env::temp_dir().join(format!("easy_ko_empty_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let data = parse_dir(&dir).unwrap();
        assert!(data.is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_parse_dir_recursive_sorted() {
        let root = std::env::temp_dir().join(format!("easy_ko_dir_{}", std::process::id()));
        let sub_a = root.join("01_구약");
        let sub_b = root.join("02_신약");
        fs::create_dir_all(&sub_a).unwrap();
        fs::create_dir_all(&sub_b).unwrap();

        // EUC-KR로 기록 (실제 입력과 동일한 인코딩)
        let (gen_bytes, _, _) = EUC_KR.encode("창1:1 태초에\n창1:2 땅이\n");
        let (rev_bytes, _, _) = EUC_KR.encode("계1:1 계시라\n");
        fs::write(sub_a.join("01창세기.txt"), &gen_bytes).unwrap();
        fs::write(sub_b.join("66요한계시록.txt"), &rev_bytes).unwrap();
        // 확장자가 다른 파일은 무시
        fs::write(root.join("README.md"), "무시됨").unwrap();

        let data = parse_dir(&root).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data["GEN"][&1].len(), 2);
        assert_eq!(data["REV"][&1][0].text, "계시라");

        fs::remove_dir_all(&root).unwrap();
    }
}
