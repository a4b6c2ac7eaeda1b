//! 정규화/조립 - 파서 중간 구조를 출력 문서 형태로 변환
//!
//! 장은 오름차순, 절은 절 번호 기준 안정 정렬(동률은 입력 순서 유지)로
//! 배치되어 같은 입력은 항상 같은 출력을 냅니다.

use crate::books::registry::{en_name, ko_name, testament, Testament, BOOK_ORDER};
use crate::parser::{BookData, ChapterMap, Verse};
use serde::Serialize;

/// 권별 JSON 문서 (`{BOOK_ID}.json`)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDoc {
    pub book_id: &'static str,
    pub book_name: &'static str,
    pub chapters: Vec<ChapterDoc>,
}

#[derive(Debug, Serialize)]
pub struct ChapterDoc {
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

/// 번역본 metadata.json 문서
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMeta {
    pub translation_id: String,
    pub books: Vec<BookMeta>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    pub testament: Testament,
    /// 실제 발견된 장 수 (원문에 누락된 장은 세지 않음)
    pub chapters: usize,
}

/// 언어 코드에 따른 표시용 책명. en이면 영어, 그 외는 한글
fn display_name(book_id: &'static str, lang: &str) -> &'static str {
    if lang == "en" {
        en_name(book_id).unwrap_or(book_id)
    } else {
        ko_name(book_id).unwrap_or(book_id)
    }
}

/// 권별 문서 생성. 장 오름차순 + 절 번호 안정 정렬
pub fn build_book_doc(book_id: &'static str, chapters: &ChapterMap, lang: &str) -> BookDoc {
    let chapters = chapters
        .iter()
        .map(|(&chapter, verses)| {
            let mut verses = verses.clone();
            // sort_by_key는 안정 정렬 - 같은 절 번호는 입력 순서 유지
            verses.sort_by_key(|v| v.verse);
            ChapterDoc { chapter, verses }
        })
        .collect();

    BookDoc {
        book_id,
        book_name: display_name(book_id, lang),
        chapters,
    }
}

/// metadata.json 문서 생성
///
/// 정식 순서를 따르되 파싱 데이터에 없는 권은 건너뜁니다.
pub fn build_metadata(translation_id: &str, lang: &str, data: &BookData) -> TranslationMeta {
    let mut books = Vec::new();
    for &book_id in BOOK_ORDER {
        let Some(chapters) = data.get(book_id) else {
            continue;
        };
        books.push(BookMeta {
            id: book_id,
            name: display_name(book_id, lang),
            name_en: en_name(book_id).unwrap_or(book_id),
            testament: testament(book_id).unwrap_or(Testament::Old),
            chapters: chapters.len(),
        });
    }

    TranslationMeta {
        translation_id: translation_id.to_string(),
        books,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn verse(verse: u32, text: &str) -> Verse {
        Verse {
            verse,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_stable_verse_sort() {
        // 입력 (2,"b"), (1,"a"), (2,"a") → 출력 (1,"a"), (2,"b"), (2,"a")
        let mut chapters = ChapterMap::new();
        chapters.insert(1, vec![verse(2, "b"), verse(1, "a"), verse(2, "a")]);

        let doc = build_book_doc("GEN", &chapters, "ko");
        let sorted = &doc.chapters[0].verses;
        assert_eq!(sorted[0], verse(1, "a"));
        assert_eq!(sorted[1], verse(2, "b"));
        assert_eq!(sorted[2], verse(2, "a"));
    }

    #[test]
    fn test_chapters_ascending() {
        let mut chapters = ChapterMap::new();
        chapters.insert(3, vec![verse(1, "c")]);
        chapters.insert(1, vec![verse(1, "a")]);
        chapters.insert(2, vec![verse(1, "b")]);

        let doc = build_book_doc("GEN", &chapters, "ko");
        let nums: Vec<u32> = doc.chapters.iter().map(|c| c.chapter).collect();
        assert_eq!(nums, vec![1, 2, 3]);
    }

    #[test]
    fn test_display_name_by_lang() {
        let chapters = ChapterMap::from([(1, vec![verse(1, "x")])]);
        assert_eq!(build_book_doc("GEN", &chapters, "ko").book_name, "창세기");
        assert_eq!(build_book_doc("GEN", &chapters, "en").book_name, "Genesis");
        // en이 아닌 언어 코드는 모두 한글 책명
        assert_eq!(build_book_doc("GEN", &chapters, "kr").book_name, "창세기");
    }

    #[test]
    fn test_empty_chapter_preserved() {
        // 절 없이 생성된 장도 빈 배열로 유지
        let mut chapters = ChapterMap::new();
        chapters.insert(1, Vec::new());
        let doc = build_book_doc("GEN", &chapters, "ko");
        assert_eq!(doc.chapters.len(), 1);
        assert!(doc.chapters[0].verses.is_empty());
    }

    #[test]
    fn test_metadata_canonical_order_present_only() {
        let mut data = BookData::new();
        // 정식 순서와 반대로 삽입
        data.insert("REV", ChapterMap::from([(1, vec![verse(1, "계")])]));
        data.insert("GEN", ChapterMap::from([(1, vec![verse(1, "창")])]));

        let meta = build_metadata("KRV", "ko", &data);
        assert_eq!(meta.translation_id, "KRV");
        assert_eq!(meta.books.len(), 2);
        assert_eq!(meta.books[0].id, "GEN"); // 정식 순서 우선
        assert_eq!(meta.books[1].id, "REV");
    }

    #[test]
    fn test_metadata_chapter_count_observed() {
        let mut data = BookData::new();
        let mut chapters = ChapterMap::new();
        // 2장과 7장만 존재 - 기대 장 수가 아닌 실제 발견 수
        chapters.insert(2, vec![verse(1, "a")]);
        chapters.insert(7, vec![verse(1, "b")]);
        data.insert("GEN", chapters);

        let meta = build_metadata("KRV", "ko", &data);
        assert_eq!(meta.books[0].chapters, 2);
    }

    #[test]
    fn test_metadata_fields() {
        let mut data = BookData::new();
        data.insert("MAT", ChapterMap::from([(1, vec![verse(1, "마")])]));

        let meta = build_metadata("NIV", "en", &data);
        let book = &meta.books[0];
        assert_eq!(book.name, "Matthew");
        assert_eq!(book.name_en, "Matthew");
        assert_eq!(book.testament, Testament::New);
    }

    #[test]
    fn test_book_doc_json_shape() {
        let chapters = ChapterMap::from([(1, vec![verse(1, "태초에")])]);
        let doc = build_book_doc("GEN", &chapters, "ko");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["bookId"], "GEN");
        assert_eq!(json["bookName"], "창세기");
        assert_eq!(json["chapters"][0]["chapter"], 1);
        assert_eq!(json["chapters"][0]["verses"][0]["verse"], 1);
        assert_eq!(json["chapters"][0]["verses"][0]["text"], "태초에");
    }

    #[test]
    fn test_metadata_json_shape() {
        let mut data = BookData::new();
        data.insert("GEN", ChapterMap::from([(1, vec![verse(1, "x")])]));
        let meta = build_metadata("KRV", "ko", &data);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["translationId"], "KRV");
        assert_eq!(json["books"][0]["id"], "GEN");
        assert_eq!(json["books"][0]["nameEn"], "Genesis");
        assert_eq!(json["books"][0]["testament"], "old");
        assert_eq!(json["books"][0]["chapters"], 1);
    }

    #[test]
    fn test_empty_map_is_absent() {
        // BTreeMap이 비어 있으면 장 0개 권 - 메타에는 올라가지만
        // 파서가 절 없이 권 항목을 만들지 않으므로 실제로는 발생하지 않음
        let data = BookData::new();
        let meta = build_metadata("KRV", "ko", &data);
        assert!(meta.books.is_empty());
    }
}
