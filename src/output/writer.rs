//! 변환 결과 파일 출력 - metadata.json, 권별 JSON, translations.json
//!
//! translations.json은 여러 번역본이 공유하는 목록으로, 실행마다 전체를
//! 읽어 id 기준 upsert 후 다시 기록합니다. 동시 실행 보호는 없습니다
//! (마지막 기록이 이김).

use crate::books::registry::BOOK_ORDER;
use crate::output::builder::{build_book_doc, build_metadata};
use crate::parser::BookData;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// translations.json 항목 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub id: String,
    pub name: String,
    pub language: String,
    pub direction: String,
}

impl TranslationEntry {
    pub fn new(id: &str, name: &str, language: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            language: language.to_string(),
            // 지원 언어(한국어/영어)는 모두 좌→우
            direction: "ltr".to_string(),
        }
    }
}

/// id 기준 upsert. 기존 항목은 제자리 교체, 새 항목은 뒤에 추가
pub fn upsert_translation(list: &mut Vec<TranslationEntry>, entry: TranslationEntry) {
    match list.iter_mut().find(|t| t.id == entry.id) {
        Some(slot) => *slot = entry,
        None => list.push(entry),
    }
}

/// 변환 결과 전체를 출력 디렉토리에 기록
///
/// `out_dir`는 `<출력 루트>/<번역본 ID>` 형태이며, translations.json은
/// 그 부모(출력 루트)에 위치합니다.
pub fn write_outputs(
    out_dir: &Path,
    translation_id: &str,
    translation_name: &str,
    lang: &str,
    data: &BookData,
) -> Result<(), String> {
    fs::create_dir_all(out_dir)
        .map_err(|e| format!("출력 디렉토리 생성 실패 {}: {}", out_dir.display(), e))?;

    // metadata.json
    let metadata = build_metadata(translation_id, lang, data);
    let meta_path = out_dir.join("metadata.json");
    write_json(&meta_path, &metadata)?;
    println!("  → {}  ({}권)", meta_path.display(), metadata.books.len());

    // 권별 JSON (정식 순서대로)
    let mut written = 0;
    for &book_id in BOOK_ORDER {
        let Some(chapters) = data.get(book_id) else {
            continue;
        };
        let book_doc = build_book_doc(book_id, chapters, lang);
        write_json(&out_dir.join(format!("{}.json", book_id)), &book_doc)?;
        written += 1;
    }
    println!("  → {}/*.json  ({}개 파일 생성)", out_dir.display(), written);

    // translations.json 업데이트 (출력 루트에 위치)
    let root = out_dir
        .parent()
        .ok_or_else(|| format!("출력 루트를 찾을 수 없습니다: {}", out_dir.display()))?;
    update_translations(root, TranslationEntry::new(translation_id, translation_name, lang))
}

/// 공유 translations.json을 읽어 upsert 후 전체 재기록
pub fn update_translations(root: &Path, entry: TranslationEntry) -> Result<(), String> {
    let path = root.join("translations.json");
    let mut list: Vec<TranslationEntry> = match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content)
            .map_err(|e| format!("translations.json 파싱 실패: {}", e))?,
        Err(_) => Vec::new(),
    };

    upsert_translation(&mut list, entry);
    write_json(&path, &list)?;
    println!("  → {} 업데이트 완료", path.display());
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("파일 저장 실패 {}: {}", path.display(), e))
}
