//! 책 식별 레지스트리 - 약어/책명 ↔ Book ID 매핑 테이블
//!
//! 66권의 정식 Book ID와 한글 약어, 한글/영어 책명, 구약/신약 구분을
//! 양방향으로 조회합니다. 모든 테이블은 프로세스 시작 시 한 번 구축되는
//! 읽기 전용 데이터입니다.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 구약/신약 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

/// 한글 약어 → Book ID
///
/// 긴 약어를 앞에 배치하여 우선 매칭합니다 (단순 prefix 충돌 방지).
/// 매칭은 완전 일치이므로 순서 자체가 정답을 바꾸지는 않지만,
/// 테이블 구조상 두 글자 약어가 한 글자 약어보다 먼저 검사됩니다.
pub const KO_ABBR_TO_ID: &[(&str, &str)] = &[
    // 두 글자 이상 먼저
    ("삼상", "1SA"),
    ("삼하", "2SA"),
    ("왕상", "1KI"),
    ("왕하", "2KI"),
    ("대상", "1CH"),
    ("대하", "2CH"),
    ("고전", "1CO"),
    ("고후", "2CO"),
    ("살전", "1TH"),
    ("살후", "2TH"),
    ("딤전", "1TI"),
    ("딤후", "2TI"),
    ("벧전", "1PE"),
    ("벧후", "2PE"),
    ("요일", "1JN"),
    ("요이", "2JN"),
    ("요삼", "3JN"),
    // 구약 - 한 글자
    ("창", "GEN"),
    ("출", "EXO"),
    ("레", "LEV"),
    ("민", "NUM"),
    ("신", "DEU"),
    ("수", "JOS"),
    ("삿", "JDG"),
    ("룻", "RUT"),
    ("스", "EZR"),
    ("느", "NEH"),
    ("에", "EST"),
    ("욥", "JOB"),
    ("시", "PSA"),
    ("잠", "PRO"),
    ("전", "ECC"),
    ("아", "SNG"),
    ("사", "ISA"),
    ("렘", "JER"),
    ("애", "LAM"),
    ("겔", "EZK"),
    ("단", "DAN"),
    ("호", "HOS"),
    ("욜", "JOL"),
    ("암", "AMO"),
    ("옵", "OBA"),
    ("욘", "JON"),
    ("미", "MIC"),
    ("나", "NAH"),
    ("합", "HAB"),
    ("습", "ZEP"),
    ("학", "HAG"),
    ("슥", "ZEC"),
    ("말", "MAL"),
    // 신약 - 한 글자
    ("마", "MAT"),
    ("막", "MRK"),
    ("눅", "LUK"),
    ("요", "JHN"),
    ("행", "ACT"),
    ("롬", "ROM"),
    ("갈", "GAL"),
    ("엡", "EPH"),
    ("빌", "PHP"),
    ("골", "COL"),
    ("딛", "TIT"),
    ("몬", "PHM"),
    ("히", "HEB"),
    ("약", "JAS"),
    ("유", "JUD"),
    ("계", "REV"),
];

/// 정식 Book ID 순서 (구약 39권 + 신약 27권)
pub const BOOK_ORDER: &[&str] = &[
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA",
    "1KI", "2KI", "1CH", "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO",
    "ECC", "SNG", "ISA", "JER", "LAM", "EZK", "DAN", "HOS", "JOL", "AMO",
    "OBA", "JON", "MIC", "NAH", "HAB", "ZEP", "HAG", "ZEC", "MAL",
    "MAT", "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH",
    "PHP", "COL", "1TH", "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS",
    "1PE", "2PE", "1JN", "2JN", "3JN", "JUD", "REV",
];

/// 영어 책명 → Book ID (chapter_header 형식용)
static EN_NAME_TO_ID: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (name, id) in [
        ("Genesis", "GEN"),
        ("Exodus", "EXO"),
        ("Leviticus", "LEV"),
        ("Numbers", "NUM"),
        ("Deuteronomy", "DEU"),
        ("Joshua", "JOS"),
        ("Judges", "JDG"),
        ("Ruth", "RUT"),
        ("1 Samuel", "1SA"),
        ("2 Samuel", "2SA"),
        ("1 Kings", "1KI"),
        ("2 Kings", "2KI"),
        ("1 Chronicles", "1CH"),
        ("2 Chronicles", "2CH"),
        ("Ezra", "EZR"),
        ("Nehemiah", "NEH"),
        ("Esther", "EST"),
        ("Job", "JOB"),
        ("Psalms", "PSA"),
        ("Proverbs", "PRO"),
        ("Ecclesiastes", "ECC"),
        ("Song of Solomon", "SNG"),
        // NIV 등 일부 번역본의 대체 표기
        ("Song of Songs", "SNG"),
        ("Isaiah", "ISA"),
        ("Jeremiah", "JER"),
        ("Lamentations", "LAM"),
        ("Ezekiel", "EZK"),
        ("Daniel", "DAN"),
        ("Hosea", "HOS"),
        ("Joel", "JOL"),
        ("Amos", "AMO"),
        ("Obadiah", "OBA"),
        ("Jonah", "JON"),
        ("Micah", "MIC"),
        ("Nahum", "NAH"),
        ("Habakkuk", "HAB"),
        ("Zephaniah", "ZEP"),
        ("Haggai", "HAG"),
        ("Zechariah", "ZEC"),
        ("Malachi", "MAL"),
        ("Matthew", "MAT"),
        ("Mark", "MRK"),
        ("Luke", "LUK"),
        ("John", "JHN"),
        ("Acts", "ACT"),
        ("Romans", "ROM"),
        ("1 Corinthians", "1CO"),
        ("2 Corinthians", "2CO"),
        ("Galatians", "GAL"),
        ("Ephesians", "EPH"),
        ("Philippians", "PHP"),
        ("Colossians", "COL"),
        ("1 Thessalonians", "1TH"),
        ("2 Thessalonians", "2TH"),
        ("1 Timothy", "1TI"),
        ("2 Timothy", "2TI"),
        ("Titus", "TIT"),
        ("Philemon", "PHM"),
        ("Hebrews", "HEB"),
        ("James", "JAS"),
        ("1 Peter", "1PE"),
        ("2 Peter", "2PE"),
        ("1 John", "1JN"),
        ("2 John", "2JN"),
        ("3 John", "3JN"),
        ("Jude", "JUD"),
        ("Revelation", "REV"),
    ] {
        map.insert(name, id);
    }
    map
});

/// Book ID → (한글 책명, 구약/신약)
static BOOK_ID_TO_KO: LazyLock<HashMap<&'static str, (&'static str, Testament)>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();
        for (id, name, testament) in [
            ("GEN", "창세기", Testament::Old),
            ("EXO", "출애굽기", Testament::Old),
            ("LEV", "레위기", Testament::Old),
            ("NUM", "민수기", Testament::Old),
            ("DEU", "신명기", Testament::Old),
            ("JOS", "여호수아", Testament::Old),
            ("JDG", "사사기", Testament::Old),
            ("RUT", "룻기", Testament::Old),
            ("1SA", "사무엘상", Testament::Old),
            ("2SA", "사무엘하", Testament::Old),
            ("1KI", "열왕기상", Testament::Old),
            ("2KI", "열왕기하", Testament::Old),
            ("1CH", "역대상", Testament::Old),
            ("2CH", "역대하", Testament::Old),
            ("EZR", "에스라", Testament::Old),
            ("NEH", "느헤미야", Testament::Old),
            ("EST", "에스더", Testament::Old),
            ("JOB", "욥기", Testament::Old),
            ("PSA", "시편", Testament::Old),
            ("PRO", "잠언", Testament::Old),
            ("ECC", "전도서", Testament::Old),
            ("SNG", "아가", Testament::Old),
            ("ISA", "이사야", Testament::Old),
            ("JER", "예레미야", Testament::Old),
            ("LAM", "예레미야애가", Testament::Old),
            ("EZK", "에스겔", Testament::Old),
            ("DAN", "다니엘", Testament::Old),
            ("HOS", "호세아", Testament::Old),
            ("JOL", "요엘", Testament::Old),
            ("AMO", "아모스", Testament::Old),
            ("OBA", "오바댜", Testament::Old),
            ("JON", "요나", Testament::Old),
            ("MIC", "미가", Testament::Old),
            ("NAH", "나훔", Testament::Old),
            ("HAB", "하박국", Testament::Old),
            ("ZEP", "스바냐", Testament::Old),
            ("HAG", "학개", Testament::Old),
            ("ZEC", "스가랴", Testament::Old),
            ("MAL", "말라기", Testament::Old),
            ("MAT", "마태복음", Testament::New),
            ("MRK", "마가복음", Testament::New),
            ("LUK", "누가복음", Testament::New),
            ("JHN", "요한복음", Testament::New),
            ("ACT", "사도행전", Testament::New),
            ("ROM", "로마서", Testament::New),
            ("1CO", "고린도전서", Testament::New),
            ("2CO", "고린도후서", Testament::New),
            ("GAL", "갈라디아서", Testament::New),
            ("EPH", "에베소서", Testament::New),
            ("PHP", "빌립보서", Testament::New),
            ("COL", "골로새서", Testament::New),
            ("1TH", "데살로니가전서", Testament::New),
            ("2TH", "데살로니가후서", Testament::New),
            ("1TI", "디모데전서", Testament::New),
            ("2TI", "디모데후서", Testament::New),
            ("TIT", "디도서", Testament::New),
            ("PHM", "빌레몬서", Testament::New),
            ("HEB", "히브리서", Testament::New),
            ("JAS", "야고보서", Testament::New),
            ("1PE", "베드로전서", Testament::New),
            ("2PE", "베드로후서", Testament::New),
            ("1JN", "요한일서", Testament::New),
            ("2JN", "요한이서", Testament::New),
            ("3JN", "요한삼서", Testament::New),
            ("JUD", "유다서", Testament::New),
            ("REV", "요한계시록", Testament::New),
        ] {
            map.insert(id, (name, testament));
        }
        map
    });

/// Book ID → 영어 책명 (metadata 생성용)
static BOOK_ID_TO_EN: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (id, name) in [
        ("GEN", "Genesis"),
        ("EXO", "Exodus"),
        ("LEV", "Leviticus"),
        ("NUM", "Numbers"),
        ("DEU", "Deuteronomy"),
        ("JOS", "Joshua"),
        ("JDG", "Judges"),
        ("RUT", "Ruth"),
        ("1SA", "1 Samuel"),
        ("2SA", "2 Samuel"),
        ("1KI", "1 Kings"),
        ("2KI", "2 Kings"),
        ("1CH", "1 Chronicles"),
        ("2CH", "2 Chronicles"),
        ("EZR", "Ezra"),
        ("NEH", "Nehemiah"),
        ("EST", "Esther"),
        ("JOB", "Job"),
        ("PSA", "Psalms"),
        ("PRO", "Proverbs"),
        ("ECC", "Ecclesiastes"),
        ("SNG", "Song of Solomon"),
        ("ISA", "Isaiah"),
        ("JER", "Jeremiah"),
        ("LAM", "Lamentations"),
        ("EZK", "Ezekiel"),
        ("DAN", "Daniel"),
        ("HOS", "Hosea"),
        ("JOL", "Joel"),
        ("AMO", "Amos"),
        ("OBA", "Obadiah"),
        ("JON", "Jonah"),
        ("MIC", "Micah"),
        ("NAH", "Nahum"),
        ("HAB", "Habakkuk"),
        ("ZEP", "Zephaniah"),
        ("HAG", "Haggai"),
        ("ZEC", "Zechariah"),
        ("MAL", "Malachi"),
        ("MAT", "Matthew"),
        ("MRK", "Mark"),
        ("LUK", "Luke"),
        ("JHN", "John"),
        ("ACT", "Acts"),
        ("ROM", "Romans"),
        ("1CO", "1 Corinthians"),
        ("2CO", "2 Corinthians"),
        ("GAL", "Galatians"),
        ("EPH", "Ephesians"),
        ("PHP", "Philippians"),
        ("COL", "Colossians"),
        ("1TH", "1 Thessalonians"),
        ("2TH", "2 Thessalonians"),
        ("1TI", "1 Timothy"),
        ("2TI", "2 Timothy"),
        ("TIT", "Titus"),
        ("PHM", "Philemon"),
        ("HEB", "Hebrews"),
        ("JAS", "James"),
        ("1PE", "1 Peter"),
        ("2PE", "2 Peter"),
        ("1JN", "1 John"),
        ("2JN", "2 John"),
        ("3JN", "3 John"),
        ("JUD", "Jude"),
        ("REV", "Revelation"),
    ] {
        map.insert(id, name);
    }
    map
});

/// 한글 약어를 Book ID로 변환 (긴 약어부터 완전 일치 검사)
///
/// 테이블에 없는 약어는 None 반환
pub fn resolve_ko_abbr(raw: &str) -> Option<&'static str> {
    KO_ABBR_TO_ID
        .iter()
        .find(|(abbr, _)| *abbr == raw)
        .map(|(_, id)| *id)
}

/// 영어 책명을 Book ID로 변환 (완전 일치, 대소문자 구분)
pub fn resolve_en_name(name: &str) -> Option<&'static str> {
    EN_NAME_TO_ID.get(name).copied()
}

/// Book ID의 한글 책명
pub fn ko_name(book_id: &str) -> Option<&'static str> {
    BOOK_ID_TO_KO.get(book_id).map(|(name, _)| *name)
}

/// Book ID의 영어 책명
pub fn en_name(book_id: &str) -> Option<&'static str> {
    BOOK_ID_TO_EN.get(book_id).copied()
}

/// Book ID의 구약/신약 구분
pub fn testament(book_id: &str) -> Option<Testament> {
    BOOK_ID_TO_KO.get(book_id).map(|(_, t)| *t)
}
