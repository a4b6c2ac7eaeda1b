//! bibleconv - 성경 원본 텍스트를 앱 JSON 형식으로 변환
//!
//! ```text
//! # 개역한글판 (단일 UTF-8 파일, 한글약어 형식)
//! bibleconv --format flat-ko --input data/개역한글판.txt --id KRV --name "개역한글"
//!
//! # 쉬운성경 (권별 파일, EUC-KR)
//! bibleconv --format easy-ko --input data/쉬운성경-텍스트 --id EASY --name "쉬운성경"
//!
//! # NIV (영어, [BookName N] 헤더)
//! bibleconv --format niv --input data/NIV-EN.txt --id NIV \
//!   --name "New International Version" --lang en
//! ```

use bibleconv::output::writer::write_outputs;
use bibleconv::parser::{chapter_header, easy_ko, flat_ko, BookData};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

/// 입력 파일 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// 한 파일에 전체 성경, UTF-8, `{약어}{장}:{절}` 패턴
    FlatKo,
    /// 권별 파일 디렉토리, EUC-KR, 같은 패턴
    EasyKo,
    /// `[BookName N]` 챕터 헤더 형식 (영어)
    Niv,
}

#[derive(Parser)]
#[command(name = "bibleconv")]
#[command(about = "성경 텍스트 → JSON 변환기")]
struct Args {
    /// 입력 파일 형식
    #[arg(long, value_enum)]
    format: Format,

    /// 입력 파일 또는 디렉토리 경로
    #[arg(long)]
    input: PathBuf,

    /// 번역본 ID (예: KRV, NIV)
    #[arg(long)]
    id: String,

    /// 번역본 이름 (예: 개역한글)
    #[arg(long)]
    name: String,

    /// 언어 코드
    #[arg(long, default_value = "ko")]
    lang: String,

    /// 출력 루트 디렉토리
    #[arg(long, default_value = "public/bibles")]
    out: PathBuf,
}

fn run(args: &Args) -> Result<(), String> {
    let out_dir = args.out.join(&args.id);

    println!("\n[{}] {} 변환 시작", args.id, args.name);
    println!("  입력: {}", args.input.display());
    println!("  출력: {}\n", out_dir.display());

    let data: BookData = match args.format {
        Format::FlatKo => {
            if !args.input.is_file() {
                return Err(format!("파일을 찾을 수 없습니다: {}", args.input.display()));
            }
            flat_ko::parse_file(&args.input)?
        }
        Format::EasyKo => {
            if !args.input.is_dir() {
                return Err(format!("디렉토리를 찾을 수 없습니다: {}", args.input.display()));
            }
            easy_ko::parse_dir(&args.input)?
        }
        Format::Niv => {
            if !args.input.is_file() {
                return Err(format!("파일을 찾을 수 없습니다: {}", args.input.display()));
            }
            chapter_header::parse_file(&args.input)?
        }
    };

    if data.is_empty() {
        return Err("데이터를 파싱하지 못했습니다.".to_string());
    }
    println!("  파싱 완료: {}권 발견\n", data.len());

    write_outputs(&out_dir, &args.id, &args.name, &args.lang, &data)?;
    println!("\n변환 완료!");
    Ok(())
}

fn main() {
    // 로깅 초기화 (기본: warn 이상 출력 - 줄 단위 파싱 경고 포함)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("[ERROR] {}", e);
        process::exit(1);
    }
}
