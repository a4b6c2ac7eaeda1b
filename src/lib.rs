pub mod books;
pub mod output;
pub mod parser;

pub use books::registry::{resolve_en_name, resolve_ko_abbr, Testament};
pub use parser::{BookData, ChapterMap, Verse};
