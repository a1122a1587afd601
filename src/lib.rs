#[path = "gameboy/gameboy.rs"]
pub mod gameboy;
pub mod error;
#[cfg(test)]
mod tests;

pub use error::ExtractError;
pub use gameboy::{document_lines, parse_document, parse_lines, run};

use simplelog::LevelFilter;

/// 기본 입력 문서 경로
pub const INPUT_FILE: &str = "gb_opcodes.txt";
/// 기본 출력 레코드 저장소 경로
pub const OUTPUT_FILE: &str = "lookup.json";
/// cli 로그 레벨
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// 테스트용 로거 설정, 여러번 호출되어도 괜찮다.
#[cfg(test)]
pub(crate) fn setup_logger() {
    let _ = simplelog::SimpleLogger::init(LevelFilter::Trace, simplelog::Config::default());
}
