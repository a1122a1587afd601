use opcode_doc_extractor::{INPUT_FILE, LOG_LEVEL, OUTPUT_FILE};
use simplelog::{Config, SimpleLogger};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    // 로거가 이미 있으면 그대로 사용
    let _ = SimpleLogger::init(LOG_LEVEL, Config::default());

    match opcode_doc_extractor::run(INPUT_FILE, OUTPUT_FILE) {
        Ok(_) => {
            println!("Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
