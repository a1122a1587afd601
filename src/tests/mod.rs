mod parse;

/// 게임보이 cpu 매뉴얼 옵코드 장 일부
const SAMPLE: &str = include_str!("gb_opcodes_sample.txt");
