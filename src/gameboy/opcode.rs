use super::context::ParsingContext;
use super::result::{Line, SubsectionId};
use tracing::trace;

/// 옵코드 테이블 행에서 옵코드 키를 뽑는다.
///
/// `RLC A CB 07 8` 처럼 5칸이면 prefix를 포함한 2바이트 옵코드, `LD A,B 78 4` 처럼 4칸이면 1바이트 옵코드.
/// 그 외 칸 수는 형식이 맞지 않는 행이라 무시한다.
pub fn parse_opcode_row(line: &str) -> Option<String> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    match tokens.as_slice() {
        [_, _, prefix, code, _] => Some(format!("{prefix} {code}")),
        [_, _, code, _] => Some((*code).to_owned()),
        _ => None,
    }
}

/// Opcodes 블럭의 데이터 행들을 현재 서브섹션으로 등록한다.
pub(super) fn index_opcodes(context: &mut ParsingContext, target: SubsectionId, rows: &[Line]) {
    for row in rows {
        match parse_opcode_row(row.text) {
            Some(opcode) => context.register_opcode(target, opcode),
            None => trace!("{}번째 줄 옵코드 행 아님 : {}", row.position + 1, row.text),
        }
    }
}
