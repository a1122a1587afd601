use super::SAMPLE;
use crate::gameboy::category::Category;
use crate::{parse_document, ExtractError};
use pretty_assertions::assert_eq;

fn brief(extraction: &crate::gameboy::result::Extraction) -> Vec<(&str, (&str, &str))> {
    extraction
        .tables
        .brief
        .keys()
        .map(|opcode| (opcode.as_str(), extraction.brief(opcode).unwrap()))
        .collect()
}

#[test]
fn single_and_prefixed_opcodes() {
    crate::setup_logger();
    let document = "3.3.1. 8-bit Loads\n1. LD r,r\nOpcodes:\nLD A,B 7F 8\nLD A,(HL+) CB 36 8";
    let extraction = parse_document(document).unwrap();

    assert_eq!(
        brief(&extraction),
        vec![
            ("7F", ("8-bit Loads", "LD r,r")),
            ("CB 36", ("8-bit Loads", "LD r,r")),
        ]
    );
    let record = extraction.full("CB 36").unwrap();
    assert_eq!(
        record.opcodes.as_deref(),
        Some("LD A,B 7F 8\nLD A,(HL+) CB 36 8")
    );
    assert_eq!(extraction.full("7F"), Some(record));
}

#[test]
fn description_lines_joined() {
    let document = "3.3.1. 8-Bit Loads\n1. LD nn,n\nDescription:   Put value\n  nn into n.   \nOpcodes:\nLD B,n 06 8";
    let extraction = parse_document(document).unwrap();
    let record = extraction.full("06").unwrap();
    assert_eq!(
        record.description.as_deref(),
        Some("Put value   nn into n.")
    );
}

#[test]
fn empty_document() {
    for document in ["", "\n\n", "   "] {
        let extraction = parse_document(document).unwrap();
        assert!(extraction.tables.brief.is_empty());
        assert!(extraction.tables.full.is_empty());
        assert!(extraction.tree.sections().is_empty());
    }
}

#[test]
fn sample_tree() {
    crate::setup_logger();
    let extraction = parse_document(SAMPLE).unwrap();
    let tree = &extraction.tree;

    let titles = tree
        .sections()
        .iter()
        .map(|section| section.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["8-Bit Loads", "Rotates & Shifts"]);

    let loads = tree.subsection("8-Bit Loads", "LD nn,n").unwrap();
    assert_eq!(loads.description.as_deref(), Some("Put value nn into n."));
    assert_eq!(
        loads.use_with.as_deref(),
        Some("nn = B,C,D,E,H,L,BC,DE,HL,SP n = 8 bit immediate value")
    );
    assert_eq!(
        loads.opcodes.as_deref(),
        Some("Instruction Parameters Opcode Cycles\nLD B,n 06 8\nLD C,n 0E 8\nLD D,n 16 8")
    );
    assert_eq!(loads.flags_affected, None);

    let rlca = tree.subsection("Rotates & Shifts", "RLCA").unwrap();
    assert_eq!(
        rlca.flags_affected.as_deref(),
        Some("Z - Set if result is zero. N - Reset.")
    );
    assert_eq!(rlca.use_with, None);

    let rlc = tree.subsection("Rotates & Shifts", "RLC n").unwrap();
    let keys = rlc.opcode_keys.iter().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(keys, vec!["CB 00", "CB 06", "CB 07", "Opcode"]);
}

#[test]
fn sample_tables_agree() {
    let extraction = parse_document(SAMPLE).unwrap();
    let brief = &extraction.tables.brief;
    let full = &extraction.tables.full;

    assert_eq!(
        brief.keys().collect::<Vec<_>>(),
        full.keys().collect::<Vec<_>>()
    );
    assert_eq!(full.len(), 11);
    for (opcode, (section, subsection)) in brief {
        let record = extraction.full(opcode).unwrap();
        assert_eq!(&record.section, section);
        assert_eq!(&record.title, subsection);
        assert!(record.opcode_keys.contains(opcode));
    }
    assert_eq!(extraction.brief("CB 07"), Some(("Rotates & Shifts", "RLC n")));
    assert_eq!(extraction.brief("7E"), Some(("8-Bit Loads", "LD r1,r2")));
}

#[test]
fn parsing_is_deterministic() {
    let first = parse_document(SAMPLE).unwrap();
    let second = parse_document(SAMPLE).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        crate::gameboy::store::to_json(&first).unwrap(),
        crate::gameboy::store::to_json(&second).unwrap()
    );
}

#[test]
fn duplicate_opcode_last_wins() {
    let document = "\
1.1.1. Misc
1. NOP
Opcodes:
NOP -/- 00 4
2. ALSO NOP
Opcodes:
NOP -/- 00 4
";
    let extraction = parse_document(document).unwrap();
    assert_eq!(extraction.brief("00"), Some(("Misc", "ALSO NOP")));
    assert_eq!(extraction.full("00").unwrap().title, "ALSO NOP");
    // 먼저 나온 서브섹션도 자기가 선언한 옵코드는 가지고 있음
    let first = extraction.tree.subsection("Misc", "NOP").unwrap();
    assert!(first.opcode_keys.contains("00"));
}

#[test]
fn column_header_row_is_indexed() {
    // 열 제목 행도 4칸이라 옵코드 키 "Opcode"가 된다
    let extraction = parse_document(SAMPLE).unwrap();
    assert_eq!(extraction.brief("Opcode"), Some(("Rotates & Shifts", "RLC n")));
}

#[test]
fn malformed_rows_skipped() {
    let document = "\
1.1.1. Misc
1. NOP
Opcodes:
NOP 00 4
NOP -/- 00 4

this row has far too many tokens in it
";
    let extraction = parse_document(document).unwrap();
    assert_eq!(
        extraction.tables.full.keys().collect::<Vec<_>>(),
        vec!["00"]
    );
    let record = extraction.full("00").unwrap();
    assert!(record
        .opcodes
        .as_deref()
        .unwrap()
        .ends_with("this row has far too many tokens in it"));
}

#[test]
fn fields_after_opcodes_visible_in_full_table() {
    let document = "\
1.1.1. Misc
1. NOP
Opcodes:
NOP -/- 00 4
Flags affected:
None.
";
    let extraction = parse_document(document).unwrap();
    assert_eq!(
        extraction.full("00").unwrap().flags_affected.as_deref(),
        Some("None.")
    );
}

#[test]
fn stale_target_across_sections() {
    // 새 섹션 뒤에 서브섹션 없이 필드가 오면 이전 섹션의 마지막 서브섹션에 기록된다
    let document = "\
1.1.1. First
1. A
Description:
first
1.1.2. Second
Description:
overwritten
Opcodes:
X Y 10 4
";
    let extraction = parse_document(document).unwrap();
    let a = extraction.tree.subsection("First", "A").unwrap();
    assert_eq!(a.description.as_deref(), Some("overwritten"));
    assert!(a.opcode_keys.contains("10"));
    assert_eq!(extraction.brief("10"), Some(("Second", "A")));
    assert!(extraction
        .tree
        .section("Second")
        .unwrap()
        .subsections
        .is_empty());
}

#[test]
fn duplicate_section_merges() {
    let document = "\
1.1.1. Loads
1. A
Opcodes:
X Y 01 4
1.1.2. Jumps
1. J
Opcodes:
X Y 02 4
1.1.1. Loads
2. B
Opcodes:
X Y 03 4
";
    let extraction = parse_document(document).unwrap();
    let sections = extraction.tree.sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].subsections.len(), 2);
    assert!(extraction.tree.subsection("Loads", "A").is_some());
    assert!(extraction.tree.subsection("Loads", "B").is_some());
    assert_eq!(extraction.brief("03"), Some(("Loads", "B")));
}

#[test]
fn duplicate_subsection_replaced_in_tree() {
    let document = "\
1.1.1. Loads
1. A
Description:
old
Opcodes:
X Y 01 4
1. A
Description:
new
";
    let extraction = parse_document(document).unwrap();
    let section = extraction.tree.section("Loads").unwrap();
    assert_eq!(section.subsections.len(), 1);
    let a = extraction.tree.subsection("Loads", "A").unwrap();
    assert_eq!(a.description.as_deref(), Some("new"));
    // 테이블은 기존 레코드를 가리킨다
    assert_eq!(
        extraction.full("01").unwrap().description.as_deref(),
        Some("old")
    );
}

#[test]
fn field_before_subsection_fails() {
    let error = parse_document("1.1.1. Loads\nDescription:\ntext").unwrap_err();
    assert!(matches!(
        error,
        ExtractError::FieldBeforeSubsection {
            category: Category::Description,
            line: 1
        }
    ));
}

#[test]
fn subsection_before_section_fails() {
    let error = parse_document("intro\n1. LD nn,n\nOpcodes:\nLD B,n 06 8").unwrap_err();
    assert!(matches!(
        error,
        ExtractError::SubsectionBeforeSection { line: 1 }
    ));
    assert_eq!(error.to_string(), "2번째 줄: 섹션 없이 서브섹션이 나옴");
}

#[test]
fn text_before_first_marker_ignored() {
    let document = "Game Boy CPU Manual\n\n3.3.1. Loads\n1. A\nOpcodes:\nX Y 01 4";
    let extraction = parse_document(document).unwrap();
    assert_eq!(extraction.brief("01"), Some(("Loads", "A")));
}

#[test]
fn markers_built_for_sample() {
    use crate::gameboy::category::get_indices;
    use crate::gameboy::document_lines;
    use crate::gameboy::marker::build_markers;

    let lines = document_lines(SAMPLE);
    let markers = build_markers(&get_indices(&lines), lines.len());
    // 섹션 2, 서브섹션 4, 설명 4, 사용 3, 옵코드 4, 플래그 2 + 문서 끝
    assert_eq!(markers.len(), 20);
    assert_eq!(
        markers.iter().filter(|marker| marker.is_sentinel()).count(),
        1
    );
}
