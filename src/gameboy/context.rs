use super::category::Category;
use super::result::{Extraction, InstructionTree, Line, OpcodeTables, SubsectionId};
use crate::ExtractError;
use tracing::{debug, trace, warn};

/// 파싱 한번 동안 쌓이는 상태, 호출마다 새로 만든다.
pub(super) struct ParsingContext<'doc, 'lines> {
    lines: &'lines [Line<'doc>],
    tree: InstructionTree,
    tables: OpcodeTables,
    /// 현재 섹션 (인덱스, 제목)
    section: Option<(usize, String)>,
    /// 현재 서브섹션 제목
    subsection_title: Option<String>,
    /// 필드를 기록할 서브섹션, 서브섹션 마커가 올때만 바뀐다.
    target: Option<SubsectionId>,
}

impl<'doc, 'lines> ParsingContext<'doc, 'lines> {
    pub(super) fn new(lines: &'lines [Line<'doc>]) -> Self {
        Self {
            lines,
            tree: InstructionTree::default(),
            tables: OpcodeTables::default(),
            section: None,
            subsection_title: None,
            target: None,
        }
    }

    /// 마커 라인
    pub(super) fn line(&self, position: usize) -> &'doc str {
        self.lines[position].text
    }

    /// [start, end) 범위의 라인
    pub(super) fn span(&self, start: usize, end: usize) -> &'lines [Line<'doc>] {
        &self.lines[start..end]
    }

    /// 섹션을 새로 시작한다. 같은 제목이 있으면 기존 섹션에 합친다.
    pub(super) fn enter_section(&mut self, title: String) {
        debug!("섹션 : {}", title);
        let index = self.tree.section_or_insert(&title);
        self.section = Some((index, title));
    }

    /// 현재 섹션 아래에 서브섹션을 만들고 필드 기록 대상을 옮긴다.
    pub(super) fn enter_subsection(
        &mut self,
        title: String,
        position: usize,
    ) -> Result<(), ExtractError> {
        let Some((section, _)) = &self.section else {
            return Err(ExtractError::SubsectionBeforeSection { line: position });
        };
        trace!("서브섹션 : {}", title);
        self.target = Some(self.tree.insert_subsection(*section, &title));
        self.subsection_title = Some(title);
        Ok(())
    }

    /// 필드 기록 대상, 없으면 에러
    pub(super) fn target(
        &self,
        category: Category,
        position: usize,
    ) -> Result<SubsectionId, ExtractError> {
        let target = self.target.ok_or(ExtractError::FieldBeforeSubsection {
            category,
            line: position,
        })?;
        // 새 섹션에 서브섹션이 나오기 전이면 이전 섹션의 마지막 서브섹션에 기록됨
        if let Some((_, section)) = &self.section {
            let owner = &self.tree.get(target).section;
            if owner != section {
                warn!(
                    "{}번째 줄: {:?} 필드가 이전 섹션({})의 서브섹션에 기록됨",
                    position + 1,
                    category,
                    owner
                );
            }
        }
        Ok(target)
    }

    pub(super) fn write_field(&mut self, target: SubsectionId, category: Category, text: String) {
        trace!("{} : {}", category.field_name().unwrap_or_default(), text);
        self.tree.get_mut(target).set_field(category, text);
    }

    /// 옵코드 하나를 두 테이블에 등록한다. 같은 옵코드가 이미 있으면 덮어쓴다.
    pub(super) fn register_opcode(&mut self, target: SubsectionId, opcode: String) {
        let section = self
            .section
            .as_ref()
            .map(|(_, title)| title.clone())
            .unwrap_or_default();
        let subsection = self.subsection_title.clone().unwrap_or_default();
        trace!("옵코드 {} -> {} / {}", opcode, section, subsection);

        if let Some(old) = self.tables.full.insert(opcode.clone(), target) {
            if old != target {
                let old = self.tree.get(old);
                debug!(
                    "옵코드 {} 중복, {} / {} 덮어씀",
                    opcode, old.section, old.title
                );
            }
        }
        self.tables.brief.insert(opcode.clone(), (section, subsection));
        self.tree.get_mut(target).opcode_keys.insert(opcode);
    }

    /// 파싱을 종료하고 결과값을 반환한다.
    pub(super) fn done(self) -> Extraction {
        debug!(
            "섹션 {}개, 옵코드 {}개",
            self.tree.sections().len(),
            self.tables.full.len()
        );
        Extraction {
            tree: self.tree,
            tables: self.tables,
        }
    }
}
