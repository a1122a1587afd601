use super::category::Category;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// 문서의 한 줄, 위치는 0부터 시작한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'doc> {
    pub position: usize,
    pub text: &'doc str,
}

/// 트리가 소유한 서브섹션 레코드를 가리키는 핸들
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubsectionId(pub(crate) usize);

/// 인스트럭션 묶음 하나에 대한 설명
///
/// 레코드 저장소에는 네 필드만 기록되고, 제목과 옵코드 목록은 메모리에만 남는다.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
    #[serde(skip)]
    pub section: String,
    #[serde(skip)]
    pub title: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Use with", skip_serializing_if = "Option::is_none")]
    pub use_with: Option<String>,
    #[serde(rename = "Opcodes", skip_serializing_if = "Option::is_none")]
    pub opcodes: Option<String>,
    #[serde(rename = "Flags affected", skip_serializing_if = "Option::is_none")]
    pub flags_affected: Option<String>,
    #[serde(skip)]
    pub opcode_keys: BTreeSet<String>,
}

impl Subsection {
    pub(crate) fn new(section: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub(crate) fn set_field(&mut self, category: Category, text: String) {
        match category {
            Category::Description => self.description = Some(text),
            Category::UseWith => self.use_with = Some(text),
            Category::FlagsAffected => self.flags_affected = Some(text),
            Category::Opcodes => self.opcodes = Some(text),
            _ => unreachable!("{category:?}는 필드가 아님"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    /// 문서 순서
    pub subsections: Vec<SubsectionId>,
}

/// 섹션 -> 서브섹션 트리, 서브섹션 레코드는 arena에 저장한다.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstructionTree {
    sections: Vec<Section>,
    arena: Vec<Subsection>,
}

impl InstructionTree {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    pub fn get(&self, id: SubsectionId) -> &Subsection {
        &self.arena[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: SubsectionId) -> &mut Subsection {
        &mut self.arena[id.0]
    }

    /// 섹션 아래 제목이 일치하는 서브섹션
    pub fn subsection(&self, section: &str, title: &str) -> Option<&Subsection> {
        self.section(section)?
            .subsections
            .iter()
            .map(|&id| self.get(id))
            .find(|subsection| subsection.title == title)
    }

    /// 섹션을 찾거나 새로 만든다. 반환값은 섹션 인덱스
    pub(crate) fn section_or_insert(&mut self, title: &str) -> usize {
        match self.sections.iter().position(|section| section.title == title) {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    title: title.to_owned(),
                    subsections: Vec::new(),
                });
                self.sections.len() - 1
            }
        }
    }

    /// 섹션 아래에 새 서브섹션을 만든다. 같은 제목이 이미 있으면 트리에서는 새 레코드로 바꾼다.
    pub(crate) fn insert_subsection(&mut self, section: usize, title: &str) -> SubsectionId {
        let id = SubsectionId(self.arena.len());
        self.arena
            .push(Subsection::new(self.sections[section].title.as_str(), title));

        let arena = &self.arena;
        let section = &mut self.sections[section];
        match section
            .subsections
            .iter()
            .position(|old| arena[old.0].title == title)
        {
            Some(index) => section.subsections[index] = id,
            None => section.subsections.push(id),
        }
        id
    }
}

/// 옵코드 룩업 테이블
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OpcodeTables {
    /// 옵코드 -> (섹션 제목, 서브섹션 제목)
    pub brief: BTreeMap<String, (String, String)>,
    /// 옵코드 -> 서브섹션 레코드
    pub full: BTreeMap<String, SubsectionId>,
}

/// 한번의 파싱 결과
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub tree: InstructionTree,
    pub tables: OpcodeTables,
}

impl Extraction {
    /// full 테이블의 핸들을 레코드로 풀어준다.
    pub fn full_records(&self) -> BTreeMap<&str, &Subsection> {
        self.tables
            .full
            .iter()
            .map(|(opcode, &id)| (opcode.as_str(), self.tree.get(id)))
            .collect()
    }

    pub fn brief(&self, opcode: &str) -> Option<(&str, &str)> {
        self.tables
            .brief
            .get(opcode)
            .map(|(section, subsection)| (section.as_str(), subsection.as_str()))
    }

    pub fn full(&self, opcode: &str) -> Option<&Subsection> {
        self.tables.full.get(opcode).map(|&id| self.tree.get(id))
    }
}
