use super::result::Line;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// 문서 라인의 구조적 역할
///
/// 선언 순서가 우선순위다. 같은 라인에서 여러 카테고리가 잡히면 앞쪽 카테고리의 마커가 먼저 온다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// `3.3.1. 8-Bit Loads` 형태의 섹션 제목
    Section,
    /// `1. LD nn,n` 형태의 서브섹션 제목
    Subsection,
    /// `Description:` 이후 다음 마커까지 이어지는 설명
    Description,
    /// `Use with:` 이후 다음 마커까지 이어지는 피연산자 설명
    UseWith,
    /// `Opcodes:` 헤더, 다음 라인부터 옵코드 테이블 행
    Opcodes,
    /// `Flags affected:` 이후 다음 마커까지 이어지는 플래그 설명
    FlagsAffected,
    /// 문서 끝 마커에만 사용
    None,
}

impl Category {
    /// 라인 매칭 대상 카테고리 (None 제외), 우선순위 순서
    pub const MATCHABLE: [Category; 6] = [
        Category::Section,
        Category::Subsection,
        Category::Description,
        Category::UseWith,
        Category::Opcodes,
        Category::FlagsAffected,
    ];

    /// 카테고리의 마커 패턴, 라인 시작에 고정되어 있다.
    pub fn pattern(self) -> Option<&'static Regex> {
        static SECTION: OnceLock<Regex> = OnceLock::new();
        static SUBSECTION: OnceLock<Regex> = OnceLock::new();
        static DESCRIPTION: OnceLock<Regex> = OnceLock::new();
        static USE_WITH: OnceLock<Regex> = OnceLock::new();
        static OPCODES: OnceLock<Regex> = OnceLock::new();
        static FLAGS_AFFECTED: OnceLock<Regex> = OnceLock::new();

        // 고정 패턴이라 컴파일 실패할 수 없음
        let regex = match self {
            Category::Section => {
                SECTION.get_or_init(|| Regex::new(r"^(\d{1,}\.){3} ").unwrap())
            }
            Category::Subsection => SUBSECTION.get_or_init(|| Regex::new(r"^\d{1,}\. ").unwrap()),
            Category::Description => {
                DESCRIPTION.get_or_init(|| Regex::new(r"^Description:").unwrap())
            }
            Category::UseWith => USE_WITH.get_or_init(|| Regex::new(r"^Use with:").unwrap()),
            Category::Opcodes => OPCODES.get_or_init(|| Regex::new(r"^Opcodes:").unwrap()),
            Category::FlagsAffected => {
                FLAGS_AFFECTED.get_or_init(|| Regex::new(r"^Flags affected:").unwrap())
            }
            Category::None => return None,
        };
        Some(regex)
    }

    /// 라인 시작이 이 카테고리의 마커인지 확인한다.
    pub fn is_match(self, line: &str) -> bool {
        self.pattern().is_some_and(|regex| regex.is_match(line))
    }

    /// 텍스트 앞의 마커 접두어를 지운다. 중간에 또 나오는 같은 문자열은 건드리지 않는다.
    pub fn strip_marker(self, text: &str) -> String {
        match self.pattern() {
            Some(regex) => regex.replace(text, "").into_owned(),
            None => text.to_owned(),
        }
    }

    /// 레코드 저장소에서 쓰는 필드 이름
    pub fn field_name(self) -> Option<&'static str> {
        match self {
            Category::Description => Some("Description"),
            Category::UseWith => Some("Use with"),
            Category::Opcodes => Some("Opcodes"),
            Category::FlagsAffected => Some("Flags affected"),
            _ => None,
        }
    }
}

/// 카테고리마다 패턴이 매칭되는 라인 위치를 모은다.
///
/// 카테고리끼리 독립적으로 검사하므로 한 라인이 여러 카테고리에 들어갈 수 있다.
/// 호출한 스레드에서 차례로 검사한다.
pub fn get_indices(lines: &[Line]) -> BTreeMap<Category, Vec<usize>> {
    Category::MATCHABLE
        .iter()
        .map(|&category| {
            let positions = lines
                .iter()
                .filter(|line| category.is_match(line.text))
                .map(|line| line.position)
                .collect::<Vec<_>>();
            (category, positions)
        })
        .collect()
}
