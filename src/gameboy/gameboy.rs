pub mod category;
mod context;
pub mod marker;
pub mod opcode;
pub mod result;
pub mod store;

use crate::ExtractError;
use category::{get_indices, Category};
use context::ParsingContext;
use itertools::Itertools;
use marker::{build_markers, Marker};
use result::{Extraction, Line};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};

/// 문서를 읽고 파싱해서 full 테이블을 저장한다.
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Extraction, ExtractError> {
    let input = input.as_ref();
    info!("{} 읽는중", input.display());
    let text = std::fs::read_to_string(input).map_err(|source| ExtractError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let extraction = parse_document(&text)?;
    store::save(&extraction, output)?;
    Ok(extraction)
}

/// 문서 전체를 trim한 후 라인으로 나눈다. 빈 문서는 라인이 없다.
pub fn document_lines(text: &str) -> Vec<Line<'_>> {
    text.trim()
        .lines()
        .enumerate()
        .map(|(position, text)| Line { position, text })
        .collect()
}

pub fn parse_document(text: &str) -> Result<Extraction, ExtractError> {
    parse_lines(&document_lines(text))
}

/// 라인들을 섹션/서브섹션 트리와 옵코드 테이블로 만든다.
pub fn parse_lines(lines: &[Line]) -> Result<Extraction, ExtractError> {
    debug!("{}줄 파싱중", lines.len());
    let markers = build_markers(&get_indices(lines), lines.len());
    debug!(
        "마커 {}개",
        markers.iter().filter(|marker| !marker.is_sentinel()).count()
    );

    let mut context = ParsingContext::new(lines);
    for (now, next) in markers.iter().tuple_windows() {
        trace!("{:?}", now);
        parse_about_category(&mut context, now, next)?;
    }
    Ok(context.done())
}

/// 마커 카테고리에 따라 [now, next) 범위를 처리한다.
fn parse_about_category(
    context: &mut ParsingContext,
    now: &Marker,
    next: &Marker,
) -> Result<(), ExtractError> {
    let (start, end) = (now.position, next.position);
    match now.category {
        Category::Section => {
            let title = Category::Section.strip_marker(context.line(start));
            context.enter_section(title);
        }
        Category::Subsection => {
            let title = Category::Subsection.strip_marker(context.line(start));
            context.enter_subsection(title, start)?;
        }
        category @ (Category::Description | Category::UseWith | Category::FlagsAffected) => {
            let target = context.target(category, start)?;
            let joined = context.span(start, end).iter().map(|line| line.text).join(" ");
            let text = category.strip_marker(&joined).trim().to_owned();
            context.write_field(target, category, text);
        }
        Category::Opcodes => {
            let target = context.target(Category::Opcodes, start)?;
            let span = context.span(start, end);
            let joined = span.iter().map(|line| line.text).join("\n");
            let text = Category::Opcodes.strip_marker(&joined).trim().to_owned();
            context.write_field(target, Category::Opcodes, text);
            // 첫 줄은 헤더
            opcode::index_opcodes(context, target, span.get(1..).unwrap_or_default());
        }
        // 문서 끝 마커는 다음 마커가 없어서 여기 오지 않음
        Category::None => {}
    }
    Ok(())
}
