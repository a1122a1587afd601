use crate::gameboy::category::Category;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("입력 문서를 읽을 수 없음 {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("출력 파일을 쓸 수 없음 {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("룩업 테이블 직렬화 실패: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 섹션이 나오기 전에 서브섹션이 나옴
    #[error("{}번째 줄: 섹션 없이 서브섹션이 나옴", .line + 1)]
    SubsectionBeforeSection { line: usize },

    /// 서브섹션이 나오기 전에 필드가 나옴
    #[error("{}번째 줄: 서브섹션 없이 {:?} 필드가 나옴", .line + 1, .category)]
    FieldBeforeSubsection { category: Category, line: usize },
}
