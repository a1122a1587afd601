use super::result::Extraction;
use crate::ExtractError;
use std::path::Path;
use tracing::debug;

/// full 테이블을 json 레코드 저장소로 직렬화한다. 키는 오름차순
pub fn to_json(extraction: &Extraction) -> Result<String, ExtractError> {
    Ok(serde_json::to_string(&extraction.full_records())?)
}

pub fn save(extraction: &Extraction, path: impl AsRef<Path>) -> Result<(), ExtractError> {
    let path = path.as_ref();
    let json = to_json(extraction)?;
    debug!("{} 저장중 ({}바이트)", path.display(), json.len());
    std::fs::write(path, json).map_err(|source| ExtractError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
