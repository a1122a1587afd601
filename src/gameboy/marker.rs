use super::category::Category;
use itertools::Itertools;
use std::collections::BTreeMap;

/// 문서 내 요소가 시작하는 위치
///
/// 필드 순서대로 정렬되므로 같은 위치에서는 카테고리 우선순위를 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Marker {
    pub position: usize,
    pub category: Category,
}

impl Marker {
    pub fn new(position: usize, category: Category) -> Self {
        Self { position, category }
    }

    /// 문서 끝 마커
    pub fn sentinel(len: usize) -> Self {
        Self::new(len, Category::None)
    }

    pub fn is_sentinel(&self) -> bool {
        self.category == Category::None
    }
}

/// 카테고리별 위치 목록을 하나의 마커 배열로 합치고, 마지막에 문서 끝 마커를 붙인다.
pub fn build_markers(indices: &BTreeMap<Category, Vec<usize>>, len: usize) -> Vec<Marker> {
    indices
        .iter()
        .flat_map(|(&category, positions)| {
            positions
                .iter()
                .map(move |&position| Marker::new(position, category))
        })
        .sorted()
        .chain(std::iter::once(Marker::sentinel(len)))
        .collect()
}
