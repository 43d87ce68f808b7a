//! 리소스 그룹핑 — 메타데이터가 동일한 이벤트의 안정 분할
//!
//! 이벤트 시퀀스를 한 번 순회하면서 메타데이터 내용이 완전히 같은
//! 이벤트끼리 묶습니다. 그룹 순서는 각 메타데이터의 최초 등장 순서,
//! 그룹 내 순서는 입력 순서를 그대로 따릅니다 (정렬이 아닌 안정 분할).

use std::collections::HashMap;

use logbridge_core::types::{Metadata, MetadataProvider};

/// 메타데이터가 동일한 이벤트 그룹
///
/// 단일 재구성 호출 안에서 생성되고 소비되는 일시적 구조입니다.
/// 이벤트를 복제하지 않고 입력 슬라이스를 빌립니다.
#[derive(Debug)]
pub struct ResourceGroup<'a, T> {
    /// 그룹의 공통 메타데이터
    pub metadata: &'a Metadata,
    /// 입력 순서가 유지된 이벤트 목록
    pub events: Vec<&'a T>,
}

/// 메타데이터의 정규 그룹핑 키를 계산합니다.
///
/// 키를 정렬한 뒤 키/값 쌍을 길이 접두사와 함께 이어 붙입니다
/// (`<len(k)>:<k>|<len(v)>:<v>|`). 길이 접두사 덕분에 키나 값에
/// 구분자가 포함되어도 내용이 다른 두 매핑은 절대 같은 키를 만들지
/// 않습니다.
pub fn metadata_key(metadata: &Metadata) -> String {
    let mut keys: Vec<&String> = metadata.keys().collect();
    keys.sort();

    let mut buffer = String::new();
    for key in keys {
        let value = &metadata[key];
        buffer.push_str(&format!("{}:{}|", key.len(), key));
        buffer.push_str(&format!("{}:{}|", value.len(), value));
    }

    buffer
}

/// 이벤트 시퀀스를 메타데이터 기준으로 분할합니다.
///
/// 정규 키 -> 그룹 위치 인덱스를 유지하므로 이벤트당 그룹 조회는
/// 상수 시간(amortized)입니다.
pub fn group_by_metadata<T: MetadataProvider>(events: &[T]) -> Vec<ResourceGroup<'_, T>> {
    let mut groups: Vec<ResourceGroup<'_, T>> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for event in events {
        let key = metadata_key(event.metadata());

        if let Some(&index) = group_index.get(&key) {
            groups[index].events.push(event);
        } else {
            group_index.insert(key, groups.len());
            groups.push(ResourceGroup {
                metadata: event.metadata(),
                events: vec![event],
            });
        }
    }

    groups
}
