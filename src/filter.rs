//! Category denylist filter for provider results.
//!
//! Drops items whose category label (`type_name`) contains any banned
//! keyword. Applied per batch before anything reaches the sink, so a
//! denylisted item is never rendered, even transiently. Gated by
//! [`SearchConfig::filter_enabled`](crate::config::SearchConfig::filter_enabled).

use crate::types::VideoItem;

/// Category keywords that mark a result as adult content.
const BANNED_CATEGORIES: &[&str] = &[
    "伦理片",
    "福利",
    "里番动漫",
    "门事件",
    "萝莉少女",
    "制服诱惑",
    "国产传媒",
    "cosplay",
    "黑丝诱惑",
    "无码",
    "日本无码",
    "有码",
    "日本有码",
    "SWAG",
    "网红主播",
    "色情片",
    "同性片",
    "福利视频",
    "福利片",
];

/// Apply the category filter to one provider batch.
///
/// When `enabled` is false the batch passes through unchanged. Order of
/// surviving items is preserved, and filtering is idempotent.
pub fn apply(items: Vec<VideoItem>, enabled: bool) -> Vec<VideoItem> {
    if !enabled {
        return items;
    }
    items
        .into_iter()
        .filter(|item| !is_banned(&item.type_name))
        .collect()
}

/// Whether a category label matches the denylist.
pub(crate) fn is_banned(type_name: &str) -> bool {
    BANNED_CATEGORIES
        .iter()
        .any(|keyword| type_name.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(title: &str, type_name: &str) -> VideoItem {
        VideoItem {
            id: "1".into(),
            title: title.into(),
            type_name: type_name.into(),
            year: None,
            remarks: None,
            cover_url: None,
            source_name: "测试".into(),
            source_code: "test".into(),
            api_url: None,
        }
    }

    #[test]
    fn banned_category_dropped() {
        let items = vec![make_item("某片", "伦理片")];
        let filtered = apply(items, true);
        assert!(filtered.is_empty());
    }

    #[test]
    fn partial_keyword_match_dropped() {
        // Denylist matching is substring-based on the category label.
        let items = vec![make_item("某片", "日本无码专区")];
        let filtered = apply(items, true);
        assert!(filtered.is_empty());
    }

    #[test]
    fn clean_category_kept() {
        let items = vec![
            make_item("流浪地球", "科幻片"),
            make_item("让子弹飞", "喜剧片"),
        ];
        let filtered = apply(items, true);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn disabled_filter_passes_everything() {
        let items = vec![make_item("某片", "伦理片"), make_item("正常片", "动作片")];
        let filtered = apply(items, false);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn empty_type_name_kept() {
        let items = vec![make_item("无分类影片", "")];
        let filtered = apply(items, true);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn order_preserved_among_survivors() {
        let items = vec![
            make_item("甲", "动作片"),
            make_item("乙", "福利片"),
            make_item("丙", "剧情片"),
            make_item("丁", "战争片"),
        ];
        let filtered = apply(items, true);
        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["甲", "丙", "丁"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = vec![
            make_item("甲", "动作片"),
            make_item("乙", "伦理片"),
            make_item("丙", "剧情片"),
        ];
        let once = apply(items, true);
        let twice = apply(once.clone(), true);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_batch_stays_empty() {
        assert!(apply(vec![], true).is_empty());
        assert!(apply(vec![], false).is_empty());
    }

    #[test]
    fn is_banned_exact_and_substring() {
        assert!(is_banned("伦理片"));
        assert!(is_banned("高清伦理片合集"));
        assert!(!is_banned("动作片"));
        assert!(!is_banned(""));
    }
}
