use crate::api::image_proxy::failed_url_cache::FailedUrlCache;

#[test]
fn test_insert_then_contains() {
    let cache = FailedUrlCache::new();
    assert!(!cache.contains("https://example.com/a.jpg"));

    cache.insert("https://example.com/a.jpg".to_string());
    assert!(cache.contains("https://example.com/a.jpg"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_duplicate_insert_is_a_noop() {
    let cache = FailedUrlCache::new();
    cache.insert("https://example.com/a.jpg".to_string());
    cache.insert("https://example.com/a.jpg".to_string());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_oldest_entry_evicted_at_capacity() {
    let cache = FailedUrlCache::new();
    for i in 0..1000 {
        cache.insert(format!("https://example.com/{}.jpg", i));
    }
    assert_eq!(cache.len(), 1000);
    assert!(cache.contains("https://example.com/0.jpg"));

    cache.insert("https://example.com/one-more.jpg".to_string());
    assert_eq!(cache.len(), 1000);
    assert!(!cache.contains("https://example.com/0.jpg"));
    assert!(cache.contains("https://example.com/1.jpg"));
    assert!(cache.contains("https://example.com/one-more.jpg"));
}
