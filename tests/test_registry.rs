//! Tests for the backend registry

use seamless::proxy::{BackendRegistry, EmptyRegistry};

#[tokio::test]
async fn test_set_replaces_list_and_resets_cursor() {
    let registry = BackendRegistry::new(vec!["old:1".to_string()]);
    registry.next().await.unwrap();

    registry
        .set(vec!["a:1".to_string(), "b:2".to_string()])
        .await;

    assert_eq!(registry.len().await, 2);
    assert_eq!(registry.snapshot().await, "a:1,b:2");

    // Cursor is back at the pre-advance start: the first pick after set
    // is the element at index 1, not index 0.
    assert_eq!(registry.next().await.unwrap(), "b:2");
}

#[tokio::test]
async fn test_next_advances_before_reading() {
    let backend1 = "localhost:8888";
    let backend2 = "localhost:8887";
    let registry = BackendRegistry::new(vec![backend1.to_string(), backend2.to_string()]);

    for expected in [backend2, backend1, backend2] {
        assert_eq!(registry.next().await.unwrap(), expected);
    }
}

#[tokio::test]
async fn test_next_with_single_backend() {
    let registry = BackendRegistry::new(vec!["localhost:4444".to_string()]);

    for _ in 0..3 {
        assert_eq!(registry.next().await.unwrap(), "localhost:4444");
    }
}

#[tokio::test]
async fn test_next_on_empty_registry() {
    let registry = BackendRegistry::default();

    // Fails every time and never mutates anything.
    for _ in 0..3 {
        assert_eq!(registry.next().await, Err(EmptyRegistry));
    }
    assert_eq!(registry.snapshot().await, "");
    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn test_set_to_empty_is_valid() {
    let registry = BackendRegistry::new(vec!["a:1".to_string()]);
    registry.set(Vec::new()).await;

    assert_eq!(registry.next().await, Err(EmptyRegistry));
    assert_eq!(registry.snapshot().await, "");
}

#[tokio::test]
async fn test_add_appends_preserving_order() {
    let registry = BackendRegistry::new(vec!["a:1".to_string(), "b:2".to_string()]);
    registry.add("c:3").await;

    assert_eq!(registry.len().await, 3);
    assert_eq!(registry.snapshot().await, "a:1,b:2,c:3");
}

#[tokio::test]
async fn test_add_permits_duplicates() {
    let registry = BackendRegistry::default();
    registry.add("a:1").await;
    registry.add("a:1").await;

    assert_eq!(registry.snapshot().await, "a:1,a:1");
}

#[tokio::test]
async fn test_add_does_not_reset_cursor() {
    let registry = BackendRegistry::new(vec!["a:1".to_string(), "b:2".to_string()]);
    assert_eq!(registry.next().await.unwrap(), "b:2");

    registry.add("c:3").await;

    // Cursor kept its position; rotation continues from where it was.
    assert_eq!(registry.next().await.unwrap(), "c:3");
    assert_eq!(registry.next().await.unwrap(), "a:1");
}

#[tokio::test]
async fn test_remove_all_matches() {
    let registry = BackendRegistry::new(vec![
        "a:1".to_string(),
        "b:2".to_string(),
        "a:1".to_string(),
    ]);

    assert_eq!(registry.remove("a:1").await, 2);
    assert_eq!(registry.snapshot().await, "b:2");
}

#[tokio::test]
async fn test_remove_missing_returns_zero() {
    let registry = BackendRegistry::default();
    assert_eq!(registry.remove("a:1").await, 0);

    registry.set(vec!["b:2".to_string()]).await;
    assert_eq!(registry.remove("a:1").await, 0);
    assert_eq!(registry.snapshot().await, "b:2");
}

#[tokio::test]
async fn test_remove_is_exact_match_only() {
    let registry = BackendRegistry::new(vec!["localhost:80".to_string()]);

    // No normalization, no case folding, no prefix matching.
    assert_eq!(registry.remove("LOCALHOST:80").await, 0);
    assert_eq!(registry.remove("localhost:8").await, 0);
    assert_eq!(registry.remove("localhost:80").await, 1);
}

#[tokio::test]
async fn test_remove_leaves_rotation_usable() {
    let registry = BackendRegistry::new(vec![
        "a:1".to_string(),
        "b:2".to_string(),
        "c:3".to_string(),
    ]);

    assert_eq!(registry.next().await.unwrap(), "b:2");
    assert_eq!(registry.next().await.unwrap(), "c:3");

    // Cursor now points at index 2; shrinking the list below it must not
    // break the next selection.
    assert_eq!(registry.remove("a:1").await, 1);
    assert_eq!(registry.next().await.unwrap(), "c:3");
    assert_eq!(registry.next().await.unwrap(), "b:2");
}

#[tokio::test]
async fn test_concurrent_access_stays_consistent() {
    let registry = BackendRegistry::new(vec!["a:1".to_string(), "b:2".to_string()]);

    let mut handles = Vec::new();
    for i in 0..8 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            for j in 0..100u32 {
                match j % 4 {
                    // Every add is removed again two iterations later by
                    // the same worker, so the storm is net-zero.
                    0 => registry.add(format!("worker{i}:{j}")).await,
                    1 => {
                        let _ = registry.next().await;
                    }
                    2 => {
                        registry.remove(&format!("worker{i}:{}", j - 2)).await;
                    }
                    _ => {
                        let _ = registry.snapshot().await;
                    }
                }
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(registry.len().await, 2);
    assert_eq!(registry.snapshot().await, "a:1,b:2");

    // The rotation still works after the storm.
    registry.set(vec!["final:1".to_string()]).await;
    assert_eq!(registry.next().await.unwrap(), "final:1");
}
