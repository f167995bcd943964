// Initializer End-to-End Tests
// Registration table + constructors exercised through the public API

use mapinit::{
    ConstructorRegistry, ContainerTag, ErasedMapping, InitError, OrderedMap, OrderedMapInitializer,
    SortedMap, SortedMapInitializer,
};
use serde_json::json;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("mapinit=debug")
        .with_test_writer()
        .try_init();
}

fn parsed_object() -> OrderedMap {
    // Key order mirrors the order the entries arrived in, not sort order
    let mut map = OrderedMap::new();
    map.insert("second".to_string(), json!(2));
    map.insert("first".to_string(), json!(1));
    map.insert("third".to_string(), json!({"deep": [true, null]}));
    map
}

#[test]
fn test_ordered_map_round_trip() {
    init_tracing();
    let registry = ConstructorRegistry::with_defaults();

    let narrowed = registry
        .construct_as::<OrderedMap>(
            &ContainerTag::new(OrderedMapInitializer::TAG),
            Box::new(parsed_object()),
        )
        .unwrap();

    let keys: Vec<&str> = narrowed.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["second", "first", "third"]);
    assert_eq!(narrowed["third"], json!({"deep": [true, null]}));
}

#[test]
fn test_identity_is_preserved_across_dispatch() {
    init_tracing();
    let registry = ConstructorRegistry::with_defaults();

    let boxed = Box::new(parsed_object());
    let addr_before = &*boxed as *const OrderedMap as usize;

    let narrowed = registry
        .construct_as::<OrderedMap>(&ContainerTag::new(OrderedMapInitializer::TAG), boxed)
        .unwrap();

    let addr_after = &*narrowed as *const OrderedMap as usize;
    assert_eq!(addr_before, addr_after);
}

#[test]
fn test_mismatched_container_fails_cleanly() {
    init_tracing();
    let registry = ConstructorRegistry::with_defaults();

    // A sorted map handed to the ordered-map constructor is a contract breach
    let mapping: ErasedMapping = Box::new(SortedMap::new());
    let result = registry.construct(&ContainerTag::new(OrderedMapInitializer::TAG), mapping);

    assert!(matches!(result, Err(InitError::Construct(_))));
}

#[test]
fn test_sorted_map_dispatch() {
    init_tracing();
    let registry = ConstructorRegistry::with_defaults();

    let mut map = SortedMap::new();
    map.insert("b".to_string(), json!(2));
    map.insert("a".to_string(), json!(1));

    let narrowed = registry
        .construct_as::<SortedMap>(
            &ContainerTag::new(SortedMapInitializer::TAG),
            Box::new(map),
        )
        .unwrap();

    let keys: Vec<&str> = narrowed.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_unknown_tag_reports_missing_registration() {
    init_tracing();
    let registry = ConstructorRegistry::with_defaults();

    let result = registry.construct(
        &ContainerTag::new("linked_list"),
        Box::new(parsed_object()),
    );

    assert!(matches!(
        result,
        Err(InitError::NotRegistered(ref tag)) if tag.as_str() == "linked_list"
    ));
}

#[test]
fn test_registry_shared_across_threads() {
    init_tracing();
    let registry = Arc::new(ConstructorRegistry::with_defaults());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let narrowed = registry
                    .construct_as::<OrderedMap>(
                        &ContainerTag::new(OrderedMapInitializer::TAG),
                        Box::new(parsed_object()),
                    )
                    .unwrap();
                assert_eq!(narrowed.len(), 3);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
