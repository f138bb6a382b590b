use memodb::common::{Value, DOC_ID};
use memodb::doc;
use memodb::errors::MemodbResult;
use memodb::filter::field;
use memodb_int_test::test_util::create_test_store;
use uuid::Uuid;

#[test]
fn test_insert_assigns_string_identity() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");

    let input = doc! { first_name: "fn1", last_name: "ln1" };
    let identity = collection.insert_one(input.clone())?;
    assert!(identity.is_string());

    // the stored document is the input plus the assigned identity
    let mut expected = input;
    expected.put(DOC_ID, identity.clone())?;

    let found = collection.find_one(field(DOC_ID).eq(identity))?;
    assert_eq!(found, Some(expected));
    Ok(())
}

#[test]
fn test_insert_keeps_supplied_identity() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");

    let custom_id = Uuid::new_v4().to_string();
    let identity = collection.insert_one(doc! { "_id": (custom_id.clone()), v: 1 })?;
    assert_eq!(identity, Value::from(custom_id));
    Ok(())
}

#[test]
fn test_duplicate_identities_coexist() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");

    collection.insert_one(doc! { "_id": "same", v: 1 })?;
    collection.insert_one(doc! { "_id": "same", v: 2 })?;

    assert_eq!(collection.size(), 2);
    // identity lookups return the first sequence match
    let first = collection.find_one(field(DOC_ID).eq("same"))?.unwrap();
    assert_eq!(first.get("v"), Some(Value::I64(1)));
    Ok(())
}

#[test]
fn test_insert_many_returns_input_length() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");

    let count = collection.insert_many(vec![
        doc! { n: 1 },
        doc! { n: 2 },
        doc! { n: 3 },
        doc! { n: 4 },
    ])?;
    assert_eq!(count, 4);
    assert_eq!(collection.size(), 4);
    Ok(())
}

#[test]
fn test_insert_many_preserves_input_order() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");

    collection.insert_many((0..10).map(|n| doc! { n: (n) }).collect())?;

    let stored = collection.find(memodb::filter::all())?.to_vec();
    for (position, document) in stored.iter().enumerate() {
        assert_eq!(document.get("n"), Some(Value::from(position)));
    }
    Ok(())
}

#[test]
fn test_each_insert_gets_a_distinct_generated_identity() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");

    let first = collection.insert_one(doc! { n: 1 })?;
    let second = collection.insert_one(doc! { n: 2 })?;
    assert_ne!(first, second);
    Ok(())
}
