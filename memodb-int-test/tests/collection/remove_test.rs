use memodb::common::Value;
use memodb::doc;
use memodb::errors::MemodbResult;
use memodb::filter::{all, field};
use memodb_int_test::test_util::{create_test_store, insert_test_documents};

#[test]
fn test_delete_one_removes_first_match() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    insert_test_documents(&collection)?;

    let deleted = collection.delete_one(field("last_name").eq("ln2"))?;
    assert_eq!(deleted, 1);
    assert_eq!(collection.size(), 2);

    // fn2 was the first ln2 in sequence order; fn3 remains
    let remaining = collection.find_one(field("last_name").eq("ln2"))?.unwrap();
    assert_eq!(remaining.get("first_name"), Some(Value::from("fn3")));
    Ok(())
}

#[test]
fn test_delete_one_without_match() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    insert_test_documents(&collection)?;

    assert_eq!(collection.delete_one(field("first_name").eq("nobody"))?, 0);
    assert_eq!(collection.size(), 3);
    Ok(())
}

#[test]
fn test_delete_many_preserves_remainder_order() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    collection.insert_many(vec![
        doc! { drop: true, pos: 0 },
        doc! { drop: false, pos: 1 },
        doc! { drop: true, pos: 2 },
        doc! { drop: false, pos: 3 },
        doc! { drop: true, pos: 4 },
    ])?;

    let deleted = collection.delete_many(field("drop").eq(true))?;
    assert_eq!(deleted, 3);

    let remaining = collection.find(all())?.to_vec();
    assert_eq!(remaining[0].get("pos"), Some(Value::I64(1)));
    assert_eq!(remaining[1].get("pos"), Some(Value::I64(3)));
    Ok(())
}

#[test]
fn test_delete_many_with_empty_filter_clears_collection() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    insert_test_documents(&collection)?;

    let deleted = collection.delete_many(all())?;
    assert_eq!(deleted, 3);
    assert!(collection.is_empty());

    // the collection itself survives and accepts new writes
    collection.insert_one(doc! { fresh: true })?;
    assert_eq!(collection.size(), 1);
    Ok(())
}

#[test]
fn test_delete_many_without_match() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    insert_test_documents(&collection)?;

    assert_eq!(collection.delete_many(field("age").gt(100))?, 0);
    assert_eq!(collection.size(), 3);
    Ok(())
}
