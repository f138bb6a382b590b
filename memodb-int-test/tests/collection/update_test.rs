use memodb::collection::{inc, set};
use memodb::common::Value;
use memodb::doc;
use memodb::errors::MemodbResult;
use memodb::filter::{all, field};
use memodb_int_test::test_util::{create_test_store, insert_test_documents};

#[test]
fn test_update_one_applies_set_in_place() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    insert_test_documents(&collection)?;

    let identity_before = collection
        .find_one(field("first_name").eq("fn1"))?
        .unwrap()
        .id();

    let modified = collection.update_one(
        field("first_name").eq("fn1"),
        &set("age", 41).set("address.city", "Boston"),
    )?;
    assert_eq!(modified, 1);

    let updated = collection.find_one(field("first_name").eq("fn1"))?.unwrap();
    assert_eq!(updated.get("age"), Some(Value::I64(41)));
    assert_eq!(updated.get("address.city"), Some(Value::from("Boston")));
    // identity is never reassigned by an update
    assert_eq!(updated.id(), identity_before);
    Ok(())
}

#[test]
fn test_update_one_applies_increment() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    collection.insert_one(doc! { name: "counter", hits: 10 })?;

    collection.update_one(field("name").eq("counter"), &inc("hits", 5))?;
    collection.update_one(field("name").eq("counter"), &inc("misses", 2))?;

    let updated = collection.find_one(field("name").eq("counter"))?.unwrap();
    assert_eq!(updated.get("hits"), Some(Value::I64(15)));
    // a missing field increments from zero
    assert_eq!(updated.get("misses"), Some(Value::I64(2)));
    Ok(())
}

#[test]
fn test_update_one_touches_first_match_only() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    insert_test_documents(&collection)?;

    let modified = collection.update_one(field("last_name").eq("ln2"), &set("seen", true))?;
    assert_eq!(modified, 1);

    let seen = collection.find(field("seen").eq(true))?.to_vec();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].get("first_name"), Some(Value::from("fn2")));
    Ok(())
}

#[test]
fn test_update_one_without_match_mutates_nothing() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    insert_test_documents(&collection)?;

    let modified = collection.update_one(field("first_name").eq("nobody"), &set("seen", true))?;
    assert_eq!(modified, 0);
    assert_eq!(collection.count_documents(field("seen").eq(true))?, 0);
    Ok(())
}

#[test]
fn test_update_many_applies_set_to_every_match() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    insert_test_documents(&collection)?;

    let modified = collection.update_many(field("last_name").eq("ln2"), &set("flag", "on"))?;
    assert_eq!(modified, 2);
    assert_eq!(collection.count_documents(field("flag").eq("on"))?, 2);
    Ok(())
}

#[test]
fn test_update_many_ignores_increment() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    collection.insert_many(vec![
        doc! { g: 1, n: 5 },
        doc! { g: 1, n: 7 },
    ])?;

    // the same specification carries both operator groups; only set applies
    // in the multi-document path, while update_one honors both
    let modified = collection.update_many(all(), &set("touched", true).inc("n", 100))?;
    assert_eq!(modified, 2);

    let docs = collection.find(all())?.to_vec();
    assert_eq!(docs[0].get("n"), Some(Value::I64(5)));
    assert_eq!(docs[1].get("n"), Some(Value::I64(7)));
    assert_eq!(docs[0].get("touched"), Some(Value::Bool(true)));

    collection.update_one(field("g").eq(1), &set("touched", false).inc("n", 100))?;
    let first = collection.find_one(field("g").eq(1))?.unwrap();
    assert_eq!(first.get("n"), Some(Value::I64(105)));
    assert_eq!(first.get("touched"), Some(Value::Bool(false)));
    Ok(())
}

#[test]
fn test_update_many_with_empty_filter_touches_everything() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    insert_test_documents(&collection)?;

    let modified = collection.update_many(all(), &set("checked", true))?;
    assert_eq!(modified, 3);
    Ok(())
}
