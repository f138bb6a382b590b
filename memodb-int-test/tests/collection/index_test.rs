use memodb::common::{SortOrder, SortableFields};
use memodb::doc;
use memodb::errors::MemodbResult;
use memodb::filter::{all, field};
use memodb_int_test::test_util::{create_test_store, insert_test_documents};

#[test]
fn test_create_index_synthesizes_deterministic_name() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");

    let single = collection.create_index(&SortableFields::new().by("age", SortOrder::Ascending))?;
    assert_eq!(single, "age_1");

    let compound = collection.create_index(
        &SortableFields::new()
            .by("last_name", SortOrder::Ascending)
            .by("age", SortOrder::Descending),
    )?;
    assert_eq!(compound, "last_name_1_age_-1");

    let mut names = collection.list_indexes();
    names.sort();
    assert_eq!(names, vec!["age_1".to_string(), "last_name_1_age_-1".to_string()]);
    Ok(())
}

#[test]
fn test_index_is_behaviorally_inert() -> MemodbResult<()> {
    let store = create_test_store();
    let indexed = store.collection("indexed");
    let plain = store.collection("plain");

    insert_test_documents(&indexed)?;
    insert_test_documents(&plain)?;

    indexed.create_index(&SortableFields::new().by("age", SortOrder::Ascending))?;

    // every operation behaves exactly as it does without the index; compare
    // on data fields since generated identities differ per collection
    let names = |docs: Vec<memodb::collection::Document>| -> Vec<String> {
        docs.iter()
            .map(|doc| doc.get("first_name").unwrap().as_string().unwrap().clone())
            .collect()
    };
    let filter = field("age").gte(30);
    assert_eq!(
        names(indexed.find(filter.clone())?.to_vec()),
        names(plain.find(filter.clone())?.to_vec())
    );
    assert_eq!(
        indexed.count_documents(filter.clone())?,
        plain.count_documents(filter)?
    );

    indexed.insert_one(doc! { first_name: "fn4", age: 50 })?;
    plain.insert_one(doc! { first_name: "fn4", age: 50 })?;
    assert_eq!(
        indexed.delete_many(field("age").gt(45))?,
        plain.delete_many(field("age").gt(45))?
    );
    assert_eq!(names(indexed.find(all())?.to_vec()), names(plain.find(all())?.to_vec()));
    Ok(())
}

#[test]
fn test_duplicate_values_accepted_under_index() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");
    collection.create_index(&SortableFields::new().by("tag", SortOrder::Ascending))?;

    // registration enforces nothing: equal values insert freely
    collection.insert_one(doc! { tag: "same" })?;
    collection.insert_one(doc! { tag: "same" })?;
    assert_eq!(collection.count_documents(field("tag").eq("same"))?, 2);
    Ok(())
}

#[test]
fn test_drop_index() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");

    let name = collection.create_index(&SortableFields::new().by("age", SortOrder::Ascending))?;
    assert!(collection.drop_index(&name));
    assert!(!collection.drop_index(&name));
    assert!(collection.list_indexes().is_empty());
    Ok(())
}

#[test]
fn test_drop_all_indexes() -> MemodbResult<()> {
    let store = create_test_store();
    let collection = store.collection("test");

    collection.create_index(&SortableFields::new().by("a", SortOrder::Ascending))?;
    collection.create_index(&SortableFields::new().by("b", SortOrder::Descending))?;
    collection.drop_all_indexes();
    assert!(collection.list_indexes().is_empty());
    Ok(())
}
