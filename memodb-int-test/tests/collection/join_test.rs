use memodb::aggregate::{Lookup, PipelineStage};
use memodb::common::Value;
use memodb::doc;
use memodb::errors::MemodbResult;
use memodb_int_test::test_util::create_test_store;

#[test]
fn test_lookup_attaches_matching_foreign_documents() -> MemodbResult<()> {
    let store = create_test_store();
    let orders = store.collection("orders");
    let customers = store.collection("customers");

    customers.insert_one(doc! { id: "c1", name: "Ada" })?;
    orders.insert_one(doc! { id: 1, customer_id: "c1" })?;

    let result = orders
        .aggregate(vec![PipelineStage::Lookup(Lookup::new(
            "customers",
            "customer_id",
            "id",
            "customer",
        ))])
        .to_vec()?;

    assert_eq!(result.len(), 1);
    let joined = result[0].get("customer").unwrap();
    let joined = joined.as_array().unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(
        joined[0].as_document().unwrap().get("id"),
        Some(Value::from("c1"))
    );
    Ok(())
}

#[test]
fn test_lookup_unmatched_reference_yields_empty_array() -> MemodbResult<()> {
    let store = create_test_store();
    let orders = store.collection("orders");
    let customers = store.collection("customers");

    customers.insert_one(doc! { id: "c1" })?;
    orders.insert_one(doc! { id: 2, customer_id: "ghost" })?;

    let result = orders
        .aggregate(vec![PipelineStage::Lookup(Lookup::new(
            "customers",
            "customer_id",
            "id",
            "customer",
        ))])
        .to_vec()?;

    assert_eq!(result[0].get("customer"), Some(Value::Array(vec![])));
    Ok(())
}

#[test]
fn test_lookup_against_unknown_collection() -> MemodbResult<()> {
    let store = create_test_store();
    let orders = store.collection("orders");
    orders.insert_one(doc! { customer_id: "c1" })?;

    let result = orders
        .aggregate(vec![PipelineStage::Lookup(Lookup::new(
            "never_created",
            "customer_id",
            "id",
            "customer",
        ))])
        .to_vec()?;

    // joins the empty set instead of erroring, and creates nothing
    assert_eq!(result[0].get("customer"), Some(Value::Array(vec![])));
    assert!(!store.has_collection("never_created"));
    Ok(())
}

#[test]
fn test_lookup_attaches_every_match() -> MemodbResult<()> {
    let store = create_test_store();
    let customers = store.collection("customers");
    let orders = store.collection("orders");

    customers.insert_one(doc! { id: "c1" })?;
    orders.insert_many(vec![
        doc! { customer_id: "c1", total: 10 },
        doc! { customer_id: "c1", total: 20 },
        doc! { customer_id: "c2", total: 30 },
    ])?;

    let result = customers
        .aggregate(vec![PipelineStage::Lookup(Lookup::new(
            "orders",
            "id",
            "customer_id",
            "orders",
        ))])
        .to_vec()?;

    let attached = result[0].get("orders").unwrap();
    assert_eq!(attached.as_array().unwrap().len(), 2);
    Ok(())
}

#[test]
fn test_lookup_absent_fields_compare_equal() -> MemodbResult<()> {
    let store = create_test_store();
    let left = store.collection("left");
    let right = store.collection("right");

    left.insert_one(doc! { name: "no_key_here" })?;
    right.insert_one(doc! { name: "none_here_either" })?;
    right.insert_one(doc! { key: "present" })?;

    let result = left
        .aggregate(vec![PipelineStage::Lookup(Lookup::new(
            "right", "key", "key", "joined",
        ))])
        .to_vec()?;

    // the foreign document that also lacks the field joins; the one that
    // carries a value does not
    let joined = result[0].get("joined").unwrap();
    let joined = joined.as_array().unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(
        joined[0].as_document().unwrap().get("name"),
        Some(Value::from("none_here_either"))
    );
    Ok(())
}

#[test]
fn test_lookup_leaves_source_collection_untouched() -> MemodbResult<()> {
    let store = create_test_store();
    let orders = store.collection("orders");
    let customers = store.collection("customers");

    customers.insert_one(doc! { id: "c1" })?;
    orders.insert_one(doc! { customer_id: "c1" })?;

    orders
        .aggregate(vec![PipelineStage::Lookup(Lookup::new(
            "customers",
            "customer_id",
            "id",
            "customer",
        ))])
        .to_vec()?;

    let stored = orders.find_one(memodb::filter::all())?.unwrap();
    assert_eq!(stored.get("customer"), None);
    Ok(())
}
