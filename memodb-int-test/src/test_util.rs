use memodb::collection::Collection;
use memodb::doc;
use memodb::errors::MemodbResult;
use memodb::store::Store;

/// Creates a fresh in-memory store for a test.
pub fn create_test_store() -> Store {
    Store::new()
}

/// Inserts the shared three-person data set used across collection tests.
pub fn insert_test_documents(collection: &Collection) -> MemodbResult<()> {
    let doc1 = doc! {
        first_name: "fn1",
        last_name: "ln1",
        age: 40,
        address: {
            street: "5th Avenue",
            city: "New York",
        },
    };

    let doc2 = doc! {
        first_name: "fn2",
        last_name: "ln2",
        age: 28,
        address: {
            street: "Oxford Street",
            city: "London",
        },
    };

    let doc3 = doc! {
        first_name: "fn3",
        last_name: "ln2",
        age: 35,
        address: {
            street: "Harbour Bridge",
            city: "Sydney",
        },
    };

    collection.insert_many(vec![doc1, doc2, doc3])?;
    Ok(())
}
