//! Concurrent sessions against the same database file: the store's own
//! locking is the only coordination, and assigned keys must stay unique.

use jobtrack::db::{companies, pool::DbPool, schema};
use jobtrack::models::Company;
use std::collections::HashSet;
use std::thread;

#[test]
fn concurrent_creates_get_distinct_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("concurrent.sqlite")
        .to_string_lossy()
        .to_string();

    {
        let pool = DbPool::new(&path).unwrap();
        schema::init_db(&pool.conn).unwrap();
    }

    let threads = 4;
    let per_thread = 25;

    let mut handles = Vec::new();
    for t in 0..threads {
        let path = path.clone();
        handles.push(thread::spawn(move || {
            // one session per caller; SQLite serializes the writes
            let pool = DbPool::new(&path).unwrap();
            let mut ids = Vec::with_capacity(per_thread);
            for i in 0..per_thread {
                let created =
                    companies::insert(&pool.conn, &Company::new(format!("company-{t}-{i}")))
                        .unwrap();
                ids.push(created.company_id);
            }
            ids
        }));
    }

    let mut all = Vec::new();
    for handle in handles {
        all.extend(handle.join().unwrap());
    }

    assert_eq!(all.len(), threads * per_thread);
    let unique: HashSet<i64> = all.iter().copied().collect();
    assert_eq!(unique.len(), all.len(), "store-assigned keys must be unique");
}

#[test]
fn concurrent_readers_see_consistent_lists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("readers.sqlite")
        .to_string_lossy()
        .to_string();

    {
        let pool = DbPool::new(&path).unwrap();
        schema::init_db(&pool.conn).unwrap();
        for i in 0..10 {
            companies::insert(&pool.conn, &Company::new(format!("c{i}"))).unwrap();
        }
    }

    let mut handles = Vec::new();
    for _ in 0..4 {
        let path = path.clone();
        handles.push(thread::spawn(move || {
            let pool = DbPool::new(&path).unwrap();
            companies::list(&pool.conn).unwrap().len()
        }));
    }

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 10);
    }
}
