use super::*;

use std::cell::Cell;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

fn counting_lazy(count: Rc<Cell<usize>>) -> Lazy<&'static str> {
    Lazy::new(move || {
        let count = count.clone();
        async move {
            count.set(count.get() + 1);
            Ok("module")
        }
    })
}

// =============================================================
// Deferred evaluation + memoization
// =============================================================

#[test]
fn loader_does_not_run_at_construction() {
    let count = Rc::new(Cell::new(0));
    let lazy = counting_lazy(count.clone());

    assert_eq!(lazy.stage(), LoadStage::Unresolved);
    assert_eq!(lazy.get(), None);
    assert_eq!(count.get(), 0);
}

#[test]
fn resolve_memoizes_the_first_success() {
    let count = Rc::new(Cell::new(0));
    let lazy = counting_lazy(count.clone());

    assert_eq!(block_on(lazy.resolve()), Ok("module"));
    assert_eq!(block_on(lazy.resolve()), Ok("module"));

    assert_eq!(count.get(), 1);
    assert_eq!(lazy.stage(), LoadStage::Resolved);
    assert_eq!(lazy.get(), Some("module"));
}

// =============================================================
// In-flight behavior
// =============================================================

#[test]
fn cell_reports_loading_while_resolution_is_pending() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let (tx, rx) = oneshot::channel::<()>();
    let rx = Rc::new(RefCell::new(Some(rx)));
    let lazy: Lazy<&'static str> = Lazy::new(move || {
        let rx = rx.borrow_mut().take().expect("loader runs once");
        async move {
            rx.await.ok();
            Ok("module")
        }
    });

    let pending = lazy.clone();
    spawner
        .spawn_local(async move {
            let _ = pending.resolve().await;
        })
        .unwrap();
    pool.run_until_stalled();
    assert_eq!(lazy.stage(), LoadStage::Loading);

    tx.send(()).unwrap();
    pool.run_until_stalled();
    assert_eq!(lazy.stage(), LoadStage::Resolved);
}

#[test]
fn overlapping_resolves_share_one_load() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let count = Rc::new(Cell::new(0));
    let (tx, rx) = oneshot::channel::<()>();
    let rx = Rc::new(RefCell::new(Some(rx)));
    let lazy: Lazy<&'static str> = Lazy::new({
        let count = count.clone();
        move || {
            count.set(count.get() + 1);
            let rx = rx.borrow_mut().take();
            async move {
                if let Some(rx) = rx {
                    rx.await.ok();
                }
                Ok("module")
            }
        }
    });

    for _ in 0..2 {
        let pending = lazy.clone();
        spawner
            .spawn_local(async move {
                let _ = pending.resolve().await;
            })
            .unwrap();
    }
    pool.run_until_stalled();
    assert_eq!(lazy.stage(), LoadStage::Loading);

    tx.send(()).unwrap();
    pool.run_until_stalled();

    assert_eq!(count.get(), 1);
    assert_eq!(lazy.stage(), LoadStage::Resolved);
}

// =============================================================
// Failure handling
// =============================================================

#[test]
fn failed_load_is_reported_and_retried_on_next_resolve() {
    let count = Rc::new(Cell::new(0));
    let lazy: Lazy<&'static str> = Lazy::new({
        let count = count.clone();
        move || {
            let attempt = count.get() + 1;
            count.set(attempt);
            async move {
                if attempt == 1 {
                    Err(LoadError("connection reset".to_owned()))
                } else {
                    Ok("module")
                }
            }
        }
    });

    let err = block_on(lazy.resolve()).expect_err("first attempt fails");
    assert_eq!(err, LoadError("connection reset".to_owned()));
    assert_eq!(lazy.stage(), LoadStage::Failed);
    assert_eq!(lazy.get(), None);

    assert_eq!(block_on(lazy.resolve()), Ok("module"));
    assert_eq!(count.get(), 2);
    assert_eq!(lazy.stage(), LoadStage::Resolved);
}
