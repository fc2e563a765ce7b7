//! Shell scenarios run through the command surface.

use stackdb::{Command, Executor, Output};

fn get(executor: &mut Executor, key: &str) -> Output {
    executor
        .execute(Command::Get { key: key.into() })
        .unwrap()
}

fn set(key: &str, value: i64) -> Command {
    Command::Set {
        key: key.into(),
        value,
    }
}

#[test]
fn set_incr_delete() {
    let mut db = Executor::new();
    db.execute(set("a", 1)).unwrap();
    assert_eq!(get(&mut db, "a"), Output::Maybe(Some(1)));

    db.execute(Command::Incr { key: "a".into() }).unwrap();
    assert_eq!(get(&mut db, "a"), Output::Maybe(Some(2)));

    assert_eq!(
        db.execute(Command::Delete { key: "a".into() }),
        Ok(Output::Bool(true))
    );
    assert_eq!(get(&mut db, "a"), Output::Maybe(None));
}

#[test]
fn multi_set_get_exec() {
    let mut db = Executor::new();
    db.execute(Command::Multi).unwrap();
    db.execute(set("x", 5)).unwrap();
    assert_eq!(get(&mut db, "x"), Output::Queued { pending: 2 });
    assert_eq!(db.execute(Command::Exec), Ok(Output::Committed { count: 2 }));
    assert_eq!(get(&mut db, "x"), Output::Maybe(Some(5)));
}

#[test]
fn multi_discard_then_exec_closes_block() {
    let mut db = Executor::new();
    db.execute_many(vec![Command::Multi, set("y", 1), set("z", 2)]);
    assert_eq!(db.execute(Command::Discard), Ok(Output::Discarded { count: 2 }));

    // The emptied block is still open, so EXEC has nothing to run.
    assert_eq!(db.execute(Command::Exec), Ok(Output::Committed { count: 0 }));
    assert_eq!(get(&mut db, "y"), Output::Maybe(None));
    assert_eq!(get(&mut db, "z"), Output::Maybe(None));
}

#[test]
fn delete_by_value_scenario() {
    let mut db = Executor::new();
    db.execute_many(vec![
        set("m", 9),
        set("n", 9),
        Command::DeleteByValue { value: 9 },
    ]);
    assert_eq!(get(&mut db, "m"), Output::Maybe(None));
    assert_eq!(get(&mut db, "n"), Output::Maybe(None));
}

#[test]
fn info_reflects_store() {
    let mut db = Executor::new();
    db.execute_many(vec![set("a", 1), set("b", 2), Command::Multi, Command::Multi]);
    match db.execute(Command::Info) {
        Ok(Output::StoreInfo(info)) => {
            assert_eq!((info.keys, info.depth, info.pending), (2, 2, 0));
            assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        }
        other => panic!("Expected StoreInfo, got {:?}", other),
    }
}
