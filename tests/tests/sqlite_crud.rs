use fieldmap::{Database, FieldsMap, Record, Transaction, Value};
use fieldmap_driver_sqlite::{Connection, Sqlite};
use pretty_assertions::assert_eq;
use tests::{assert_err, assert_ok};

#[derive(Debug, Clone, Default, PartialEq, Record)]
struct Demo {
    #[sql("field_key")]
    key: String,

    #[sql("field_one")]
    one: String,

    #[sql("field_two")]
    two: bool,

    #[sql("field_thr")]
    three: i64,

    #[sql("field_fou")]
    four: f64,
}

const TABLE: &str = "demo";

fn demo(key: &str, three: i64) -> Demo {
    Demo {
        key: key.to_string(),
        one: format!("value of {key}"),
        two: three % 2 == 0,
        three,
        four: three as f64 / 4.0,
    }
}

fn setup() -> Connection {
    tests::init_tracing();

    let connection = assert_ok!(Sqlite::in_memory().connect());
    assert_ok!(connection.execute_batch(
        "CREATE TABLE demo (
            field_key TEXT PRIMARY KEY,
            field_one TEXT,
            field_two BOOLEAN NOT NULL,
            field_thr INTEGER NOT NULL,
            field_fou REAL NOT NULL
        )"
    ));
    connection
}

async fn insert(db: &dyn Database, mut record: Demo) {
    let map = assert_ok!(FieldsMap::build(TABLE, &mut record));
    let stmt = assert_ok!(map.insert_stmt(None, Some(db)).await);
    let res = assert_ok!(stmt.execute(&map.values()).await);
    assert_eq!(res.rows_affected, 1);
}

async fn find(db: &dyn Database, key: &str) -> fieldmap::Result<Demo> {
    let mut record = Demo::default();
    let mut map = FieldsMap::build(TABLE, &mut record)?;

    let stmt = map.select_stmt(None, Some(db), "WHERE `field_key` = ?").await?;
    let row = stmt.query_row(&[Value::from(key)]).await?;
    map.scan(&row)?;

    Ok(record)
}

#[tokio::test]
async fn insert_then_select() {
    let connection = setup();

    insert(&connection, demo("k1", 123)).await;

    let found = assert_ok!(find(&connection, "k1").await);
    assert_eq!(found, demo("k1", 123));
}

#[tokio::test]
async fn update_with_where_parameter() {
    let connection = setup();
    insert(&connection, demo("k1", 1)).await;

    let mut record = assert_ok!(find(&connection, "k1").await);
    record.one = "changed".to_string();
    record.two = true;
    record.three = 456;

    let map = assert_ok!(FieldsMap::build(TABLE, &mut record));
    let stmt = assert_ok!(
        map.update_stmt(None, Some(&connection as &dyn Database), "WHERE `field_key` = ?")
            .await
    );

    let mut params = map.values();
    params.push(Value::from("k1"));

    let res = assert_ok!(stmt.execute(&params).await);
    assert_eq!(res.rows_affected, 1);

    let found = assert_ok!(find(&connection, "k1").await);
    assert_eq!(found.one, "changed");
    assert!(found.two);
    assert_eq!(found.three, 456);
}

#[tokio::test]
async fn select_many_rows_one_map_per_row() {
    let connection = setup();

    for (key, three) in [("k3", 3), ("k1", 1), ("k2", 2)] {
        insert(&connection, demo(key, three)).await;
    }

    let mut probe = Demo::default();
    let map = assert_ok!(FieldsMap::build(TABLE, &mut probe));
    let stmt = assert_ok!(
        map.select_stmt(None, Some(&connection as &dyn Database), "ORDER BY `field_thr`")
            .await
    );

    let mut found = vec![];

    for row in assert_ok!(stmt.query(&[]).await) {
        let mut record = Demo::default();
        let mut map = assert_ok!(FieldsMap::build(TABLE, &mut record));
        assert_ok!(map.scan(&row));
        found.push(record);
    }

    assert_eq!(found, [demo("k1", 1), demo("k2", 2), demo("k3", 3)]);
}

#[tokio::test]
async fn null_text_scans_as_empty_string() {
    let connection = setup();
    assert_ok!(connection.execute_batch(
        "INSERT INTO demo (field_key, field_one, field_two, field_thr, field_fou) \
         VALUES ('k1', NULL, 0, 5, 0.5)"
    ));

    let found = assert_ok!(find(&connection, "k1").await);
    assert_eq!(found.one, "");
    assert_eq!(found.three, 5);
}

#[tokio::test]
async fn delete_then_select_finds_nothing() {
    let connection = setup();
    insert(&connection, demo("k1", 1)).await;
    insert(&connection, demo("k2", 2)).await;

    let mut record = Demo::default();
    let map = assert_ok!(FieldsMap::build(TABLE, &mut record));
    let stmt = assert_ok!(
        map.delete_stmt(None, Some(&connection as &dyn Database), "WHERE `field_key` = ?")
            .await
    );

    let res = assert_ok!(stmt.execute(&[Value::from("k1")]).await);
    assert_eq!(res.rows_affected, 1);

    let err = assert_err!(find(&connection, "k1").await);
    assert!(err.is_record_not_found());

    assert_ok!(find(&connection, "k2").await);
}

#[tokio::test]
async fn committed_transaction_is_visible() {
    let connection = setup();

    let tx = assert_ok!(connection.begin());
    let mut record = demo("k1", 1);
    let map = assert_ok!(FieldsMap::build(TABLE, &mut record));

    let stmt = assert_ok!(map.insert_stmt(Some(&tx as &dyn Transaction), None).await);
    assert_ok!(stmt.execute(&map.values()).await);
    assert_ok!(tx.commit());

    assert_eq!(assert_ok!(find(&connection, "k1").await), demo("k1", 1));
}

#[tokio::test]
async fn dropped_transaction_rolls_back() {
    let connection = setup();

    {
        let tx = assert_ok!(connection.begin());
        let mut record = demo("k1", 1);
        let map = assert_ok!(FieldsMap::build(TABLE, &mut record));

        let stmt = assert_ok!(map.insert_stmt(Some(&tx as &dyn Transaction), None).await);
        assert_ok!(stmt.execute(&map.values()).await);
    }

    let err = assert_err!(find(&connection, "k1").await);
    assert!(err.is_record_not_found());
}

#[tokio::test]
async fn invalid_sql_fails_at_prepare() {
    let connection = setup();

    let mut record = Demo::default();
    let map = assert_ok!(FieldsMap::build(TABLE, &mut record));

    let err = assert_err!(
        map.select_stmt(None, Some(&connection as &dyn Database), "WHERE WHERE")
            .await
    );
    assert!(err.is_driver());
}
