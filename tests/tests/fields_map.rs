use fieldmap::{Destination, FieldsMap, Record, Row, Value};
use pretty_assertions::assert_eq;
use tests::{assert_err, assert_ok};

#[derive(Debug, Clone, PartialEq, Record)]
struct Demo {
    #[sql("field_key")]
    key: String,

    #[sql("field_one")]
    one: String,

    #[sql("field_two")]
    two: bool,

    #[sql("field_thr")]
    three: i64,

    #[sql = "field_fou"]
    four: f64,
}

fn demo() -> Demo {
    Demo {
        key: "k1".to_string(),
        one: "v1".to_string(),
        two: true,
        three: 123,
        four: 1.5,
    }
}

#[test]
fn select_statement_text() {
    let mut record = demo();
    let map = assert_ok!(FieldsMap::build("t", &mut record));

    assert_eq!(
        map.select_statement_text("WHERE x=?"),
        "SELECT  `field_key`, `field_one`, `field_two`, `field_thr`, `field_fou`  FROM `t` WHERE x=?"
    );
}

#[test]
fn insert_statement_text_has_one_placeholder_per_field() {
    let mut record = demo();
    let map = assert_ok!(FieldsMap::build("t", &mut record));

    let sql = map.insert_statement_text();
    assert_eq!(sql.matches('?').count(), 5);
    assert_eq!(
        sql,
        "INSERT INTO `t` ( `field_key`, `field_one`, `field_two`, `field_thr`, `field_fou` ) \
         VALUES (?, ?, ?, ?, ?)"
    );
}

#[test]
fn update_statement_text() {
    let mut record = demo();
    let map = assert_ok!(FieldsMap::build("t", &mut record));

    assert_eq!(
        map.update_statement_text("WHERE `field_key` = ?"),
        "UPDATE `t` SET  `field_key` = ?, `field_one` = ?, `field_two` = ?, `field_thr` = ?, \
         `field_fou` = ? WHERE `field_key` = ?"
    );
}

#[test]
fn parameters_and_destinations_line_up() {
    let mut record = demo();
    let mut map = assert_ok!(FieldsMap::build("t", &mut record));

    let columns = map.column_names();
    let values = map.values();
    assert_eq!(columns.len(), 5);
    assert_eq!(values.len(), 5);
    assert_eq!(
        values,
        [
            Value::from("k1"),
            Value::from("v1"),
            Value::Bool(true),
            Value::I64(123),
            Value::F64(1.5),
        ]
    );

    let buffered: Vec<bool> = map.addresses().iter().map(Destination::is_buffer).collect();
    assert_eq!(buffered, [true, true, false, false, false]);
}

#[test]
fn scanning_current_values_is_the_identity() {
    let mut record = demo();
    let mut map = assert_ok!(FieldsMap::build("t", &mut record));

    let row = Row::new(map.values().into_iter().map(Some).collect());
    let scanned = assert_ok!(map.scan(&row));
    assert_eq!(*scanned, demo());
}

#[test]
fn write_back_without_scan_is_the_identity() {
    let mut record = demo();
    let mut map = assert_ok!(FieldsMap::build("t", &mut record));

    assert_eq!(*assert_ok!(map.write_back()), demo());
}

#[test]
fn manual_scan_then_write_back() {
    let mut record = demo();
    let mut map = assert_ok!(FieldsMap::build("t", &mut record));

    let row = Row::new(vec![
        Some(Value::from("k2")),
        None,
        Some(Value::I64(0)),
        Some(Value::I64(9)),
        Some(Value::I64(2)),
    ]);
    assert_ok!(row.scan(&mut map.addresses()));
    assert_ok!(map.write_back());

    assert_eq!(
        record,
        Demo {
            key: "k2".to_string(),
            one: String::new(),
            two: false,
            three: 9,
            four: 2.0,
        }
    );
}

#[test]
fn scan_rejects_wrong_column_count() {
    let mut record = demo();
    let mut map = assert_ok!(FieldsMap::build("t", &mut record));

    let err = assert_err!(map.scan(&Row::new(vec![Some(Value::from("k2"))])));
    assert!(err.is_invalid_column_count());
    assert_eq!(map.record(), &demo());
}

#[derive(Debug, Default)]
struct Address {
    #[allow(dead_code)]
    city: String,
}

#[derive(Debug, Default, Record)]
struct Customer {
    #[sql("id")]
    id: i64,

    #[sql("address")]
    address: Address,
}

#[test]
fn unsupported_field_type_fails_the_build() {
    let mut record = Customer::default();
    let err = assert_err!(FieldsMap::build("customers", &mut record));

    assert!(err.is_unsupported_field_type());
    assert!(err.to_string().starts_with("unsupported field type: "));
    assert!(err.to_string().ends_with("Address"));
    assert_eq!(record.id, 0);
}

#[derive(Debug, Default, Record)]
struct Note {
    #[sql("id")]
    id: i64,

    body: String,
}

#[test]
fn unannotated_field_maps_to_empty_column() {
    tests::init_tracing();

    let mut record = Note::default();
    let map = assert_ok!(FieldsMap::build("notes", &mut record));

    assert_eq!(map.column_names(), ["id", ""]);
    assert_eq!(map.fields()[1].name(), "body");
    assert_eq!(map.fields_clause(), " `id`, `` ");
    assert_eq!(map.delete_statement_text(""), "DELETE FROM `notes` ");
}

#[derive(Debug, Default, Record)]
struct Empty {}

#[test]
fn record_without_fields() {
    let mut record = Empty::default();
    let map = assert_ok!(FieldsMap::build("t", &mut record));

    assert!(map.fields().is_empty());
    assert_eq!(map.fields_clause(), "");
    assert_eq!(map.fields_set_clause(), "");
    assert_eq!(map.insert_statement_text(), "INSERT INTO `t` () VALUES ()");
}

#[derive(Debug)]
struct Manual {
    name: String,
    score: f64,
}

impl Record for Manual {
    fn declare(fields: &mut fieldmap::Declaration<Self>) {
        fields
            .field::<String>("name", Some("name"), |r| &r.name, |r| &mut r.name)
            .field::<f64>("score", Some("score"), |r| &r.score, |r| &mut r.score);
    }
}

#[test]
fn hand_written_declaration() {
    let mut record = Manual {
        name: "x".to_string(),
        score: 0.25,
    };
    let mut map = assert_ok!(FieldsMap::build("scores", &mut record));
    assert_eq!(map.column_names(), ["name", "score"]);

    let row = Row::new(vec![Some(Value::from("y")), Some(Value::from("0.5"))]);
    assert_ok!(map.scan(&row));

    assert_eq!(record.name, "y");
    assert_eq!(record.score, 0.5);
}
