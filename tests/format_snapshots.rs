use flatjson::Doc;
use insta::assert_snapshot;

fn pretty(json: &str) -> String {
    let doc = Doc::parse(json).unwrap();
    doc.pretty_string(doc.root())
}

#[test]
fn snapshot_format_flat_object() {
    let output = pretty(r#"{"name":"ada","age":36,"active":true}"#);
    assert_snapshot!(output, @r###"
    {
      "name": "ada",
      "age": 36,
      "active": true
    }
    "###);
}

#[test]
fn snapshot_format_nested_array_of_objects() {
    let output = pretty(r#"{"items":[{"id":1},{"id":2}],"count":2}"#);
    assert_snapshot!(output, @r###"
    {
      "items": [
        {
          "id": 1
        },
        {
          "id": 2
        }
      ],
      "count": 2
    }
    "###);
}

#[test]
fn snapshot_format_empty_containers() {
    let output = pretty(r#"{"a":{},"b":[]}"#);
    assert_snapshot!(output, @r###"
    {
      "a": {},
      "b": []
    }
    "###);
}

#[test]
fn snapshot_format_mixed_scalars() {
    let output = pretty(r#"[1,-2.5,"text",null,false,true]"#);
    assert_snapshot!(output, @r###"
    [
      1,
      -2.5,
      "text",
      null,
      false,
      true
    ]
    "###);
}
