//! Structural guarantees of the build surface: ordering, isolation
//! between sessions, and the serialized shape of finished trees.

use sprig::{Attrs, Error, Scope, TreeBuilder, attrs};

#[test]
fn test_render_is_idempotent() {
    let tree = TreeBuilder::new()
        .build(|x| {
            x.tag("report", |x: &mut Scope| {
                x.tag("name", "X")?;
                x.tag("amounts", attrs([("month", 1)]))
            })
        })
        .expect("build failed");

    assert_eq!(tree.render(), tree.render());
}

#[test]
fn test_render_at_shifts_the_whole_tree() {
    let tree = TreeBuilder::new()
        .build(|x| {
            x.tag("amounts", |x: &mut Scope| x.tag("expenses", 5))
        })
        .expect("build failed");

    assert_eq!(
        tree.render_at(2),
        "    <amounts>\n      <expenses>\n        5\n      </expenses>\n    </amounts>"
    );
}

#[test]
fn test_deep_nesting_indents_two_spaces_per_level() {
    let tree = TreeBuilder::new()
        .build(|x| {
            x.tag("a", |x: &mut Scope| {
                x.tag("b", |x: &mut Scope| {
                    x.tag("c", |x: &mut Scope| x.tag("d", ()))
                })
            })
        })
        .expect("build failed");

    let rendered = tree.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "<a>");
    assert_eq!(lines[1], "  <b>");
    assert_eq!(lines[2], "    <c>");
    assert_eq!(lines[3], "      <d />");
    assert_eq!(lines[4], "    </c>");
    assert_eq!(lines[5], "  </b>");
    assert_eq!(lines[6], "</a>");
}

#[test]
fn test_attribute_order_follows_declaration_order() {
    let tree = TreeBuilder::new()
        .build(|x| {
            x.tag(
                "entry",
                Attrs::new()
                    .set("zulu", "last")
                    .set("alpha", "first")
                    .set("count", 3),
            )
        })
        .expect("build failed");

    assert_eq!(tree.render(), r#"<entry zulu="last" alpha="first" count="3" />"#);
}

#[test]
fn test_second_top_level_element_is_dropped() {
    let tree = TreeBuilder::new()
        .build(|x| {
            x.tag("root", ())?;
            x.tag("stray", ())
        })
        .expect("build failed");

    assert_eq!(tree.render(), "<root />");
}

#[test]
fn test_builder_is_reusable_across_sessions() {
    let mut builder = TreeBuilder::new();

    let first = builder
        .build(|x| x.tag("first", "one"))
        .expect("first build failed");
    let second = builder
        .build(|x| x.tag("second", ()))
        .expect("second build failed");

    assert_eq!(first.render(), "<first>\n  one\n</first>");
    assert_eq!(second.render(), "<second />");
}

#[test]
fn test_failed_build_does_not_leak_into_the_next() {
    let mut builder = TreeBuilder::new();

    let failed = builder.build(|x| {
        x.tag("kept", ())?;
        x.tag("", ())
    });
    assert!(matches!(failed, Err(Error::InvalidTag { .. })));

    // The element logged before the failure must not resurface here.
    let next = builder.build(|x| x.tag("fresh", ())).expect("build failed");
    assert_eq!(next.render(), "<fresh />");
}

#[test]
fn test_error_inside_block_skips_reconciliation() {
    let result = TreeBuilder::new().build(|x| {
        x.tag("root", |x: &mut Scope| x.tag("bad name", ()))
    });

    assert_eq!(
        result,
        Err(Error::InvalidTag {
            name: "bad name".into(),
            reason: "tag name must contain only letters, numbers, underscores, dashes, dots, and colons",
        })
    );
}

#[test]
fn test_tree_serializes_to_json() {
    let tree = TreeBuilder::new()
        .build(|x| {
            x.tag("amounts", (attrs([("month", 1)]), |x: &mut Scope| {
                x.tag("expenses", 5)?;
                x.tag("revenue", 9)
            }))
        })
        .expect("build failed");

    let value = serde_json::to_value(&tree).expect("serialization failed");
    assert_eq!(
        value,
        serde_json::json!({
            "tag": "amounts",
            "attrs": { "month": 1 },
            "content": [
                { "tag": "expenses", "content": 5 },
                { "tag": "revenue", "content": 9 }
            ]
        })
    );
}

#[test]
fn test_self_closing_leaf_serializes_without_content() {
    let tree = TreeBuilder::new()
        .build(|x| x.tag("clearance", ()))
        .expect("build failed");

    assert_eq!(
        serde_json::to_value(&tree).expect("serialization failed"),
        serde_json::json!({ "tag": "clearance" })
    );
}
