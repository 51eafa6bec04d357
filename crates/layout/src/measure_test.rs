#![cfg(test)]

use crate::LayoutError;
use crate::measure::{DocumentMeasurer, MeasuredKind, MeasuredNode};
use crate::node::Node;
use crate::test_utils::{StubMeasurer, measure, measure_with};
use quire_style::{Dimension, ElementStyle, Margins, StyleDictionary};
use serde_json::json;

fn assert_bounds_ordered(root: &MeasuredNode) {
    let mut count = 0;
    root.visit(&mut |node| {
        count += 1;
        assert!(
            node.min_width <= node.max_width,
            "min {} > max {} in {:?}",
            node.min_width,
            node.max_width,
            node.kind
        );
        if let Some((min_h, max_h)) = node.height_bounds() {
            assert!(min_h <= max_h);
        }
    });
    assert!(count > 0);
}

#[test]
fn stack_of_text_and_margined_text() {
    let root = measure(json!({"stack": ["hello", {"text": "world", "margin": 10}]}));
    assert_eq!(root.min_width, 55.0);
    assert_eq!(root.max_width, 55.0);

    let MeasuredKind::Stack(children) = &root.kind else {
        panic!("expected a stack, got {:?}", root.kind);
    };
    assert_eq!(children[0].max_width, 30.0);
    assert_eq!(children[0].margin, None);
    assert_eq!(children[1].margin, Some(Margins::all(10.0)));
    assert_eq!(children[1].max_width, 55.0);
}

#[test]
fn bare_array_and_bare_string_are_shorthands() {
    let root = measure(json!(["hello", ["world"]]));
    assert!(matches!(root.kind, MeasuredKind::Stack(_)));
    assert_eq!(root.max_width, 35.0);
}

#[test]
fn text_min_is_widest_word_max_is_whole_line() {
    // "hello " = 30 + 5 for the space, "world" = 35.
    let root = measure(json!({"text": "hello world"}));
    assert_eq!(root.min_width, 35.0);
    assert_eq!(root.max_width, 70.0);
}

#[test]
fn columns_sum_their_children_and_record_the_gap() {
    let root = measure(json!({
        "columns": ["hello", {"text": "world", "margin": [5, 0]}],
        "columnGap": 12
    }));
    assert_eq!(root.min_width, 75.0);
    assert_eq!(root.max_width, 75.0);
    match &root.kind {
        MeasuredKind::Columns { gap, children } => {
            assert_eq!(*gap, 12.0);
            assert_eq!(children.len(), 2);
        }
        other => panic!("expected columns, got {:?}", other),
    }
}

#[test]
fn column_gap_falls_back_to_the_default_style() {
    let styles = StyleDictionary::new().with_default_style(ElementStyle {
        column_gap: Some(7.0),
        ..Default::default()
    });
    let root = measure_with(json!({"columns": ["a", "b"]}), &styles);
    assert!(matches!(root.kind, MeasuredKind::Columns { gap, .. } if gap == 7.0));
}

#[test]
fn margin_comes_from_the_most_specific_style() {
    let styles = StyleDictionary::new()
        .with_style(
            "wide",
            ElementStyle {
                margin: Some(Margins::x(20.0)),
                ..Default::default()
            },
        )
        .with_style(
            "narrow",
            ElementStyle {
                margin: Some(Margins::x(2.0)),
                ..Default::default()
            },
        );
    let root = measure_with(json!({"text": "hello", "style": ["wide", "narrow"]}), &styles);
    assert_eq!(root.margin, Some(Margins::x(2.0)));
    assert_eq!(root.max_width, 34.0);

    let root = measure_with(json!({"text": "hello", "style": ["narrow", "wide"]}), &styles);
    assert_eq!(root.max_width, 70.0);
}

#[test]
fn margin_is_added_once_not_inherited_by_children() {
    let styles = StyleDictionary::new().with_style(
        "boxed",
        ElementStyle {
            margin: Some(Margins::all(10.0)),
            ..Default::default()
        },
    );
    let root = measure_with(json!({"stack": ["hello"], "style": "boxed"}), &styles);
    let MeasuredKind::Stack(children) = &root.kind else {
        panic!("expected a stack");
    };
    assert_eq!(children[0].margin, None);
    assert_eq!(children[0].max_width, 30.0);
    assert_eq!(root.max_width, 50.0);
}

#[test]
fn canvas_is_sized_by_its_bounding_box() {
    let root = measure(json!({"canvas": [{"type": "rect", "x": 10, "y": 5, "w": 20, "h": 30}]}));
    assert_eq!(root.min_width, 30.0);
    assert_eq!(root.max_width, 30.0);
    assert_eq!(root.height_bounds(), Some((35.0, 35.0)));
}

#[test]
fn canvas_takes_the_farthest_primitive() {
    let root = measure(json!({"canvas": [
        {"type": "ellipse", "x": 50, "y": 50, "r1": 10, "r2": 5},
        {"type": "line", "x1": 0, "y1": 90, "x2": 20, "y2": 10},
        {"type": "polyline", "points": [{"x": 5, "y": 5}, {"x": 70, "y": 1}]}
    ]}));
    assert_eq!(root.max_width, 70.0);
    assert_eq!(root.height_bounds(), Some((90.0, 90.0)));
}

#[test]
fn table_widths_are_normalized_per_column() {
    let root = measure(json!({"table": {
        "widths": ["auto"],
        "body": [["a", "b", "c"]]
    }}));
    let MeasuredKind::Table(table) = &root.kind else {
        panic!("expected a table");
    };
    assert_eq!(table.widths.len(), 3);
    assert!(table.widths.iter().all(|w| w.width == Dimension::Auto));

    let root = measure(json!({"table": {"widths": 50, "body": [["a", "b", "c"]]}}));
    let MeasuredKind::Table(table) = &root.kind else {
        panic!("expected a table");
    };
    let widths: Vec<Dimension> = table.widths.iter().map(|w| w.width).collect();
    assert_eq!(widths, vec![Dimension::Pt(50.0); 3]);
}

#[test]
fn table_columns_take_the_widest_cell_and_sum() {
    let root = measure(json!({"table": {
        "headerRows": 1,
        "widths": ["*", {"width": 40}],
        "body": [
            ["hello", "ab"],
            ["x", "world"]
        ]
    }}));
    let MeasuredKind::Table(table) = &root.kind else {
        panic!("expected a table");
    };
    assert_eq!(table.header_rows, 1);
    assert_eq!(table.widths[0].width, Dimension::Star);
    assert_eq!(table.widths[1].width, Dimension::Pt(40.0));
    assert_eq!(table.widths[0].max_width, 30.0);
    assert_eq!(table.widths[1].max_width, 35.0);
    assert_eq!(root.max_width, 65.0);
    assert_eq!(table.body[1][1].max_width, 35.0);
}

#[test]
fn ragged_table_is_malformed() {
    let measurer = StubMeasurer::default();
    let styles = StyleDictionary::default();
    let result = DocumentMeasurer::new(&styles, &measurer)
        .measure_value(&json!({"table": {"body": [["a", "b"], ["c"]]}}));
    assert!(matches!(result, Err(LayoutError::MalformedDocument(_))));
}

#[test]
fn unknown_shape_is_malformed_and_names_the_node() {
    let measurer = StubMeasurer::default();
    let styles = StyleDictionary::default();
    let result = DocumentMeasurer::new(&styles, &measurer)
        .measure_value(&json!({"stack": [{"image": "logo.png"}]}));
    match result {
        Err(LayoutError::MalformedDocument(message)) => assert!(message.contains("logo.png")),
        other => panic!("expected a malformed-document error, got {:?}", other),
    }
}

#[test]
fn measuring_twice_gives_the_same_tree() {
    let styles = StyleDictionary::new().with_style(
        "m",
        ElementStyle {
            margin: Some(Margins::all(3.0)),
            ..Default::default()
        },
    );
    let node = Node::from_value(&json!({
        "stack": [
            {"text": "hello", "style": "m"},
            {"ul": ["world", {"ol": ["a", "b"]}]},
            {"table": {"body": [["hello", {"text": "x", "margin": 4}]]}}
        ],
        "style": "m"
    }))
    .unwrap();
    let measurer = StubMeasurer::default();
    let engine = DocumentMeasurer::new(&styles, &measurer);
    let first = engine.measure(&node).unwrap();
    let second = engine.measure(&node).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bounds_are_ordered_everywhere() {
    let root = measure(json!({
        "stack": [
            {"text": "hello big world", "margin": [1, 2, 3, 4]},
            {"columns": ["a b c", {"ol": ["one two", "three", {"ul": ["nested item"]}]}]},
            {"table": {"widths": "auto", "body": [["x y", "hello"], ["world", {"canvas": [
                {"type": "rect", "x": 0, "y": 0, "w": 10, "h": 10}
            ]}]]}}
        ]
    }));
    assert_bounds_ordered(&root);
}

#[test]
fn spans_are_measured_in_their_own_style() {
    let styles = StyleDictionary::new();
    let measurer = crate::text::FixedAdvanceMeasurer::new(1.0);
    let node = Node::from_value(&json!({"text": ["ab", {"text": "cd", "fontSize": 20}], "fontSize": 10})).unwrap();
    let root = DocumentMeasurer::new(&styles, &measurer).measure(&node).unwrap();
    // Each span is its own piece: 20 and 40.
    assert_eq!(root.min_width, 40.0);
    assert_eq!(root.max_width, 60.0);
}
