use serde_json::{Value, json};

/// A small style dictionary: 10pt default text, a spaced header style and a
/// note style with a horizontal margin.
pub fn report_styles() -> Value {
    json!({
        "styles": {
            "header": { "fontSize": 18, "bold": true, "margin": [0, 0, 0, 10] },
            "note": { "fontSize": 8, "margin": [4, 0] },
            "tight": { "margin": 0 }
        },
        "defaultStyle": { "fontSize": 10, "columnGap": 10 }
    })
}

/// A report mixing every node kind.
pub fn report_document() -> Value {
    json!({
        "stack": [
            { "text": "Quarterly report", "style": "header" },
            "Summary of the quarter",
            {
                "columns": [
                    { "ul": ["revenue up", "costs flat", { "ol": ["north", "south"] }] },
                    { "text": "see appendix", "style": ["note", "tight"] }
                ]
            },
            table(vec![
                vec!["Region", "Q1", "Q2"],
                vec!["North", "10", "12"],
                vec!["South", "8", "9"]
            ], json!(["*", "auto"])),
            { "canvas": [
                { "type": "line", "x1": 0, "y1": 0, "x2": 200, "y2": 0, "lineWidth": 1 },
                { "type": "rect", "x": 0, "y": 4, "w": 40, "h": 12 }
            ]}
        ]
    })
}

/// A table of plain-text cells with one header row.
pub fn table(rows: Vec<Vec<&str>>, widths: Value) -> Value {
    json!({
        "table": {
            "headerRows": 1,
            "widths": widths,
            "body": rows
        }
    })
}
