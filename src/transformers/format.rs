//! JSON, CSV, CSS and JavaScript reformatting

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, ToolError};

/// Output layout for [`format_json`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    Pretty,
    Minified,
}

fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

/// Re-serialize JSON with a 4-space indent, keeping key order
pub fn prettify_json(text: &str) -> Result<String> {
    let value = parse_json(text)?;
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ToolError::InvalidJson(e.to_string()))?;
    String::from_utf8(out).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

/// Re-serialize JSON without any whitespace
pub fn minify_json(text: &str) -> Result<String> {
    let value = parse_json(text)?;
    serde_json::to_string(&value).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

/// Format JSON, substituting the `Invalid JSON: ...` message for bad input
pub fn format_json(text: &str, style: JsonStyle) -> String {
    let result = match style {
        JsonStyle::Pretty => prettify_json(text),
        JsonStyle::Minified => minify_json(text),
    };
    result.unwrap_or_else(|e| e.to_string())
}

/// One input record of [`json_to_csv`], classified once at parse time
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Object(Map<String, Value>),
    /// Columns are the element indices `"0"`, `"1"`, ...
    Array(Vec<Value>),
    /// Contributes no columns; renders as an all-empty row
    Scalar(Value),
}

impl Row {
    fn classify(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(map),
            Value::Array(items) => Self::Array(items),
            other => Self::Scalar(other),
        }
    }

    fn keys(&self) -> Vec<String> {
        match self {
            Self::Object(map) => map.keys().cloned().collect(),
            Self::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            Self::Scalar(_) => Vec::new(),
        }
    }

    fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get(key),
            Self::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            Self::Scalar(_) => None,
        }
    }
}

fn quote_csv(field: &str) -> String {
    let escaped = field.replace('"', "\"\"");
    if escaped.contains(',') || escaped.contains('\n') || escaped.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

fn csv_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => quote_csv(s),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(nested) => quote_csv(&nested.to_string()),
    }
}

/// Flatten a JSON array (or a single value) into CSV.
///
/// The header is the union of all row keys in first-seen order.
pub fn json_to_csv(text: &str) -> Result<String> {
    let rows: Vec<Row> = match parse_json(text)? {
        Value::Array(items) => items.into_iter().map(Row::classify).collect(),
        single => vec![Row::classify(single)],
    };
    if rows.is_empty() {
        return Err(ToolError::InvalidOption("JSON array has no rows to convert".into()));
    }

    let mut headers: Vec<String> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !headers.contains(&key) {
                headers.push(key);
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.iter().map(|h| quote_csv(h)).collect::<Vec<_>>().join(","));
    for row in &rows {
        let cells: Vec<String> = headers.iter().map(|h| csv_cell(row.get(h))).collect();
        lines.push(cells.join(","));
    }
    Ok(lines.join("\n"))
}

/// Ordered substitutions applied by [`minify_css`]
fn css_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (r"(?m)/\*[\s\S]*?\*/|([^:]|^)//.*$", "$1"),
            (r"[\r\n\t]", ""),
            (r"\s+", " "),
            (r"\s*:\s*", ":"),
            (r"\s*;\s*", ";"),
            (r"\s*,\s*", ","),
            (r"\s*\{\s*", "{"),
            (r"\s*\}\s*", "}"),
            (r";\}", "}"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).expect("css rule regex"), replacement))
        .collect()
    })
}

/// Best-effort CSS minifier.
///
/// Pure regex rewriting: string literals containing `;`, `:` or braces are
/// not protected.
pub fn minify_css(css: &str) -> String {
    let mut out = css.to_string();
    for (re, replacement) in css_rules() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out.trim().to_string()
}

/// Line-based JavaScript stripper.
///
/// Trims every line, drops whole-line `//` comments and single-line
/// `/* ... */` comments, then concatenates what is left with no separator.
pub fn minify_js(js: &str) -> String {
    js.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("//"))
        .filter(|line| !(line.starts_with("/*") && line.ends_with("*/")))
        .collect()
}

/// A card line split on `|`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CardRecord {
    Full { pan: String, month: String, year: String, cvv: String },
    CvvOnly { cvv: String },
}

impl CardRecord {
    pub fn parse(line: &str) -> Self {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() >= 3 {
            Self::Full {
                pan: parts[0].to_string(),
                month: parts[1].to_string(),
                year: parts[2].to_string(),
                cvv: parts.get(3).copied().unwrap_or_default().to_string(),
            }
        } else {
            Self::CvvOnly { cvv: parts[0].to_string() }
        }
    }
}

/// Split `pan|month|year|cvv` lines into pretty JSON.
///
/// One line gives an object, several give an array.
pub fn cvv_to_json(text: &str) -> Result<String> {
    let records: Vec<CardRecord> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(CardRecord::parse)
        .collect();

    let json = match records.as_slice() {
        [] => return Err(ToolError::EmptyInput),
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    };
    json.map_err(|e| ToolError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_uses_four_spaces_and_keeps_order() {
        let out = prettify_json(r#"{"b":1,"a":[true,null]}"#).unwrap();
        assert_eq!(out, "{\n    \"b\": 1,\n    \"a\": [\n        true,\n        null\n    ]\n}");
    }

    #[test]
    fn test_minify_json() {
        assert_eq!(minify_json("{ \"a\" : [1, 2] ,\n \"b\": \"x y\" }").unwrap(), r#"{"a":[1,2],"b":"x y"}"#);
    }

    #[test]
    fn test_minify_of_prettify_matches_minify() {
        let input = r#"  {"name": "textforge", "tags": ["a", "b"], "nested": {"n": 1.5, "z": null}} "#;
        let pretty = prettify_json(input).unwrap();
        assert_eq!(minify_json(&pretty).unwrap(), minify_json(input).unwrap());
    }

    #[test]
    fn test_format_json_sentinel() {
        let out = format_json("{oops", JsonStyle::Pretty);
        assert!(out.starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_json_to_csv_header_union() {
        let input = r#"[{"name":"Ann","age":30},{"name":"Bob","city":"Paris, FR"}]"#;
        assert_eq!(json_to_csv(input).unwrap(), "name,age,city\nAnn,30,\nBob,,\"Paris, FR\"");
    }

    #[test]
    fn test_json_to_csv_wraps_single_object() {
        assert_eq!(json_to_csv(r#"{"q":"say \"hi\"","n":null}"#).unwrap(), "q,n\n\"say \"\"hi\"\"\",");
    }

    #[test]
    fn test_json_to_csv_nested_and_arrays() {
        let input = r#"[[1,2],{"0":"x","tags":["a","b"]}]"#;
        assert_eq!(json_to_csv(input).unwrap(), "0,1,tags\n1,2,\nx,,\"[\"\"a\"\",\"\"b\"\"]\"");
    }

    #[test]
    fn test_json_to_csv_errors() {
        assert!(matches!(json_to_csv("nope"), Err(ToolError::InvalidJson(_))));
        assert!(matches!(json_to_csv("[]"), Err(ToolError::InvalidOption(_))));
    }

    #[test]
    fn test_minify_css() {
        let css = "/* header */\nbody {\n    color : red ;\n    margin: 0 auto;\n}\na, b { background: url(http://x.org/a.png); }\n";
        assert_eq!(minify_css(css), "body{color:red;margin:0 auto}a,b{background:url(http://x.org/a.png)}");
    }

    #[test]
    fn test_minify_css_line_comment() {
        assert_eq!(minify_css("a { color: red; } // trailing\nb { top: 0 }"), "a{color:red}b{top:0}");
    }

    #[test]
    fn test_minify_js_is_conservative() {
        let js = "// comment\nfunction add(a, b) {\n    /* inline */\n    return a + b; // keep\n}\n\n";
        assert_eq!(minify_js(js), "function add(a, b) {return a + b; // keep}");
    }

    #[test]
    fn test_cvv_to_json_single_line() {
        let out = cvv_to_json("1234567890123456|01|25|123").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"pan": "1234567890123456", "month": "01", "year": "25", "cvv": "123"})
        );
        assert!(out.starts_with("{\n  \"pan\""));
    }

    #[test]
    fn test_cvv_to_json_multiple_lines() {
        let out = cvv_to_json("4111|12|30\n999").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"pan": "4111", "month": "12", "year": "30", "cvv": ""},
                {"cvv": "999"}
            ])
        );
    }
}
