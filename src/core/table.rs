use serde_json::Value;

/// Records laid out as rows and columns.
///
/// Columns are the union of the record keys in order of first appearance; a record
/// lacking a column holds `Null` there. Records that are not JSON objects land in a
/// single `value` column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

const SCALAR_COLUMN: &str = "value";

impl Table {
    /// Builds a table from a sequence of records.
    pub fn from_records(records: &[Value]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for rec in records {
            match rec {
                Value::Object(map) => {
                    for key in map.keys() {
                        if !columns.iter().any(|c| c == key) {
                            columns.push(key.clone());
                        }
                    }
                }
                _ => {
                    if !columns.iter().any(|c| c == SCALAR_COLUMN) {
                        columns.push(SCALAR_COLUMN.to_string());
                    }
                }
            }
        }

        let rows = records
            .iter()
            .map(|rec| {
                columns
                    .iter()
                    .map(|col| match rec {
                        Value::Object(map) => map.get(col).cloned().unwrap_or(Value::Null),
                        scalar if col == SCALAR_COLUMN => scalar.clone(),
                        _ => Value::Null,
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Rows reordered by a column, nulls last. Numbers compare numerically, strings
    /// lexically.
    #[must_use]
    pub fn sorted_by(mut self, name: &str, descending: bool) -> Self {
        let Some(idx) = self.columns.iter().position(|c| c == name) else {
            return self;
        };
        self.rows.sort_by(|a, b| {
            let ord = compare_cells(&a[idx], &b[idx]);
            match (a[idx].is_null(), b[idx].is_null()) {
                (false, false) if descending => ord.reverse(),
                _ => ord,
            }
        });
        self
    }
}

fn compare_cells(a: &Value, b: &Value) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (x, y) => x.to_string().cmp(&y.to_string()),
    }
}
