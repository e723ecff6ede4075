use polars::prelude::*;
use serde_json::Value;

use crate::core::{Response, Table};

/// Trait for converting response data into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    ///
    /// Columns whose non-null cells are all numbers become `Float64`, all booleans
    /// become `Boolean`; anything else is rendered as `String`.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for Table {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns()
            .iter()
            .map(|name| {
                let cells = self.column(name).unwrap_or_default();
                to_column(name, &cells)
            })
            .collect::<Vec<_>>();
        DataFrame::new(columns)
    }
}

impl ToDataFrame for Response {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        self.to_table().to_dataframe()
    }
}

fn to_column(name: &str, cells: &[&Value]) -> Column {
    let non_null = || cells.iter().filter(|v| !v.is_null());

    if non_null().all(|v| v.is_number()) {
        let vals: Vec<Option<f64>> = cells.iter().map(|v| v.as_f64()).collect();
        Column::new(name.into(), vals)
    } else if non_null().all(|v| v.is_boolean()) {
        let vals: Vec<Option<bool>> = cells.iter().map(|v| v.as_bool()).collect();
        Column::new(name.into(), vals)
    } else {
        let vals: Vec<Option<String>> = cells
            .iter()
            .map(|v| match v {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect();
        Column::new(name.into(), vals)
    }
}
