//! Formatting shared by the square matrix types.

use crate::{common::format_value, config::Config};

/// Formats the column-major `elements` of a `rank` x `rank` matrix.
///
/// With [`Config::print_row_major`] set the values are listed row by row,
/// otherwise in storage order. The layout is named inside the brackets so
/// the two orders can't be confused.
pub(crate) fn format_matrix(
    elements: &[f64],
    rank: usize,
    type_name: &str,
    config: &Config,
) -> String {
    let values: Vec<_> = if config.print_row_major {
        (0..rank)
            .flat_map(|row| (0..rank).map(move |col| elements[col * rank + row]))
            .map(|value| format_value(value, config))
            .collect()
    } else {
        elements
            .iter()
            .map(|&value| format_value(value, config))
            .collect()
    };
    let layout = if config.print_row_major {
        "row-major"
    } else {
        "column-major"
    };
    let type_name = if config.print_types { type_name } else { "" };
    format!("{type_name}[{layout}: {}]", values.join(", "))
}
