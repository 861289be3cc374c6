use paramcli_collection::{Parameter, ParameterCollection};

use crate::ui::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configuration of a parameter table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    parameter_header: String,
    value_header: String,
    description_header: String,
    include_description: bool,
    description_field: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            parameter_header: "Parameter".to_string(),
            value_header: "Value".to_string(),
            description_header: "Description".to_string(),
            include_description: true,
            description_field: "description".to_string(),
        }
    }
}

impl TableOptions {
    /// Set the header of the key column (default `Parameter`).
    pub fn parameter_header(mut self, header: impl Into<String>) -> Self {
        self.parameter_header = header.into();
        self
    }

    /// Set the header of the value column (default `Value`).
    pub fn value_header(mut self, header: impl Into<String>) -> Self {
        self.value_header = header.into();
        self
    }

    /// Set the header of the description column (default `Description`).
    pub fn description_header(mut self, header: impl Into<String>) -> Self {
        self.description_header = header.into();
        self
    }

    /// Whether to render the description column (default `true`).
    pub fn include_description(mut self, include: bool) -> Self {
        self.include_description = include;
        self
    }

    /// Set the metadata key used to look up each parameter's description (default `description`).
    pub fn description_field(mut self, field: impl Into<String>) -> Self {
        self.description_field = field.into();
        self
    }
}

/// Renders a [`ParameterCollection`] as a bordered text table.
///
/// Each parameter renders as exactly one row; line breaks inside headers, values, or descriptions are rendered as spaces.
///
/// ### Example
/// ```
/// use paramcli::*;
///
/// let parameters = ParameterCollection::new()
///     .with_parameter(Parameter::new("output", "test.mkv").with_info("description", "Where to write.")?)?
///     .with("sleepFor", 1000)?;
///
/// let table = TableRenderer::new(&parameters, TableOptions::default()).render();
///
/// assert_eq!(
///     table,
///     r#"+-----------+----------+-----------------+
/// | Parameter | Value    | Description     |
/// +-----------+----------+-----------------+
/// | output    | test.mkv | Where to write. |
/// | sleepFor  | 1000     |                 |
/// +-----------+----------+-----------------+"#
/// );
/// # Ok::<(), CollectionError>(())
/// ```
#[derive(Debug)]
pub struct TableRenderer<'a> {
    parameters: &'a ParameterCollection,
    options: TableOptions,
}

impl<'a> TableRenderer<'a> {
    /// Create a renderer over `parameters`.
    pub fn new(parameters: &'a ParameterCollection, options: TableOptions) -> Self {
        Self {
            parameters,
            options,
        }
    }

    /// Render the table: top border, header, separator, one row per parameter, bottom border.
    pub fn render(&self) -> String {
        let mut headers = vec![
            single_line(&self.options.parameter_header),
            single_line(&self.options.value_header),
        ];

        if self.options.include_description {
            headers.push(single_line(&self.options.description_header));
        }

        let rows: Vec<Vec<String>> = self.parameters.iter().map(|p| self.cells(p)).collect();
        let widths = column_widths(&headers, &rows);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Column widths {widths:?} for {} rows.", rows.len());
        }

        let border = border(&widths);
        let mut lines = vec![border.clone(), row(&headers, &widths), border.clone()];
        lines.extend(rows.iter().map(|cells| row(cells, &widths)));
        lines.push(border);
        lines.join("\n")
    }

    /// Print the rendered table.
    pub fn print(&self, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(self.render());
    }

    fn cells(&self, parameter: &Parameter) -> Vec<String> {
        let mut cells = vec![
            single_line(parameter.key()),
            single_line(&parameter.value_as_string()),
        ];

        if self.options.include_description {
            let description = parameter
                .additional_info()
                .get_by_key(&self.options.description_field)
                .map(|info| single_line(&info.value_as_string()))
                .unwrap_or_default();
            cells.push(description);
        }

        cells
    }
}

/// Render `parameters` as a bordered text table.
/// See [`TableRenderer`].
pub fn render_table(parameters: &ParameterCollection, options: &TableOptions) -> String {
    TableRenderer::new(parameters, options.clone()).render()
}

// Every row must be exactly one line, so line breaks inside a cell become spaces.
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for cells in rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = std::cmp::max(widths[i], cell.chars().count());
        }
    }

    widths
}

fn border(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:width$}"))
        .collect();
    format!("| {} |", padded.join(" | "))
}
