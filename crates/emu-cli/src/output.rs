//! Output formatting for CLI commands.
//!
//! API responses are dumped as pretty-printed JSON; the container listing is
//! reshaped into a grid table, or into a JSON array of rows for scripting.

use std::io::Write;

use prettytable::{Cell, Row, Table};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cli::Format;
use crate::error::CliError;

/// Column titles of the container table.
pub const CONTAINER_COLUMNS: [&str; 5] = [
    "Datacenter",
    "Container",
    "Image",
    "Interface list",
    "Datacenter interfaces",
];

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => write_json(writer, value)?,
            Format::Table => value.write_table(writer)?,
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
    writeln!(writer)?;
    Ok(())
}

/// A response body rendered as-is.
///
/// Both formats print the pretty-printed JSON document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawResponse(pub Value);

impl TableDisplay for RawResponse {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        write_json(writer, &self.0)
    }
}

/// One line of the container table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerRow {
    /// Datacenter hosting the container.
    pub datacenter: String,
    /// Container (VNF) name.
    pub container: String,
    /// Container image.
    pub image: String,
    /// Comma-joined container interface names.
    pub interfaces: String,
    /// Comma-joined datacenter port names.
    pub datacenter_interfaces: String,
}

impl ContainerRow {
    fn cells(&self) -> [&str; 5] {
        [
            self.datacenter.as_str(),
            self.container.as_str(),
            self.image.as_str(),
            self.interfaces.as_str(),
            self.datacenter_interfaces.as_str(),
        ]
    }
}

/// Container listing reshaped for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContainerTable {
    /// Table rows in response order.
    pub rows: Vec<ContainerRow>,
}

impl ContainerTable {
    /// Build the table from a `list` response.
    ///
    /// The response is an array of `[name, status]` pairs. Entries that are
    /// not arrays with at least two elements are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the response is not an array, or if a container
    /// status lacks its `network` list or an interface lacks `intf_name` or
    /// `dc_portname`.
    pub fn from_listing(listing: &Value) -> Result<Self, CliError> {
        let entries = listing.as_array().ok_or_else(|| {
            CliError::ResponseShape("expected an array of [name, status] pairs".into())
        })?;

        let mut rows = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some([name, status, ..]) = entry.as_array().map(Vec::as_slice) else {
                debug!(entry = %entry, "Skipping malformed container entry");
                continue;
            };
            rows.push(Self::row(name, status)?);
        }

        Ok(Self { rows })
    }

    fn row(name: &Value, status: &Value) -> Result<ContainerRow, CliError> {
        let container = text(name);
        let network = status
            .get("network")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                CliError::ResponseShape(format!("container {container} has no network list"))
            })?;

        let interfaces = join_field(network, "intf_name", &container)?;
        let datacenter_interfaces = join_field(network, "dc_portname", &container)?;

        Ok(ContainerRow {
            datacenter: status.get("datacenter").map(text).unwrap_or_default(),
            container,
            image: status.get("image").map(text).unwrap_or_default(),
            interfaces,
            datacenter_interfaces,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::new(
            CONTAINER_COLUMNS.iter().map(|title| Cell::new(title)).collect(),
        ));
        for row in &self.rows {
            table.add_row(Row::new(row.cells().iter().map(|c| Cell::new(c)).collect()));
        }
        table
    }
}

impl TableDisplay for ContainerTable {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        self.to_table().print(writer)?;
        Ok(())
    }
}

/// Join one string field of every interface with commas.
fn join_field(network: &[Value], field: &str, container: &str) -> Result<String, CliError> {
    let values = network
        .iter()
        .map(|intf| {
            intf.get(field).map(text).ok_or_else(|| {
                CliError::ResponseShape(format!(
                    "interface of container {container} has no {field}"
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(values.join(","))
}

/// Render a JSON scalar as a table cell.
fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
