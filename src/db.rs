use std::path::Path;

use anyhow::{Context, Result, bail};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use crate::model::{SqlValue, Table};

pub const DEFAULT_DATABASE: &str = "./data/database.sqlite";

fn open_database(database: &Path) -> Result<Connection> {
    if !database.exists() {
        bail!("database file missing: {}", database.display());
    }

    Connection::open_with_flags(database, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("failed to open {}", database.display()))
}

pub fn list_tables(connection: &Connection) -> Result<Vec<String>> {
    let mut statement = connection
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")
        .context("failed to prepare table listing")?;
    let names = statement
        .query_map([], |row| row.get::<_, String>(0))
        .context("failed to list tables")?
        .collect::<rusqlite::Result<Vec<String>>>()
        .context("failed to read table name")?;
    Ok(names)
}

pub fn see_tables(database: &Path) -> Result<Vec<String>> {
    let connection = open_database(database)?;
    let tables = list_tables(&connection)?;

    info!(
        path = %database.display(),
        tables = %tables.join(", "),
        "tables in database"
    );

    Ok(tables)
}

pub fn query_table(connection: &Connection, sql: &str) -> Result<Table> {
    let mut statement = connection
        .prepare(sql)
        .with_context(|| format!("failed to prepare query: {sql}"))?;
    let columns = statement
        .column_names()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect::<Vec<String>>();
    let width = columns.len();

    let mut rows = Vec::new();
    let mut cursor = statement
        .query([])
        .with_context(|| format!("failed to execute query: {sql}"))?;
    while let Some(row) = cursor
        .next()
        .with_context(|| format!("failed to fetch row for query: {sql}"))?
    {
        let mut values = Vec::with_capacity(width);
        for index in 0..width {
            let value = row
                .get_ref(index)
                .with_context(|| format!("failed to read column {index} for query: {sql}"))?;
            values.push(to_sql_value(value)?);
        }
        rows.push(values);
    }

    debug!(columns = width, rows = rows.len(), "query completed");
    Ok(Table { columns, rows })
}

pub fn query_to_df(query: &str, database: &Path) -> Result<Table> {
    let connection = open_database(database)?;
    query_table(&connection, query).with_context(|| format!("query against {}", database.display()))
}

fn to_sql_value(value: ValueRef<'_>) -> Result<SqlValue> {
    Ok(match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(number) => SqlValue::Integer(number),
        ValueRef::Real(number) => SqlValue::Real(number),
        ValueRef::Text(bytes) => SqlValue::Text(
            String::from_utf8(bytes.to_vec()).context("text column is not valid UTF-8")?,
        ),
        ValueRef::Blob(bytes) => SqlValue::Blob(bytes.to_vec()),
    })
}
