//! Typed table definitions rendered to idempotent DDL.

/// Schema definition for the SQLite database
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub tables: Vec<TableDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    pub fn add_table(mut self, table: TableDefinition) -> Self {
        self.tables.push(table);
        self
    }

    /// One `CREATE TABLE IF NOT EXISTS` statement per table, joined into a batch.
    pub fn to_sql(&self) -> String {
        self.tables
            .iter()
            .map(TableDefinition::create_sql)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn add_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn create_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(ColumnDefinition::to_sql)
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE IF NOT EXISTS {} ({});", self.name, columns)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
    pub default_value: Option<DefaultValue>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            constraints: Vec::new(),
            default_value: None,
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_default(mut self, value: DefaultValue) -> Self {
        self.default_value = Some(value);
        self
    }

    fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.as_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(&constraint.to_sql(&self.name));
        }
        if let Some(default) = &self.default_value {
            sql.push_str(" DEFAULT ");
            sql.push_str(&default.to_sql());
        }
        sql
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Text,
    Real,
    Blob,
}

impl DataType {
    fn as_sql(self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
            DataType::Real => "REAL",
            DataType::Blob => "BLOB",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnConstraint {
    PrimaryKey,
    /// Only meaningful right after `PrimaryKey` on an INTEGER column.
    AutoIncrement,
    NotNull,
    Unique,
    /// Rejects the empty string for this column.
    NotEmpty,
}

impl ColumnConstraint {
    fn to_sql(&self, column: &str) -> String {
        match self {
            ColumnConstraint::PrimaryKey => "PRIMARY KEY".to_string(),
            ColumnConstraint::AutoIncrement => "AUTOINCREMENT".to_string(),
            ColumnConstraint::NotNull => "NOT NULL".to_string(),
            ColumnConstraint::Unique => "UNIQUE".to_string(),
            ColumnConstraint::NotEmpty => format!("CHECK ({column} <> '')"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Integer(i64),
    Text(String),
    Real(f64),
    Null,
    CurrentTimestamp,
}

impl DefaultValue {
    fn to_sql(&self) -> String {
        match self {
            DefaultValue::Integer(v) => v.to_string(),
            DefaultValue::Text(v) => format!("'{}'", v.replace('\'', "''")),
            DefaultValue::Real(v) => v.to_string(),
            DefaultValue::Null => "NULL".to_string(),
            DefaultValue::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
        }
    }
}

pub const ANIMALS_TABLE: &str = "animals";

/// The single `animals` table.
pub fn animal_schema() -> Schema {
    Schema::new().add_table(
        TableDefinition::new(ANIMALS_TABLE)
            .add_column(
                ColumnDefinition::new("id", DataType::Integer)
                    .with_constraint(ColumnConstraint::PrimaryKey)
                    .with_constraint(ColumnConstraint::AutoIncrement),
            )
            .add_column(
                ColumnDefinition::new("name", DataType::Text)
                    .with_constraint(ColumnConstraint::NotNull)
                    .with_constraint(ColumnConstraint::NotEmpty),
            )
            .add_column(
                ColumnDefinition::new("habitat", DataType::Text)
                    .with_constraint(ColumnConstraint::NotNull)
                    .with_constraint(ColumnConstraint::NotEmpty),
            )
            .add_column(ColumnDefinition::new("life_expectancy", DataType::Integer))
            .add_column(
                ColumnDefinition::new("in_danger", DataType::Integer)
                    .with_constraint(ColumnConstraint::NotNull)
                    .with_default(DefaultValue::Integer(0)),
            ),
    )
}
