use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A stored row of the `animals` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub habitat: String,
    /// Life expectancy in years, if known.
    pub life_expectancy: Option<i64>,
    pub in_danger: bool,
}

impl Animal {
    /// Column list matching the field order expected by [`Animal::from_row`].
    pub(crate) const COLUMNS: &'static str = "id, name, habitat, life_expectancy, in_danger";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            habitat: row.get(2)?,
            life_expectancy: row.get(3)?,
            in_danger: row.get(4)?,
        })
    }
}

/// Insert payload; the identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnimal {
    pub name: String,
    pub habitat: String,
    pub life_expectancy: Option<i64>,
    pub in_danger: bool,
}

impl NewAnimal {
    pub fn new(name: impl Into<String>, habitat: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            habitat: habitat.into(),
            life_expectancy: None,
            in_danger: false,
        }
    }

    pub fn with_life_expectancy(mut self, years: i64) -> Self {
        self.life_expectancy = Some(years);
        self
    }

    pub fn with_in_danger(mut self, in_danger: bool) -> Self {
        self.in_danger = in_danger;
        self
    }
}

/// The three fixed records the demo inserts.
pub fn sample_animals() -> Vec<NewAnimal> {
    vec![
        NewAnimal::new("Elephant", "Savannah")
            .with_life_expectancy(60)
            .with_in_danger(true),
        NewAnimal::new("Turtle", "Ocean").with_life_expectancy(100),
        NewAnimal::new("Dog", "Domestic").with_life_expectancy(13),
    ]
}
