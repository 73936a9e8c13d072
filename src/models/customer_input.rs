use chrono::Utc;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{Connection, ToSql, params};
use serde::{Deserialize, Serialize};

/// Languages the chatbot supports. Stored as the two-letter code; anything
/// else is rejected at the API boundary before it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "EN")]
    English,
    #[serde(rename = "FR")]
    French,
    #[serde(rename = "GE")]
    German,
    #[serde(rename = "IT")]
    Italian,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::French => "FR",
            Language::German => "GE",
            Language::Italian => "IT",
        }
    }
}

impl FromSql for Language {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "EN" => Ok(Language::English),
            "FR" => Ok(Language::French),
            "GE" => Ok(Language::German),
            "IT" => Ok(Language::Italian),
            other => Err(FromSqlError::Other(
                format!("unsupported language code '{other}'").into(),
            )),
        }
    }
}

impl ToSql for Language {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

/// Request body for a submitted customer input.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerInput {
    pub text: String,
    pub language: Language,
}

/// A customer input together with the path identifiers it was submitted
/// under. This is what the submit endpoint echoes back.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteCustomerInput {
    pub customer_id: i64,
    pub dialogue_id: i64,
    pub text: String,
    pub language: Language,
}

/// A durable row in `customer_inputs`. Field order matches the table layout.
#[derive(Debug, Clone, Serialize)]
pub struct StoredRecord {
    pub id: i64,
    pub created_at: String,
    pub dialogue_id: i64,
    pub customer_id: i64,
    pub language: Language,
    pub text: String,
}

/// Equality filter over stored inputs. Present fields are ANDed together;
/// absent fields are unconstrained.
#[derive(Debug, Default, Clone)]
pub struct InputFilter {
    pub customer_id: Option<i64>,
    pub dialogue_id: Option<i64>,
    pub language: Option<Language>,
}

const SELECT_STORED: &str =
    "SELECT id, created_at, dialogue_id, customer_id, language, text FROM customer_inputs";

fn row_to_stored(row: &rusqlite::Row) -> rusqlite::Result<StoredRecord> {
    Ok(StoredRecord {
        id: row.get("id")?,
        created_at: row.get("created_at")?,
        dialogue_id: row.get("dialogue_id")?,
        customer_id: row.get("customer_id")?,
        language: row.get("language")?,
        text: row.get("text")?,
    })
}

/// Insert a customer input, assigning `id` and `created_at`. Returns the
/// stored row as persisted.
pub fn insert(conn: &Connection, input: &CompleteCustomerInput) -> rusqlite::Result<StoredRecord> {
    let created_at = Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    conn.execute(
        "INSERT INTO customer_inputs (created_at, dialogue_id, customer_id, language, text) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            created_at,
            input.dialogue_id,
            input.customer_id,
            input.language,
            input.text
        ],
    )?;

    Ok(StoredRecord {
        id: conn.last_insert_rowid(),
        created_at,
        dialogue_id: input.dialogue_id,
        customer_id: input.customer_id,
        language: input.language,
        text: input.text.clone(),
    })
}

/// Delete every row staged under `dialogue_id`. Returns the number of rows
/// removed; zero matches is not an error.
pub fn delete_by_dialogue_id(conn: &Connection, dialogue_id: i64) -> rusqlite::Result<usize> {
    conn.execute(
        "DELETE FROM customer_inputs WHERE dialogue_id = ?1",
        params![dialogue_id],
    )
}

/// Count rows staged under `dialogue_id`.
pub fn count_by_dialogue_id(conn: &Connection, dialogue_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM customer_inputs WHERE dialogue_id = ?1",
        params![dialogue_id],
        |row| row.get(0),
    )
}

/// Query stored inputs matching all present filter fields, newest first
/// (strictly descending `id`).
pub fn query(conn: &Connection, filter: &InputFilter) -> rusqlite::Result<Vec<StoredRecord>> {
    let mut clauses: Vec<String> = Vec::new();
    let mut bindings: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(customer_id) = filter.customer_id {
        bindings.push(Box::new(customer_id));
        clauses.push(format!("customer_id = ?{}", bindings.len()));
    }
    if let Some(dialogue_id) = filter.dialogue_id {
        bindings.push(Box::new(dialogue_id));
        clauses.push(format!("dialogue_id = ?{}", bindings.len()));
    }
    if let Some(language) = filter.language {
        bindings.push(Box::new(language));
        clauses.push(format!("language = ?{}", bindings.len()));
    }

    let sql = if clauses.is_empty() {
        format!("{SELECT_STORED} ORDER BY id DESC")
    } else {
        format!("{SELECT_STORED} WHERE {} ORDER BY id DESC", clauses.join(" AND "))
    };

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        rusqlite::params_from_iter(bindings.iter().map(|b| b.as_ref())),
        row_to_stored,
    )?;
    rows.collect()
}

/// Response shape for the list endpoint.
#[derive(Debug, Serialize)]
pub struct InputListing {
    pub results_number: usize,
    pub results: Vec<StoredRecord>,
}

/// List stored inputs for the read API: optional customer and language
/// filters, AND semantics, descending `id` order.
pub fn list(
    conn: &Connection,
    customer_id: Option<i64>,
    language: Option<Language>,
) -> rusqlite::Result<InputListing> {
    let results = query(
        conn,
        &InputFilter {
            customer_id,
            dialogue_id: None,
            language,
        },
    )?;
    Ok(InputListing {
        results_number: results.len(),
        results,
    })
}
