//! Advisory read-only check for SQL typed into the editor.
//!
//! The dashboard is read-only by convention only: statements are always sent
//! to the database as written. This module reports what a statement would do
//! so callers can log it and show a warning next to the result.

use sqlparser::ast::{SetExpr, Statement};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

/// Why a statement is not read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteKind {
    WriteStatement,
    SelectInto,
    CteWrappedWrite,
    StoredProcedure,
    Unrecognized,
}

#[derive(Debug, Clone)]
pub struct Finding {
    pub statement_index: usize,
    pub kind: WriteKind,
    pub detail: String,
}

/// Outcome of classifying a SQL text.
#[derive(Debug)]
pub enum Classification {
    ReadOnly,
    Modifying { findings: Vec<Finding> },
    /// The MySQL dialect parser could not read it; the server may still accept it.
    Unparsed { detail: String },
}

impl Classification {
    /// A one-line warning for display, or `None` when the SQL is read-only.
    pub fn warning(&self) -> Option<String> {
        match self {
            Classification::ReadOnly => None,
            Classification::Modifying { findings } => Some(
                findings
                    .iter()
                    .map(|f| f.detail.clone())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            Classification::Unparsed { .. } => None,
        }
    }
}

pub fn classify(sql: &str) -> Classification {
    let statements = match Parser::parse_sql(&MySqlDialect {}, sql) {
        Ok(stmts) => stmts,
        Err(e) => {
            return Classification::Unparsed {
                detail: e.to_string(),
            };
        }
    };

    let findings: Vec<Finding> = statements
        .iter()
        .enumerate()
        .filter(|(_, stmt)| !is_read_only(stmt))
        .map(|(i, stmt)| {
            let (kind, detail) = describe_write(stmt);
            Finding {
                statement_index: i,
                kind,
                detail,
            }
        })
        .collect();

    if findings.is_empty() {
        Classification::ReadOnly
    } else {
        Classification::Modifying { findings }
    }
}

fn is_read_only(stmt: &Statement) -> bool {
    match stmt {
        Statement::Query(query) => is_read_only_body(&query.body),
        Statement::ExplainTable { .. } | Statement::Explain { .. } => true,
        Statement::ShowTables { .. }
        | Statement::ShowColumns { .. }
        | Statement::ShowVariable { .. } => true,
        Statement::Use(_) => true,
        _ => false,
    }
}

fn is_read_only_body(body: &SetExpr) -> bool {
    match body {
        SetExpr::Select(select) => select.into.is_none(),
        SetExpr::Query(query) => is_read_only_body(&query.body),
        SetExpr::SetOperation { left, right, .. } => {
            is_read_only_body(left) && is_read_only_body(right)
        }
        SetExpr::Values(_) | SetExpr::Table(_) => true,
        _ => false,
    }
}

fn describe_write(stmt: &Statement) -> (WriteKind, String) {
    let write = |what: &str| {
        (
            WriteKind::WriteStatement,
            format!("statement modifies data: {}", what),
        )
    };
    match stmt {
        Statement::Insert(_) => write("INSERT"),
        Statement::Update { .. } => write("UPDATE"),
        Statement::Delete(_) => write("DELETE"),
        Statement::Drop { .. } => write("DROP"),
        Statement::CreateTable { .. } | Statement::CreateView { .. } => write("DDL"),
        Statement::AlterTable { .. } => write("ALTER"),
        Statement::Truncate { .. } => write("TRUNCATE"),
        Statement::Call(_) | Statement::Execute { .. } => (
            WriteKind::StoredProcedure,
            "stored procedure call may modify data".to_string(),
        ),
        Statement::Query(query) => describe_query_write(&query.body),
        _ => (
            WriteKind::Unrecognized,
            "statement is not a plain read".to_string(),
        ),
    }
}

fn describe_query_write(body: &SetExpr) -> (WriteKind, String) {
    match body {
        SetExpr::Select(select) if select.into.is_some() => (
            WriteKind::SelectInto,
            "SELECT INTO creates a table".to_string(),
        ),
        SetExpr::Insert(_) => (
            WriteKind::CteWrappedWrite,
            "CTE-wrapped INSERT modifies data".to_string(),
        ),
        SetExpr::Update(_) => (
            WriteKind::CteWrappedWrite,
            "CTE-wrapped UPDATE modifies data".to_string(),
        ),
        _ => (
            WriteKind::Unrecognized,
            "query contains operations that may modify data".to_string(),
        ),
    }
}
