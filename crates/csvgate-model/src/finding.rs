use serde::{Deserialize, Serialize};

/// Finding kinds, serialized with the fixed wire literals the error report
/// contract declares. `NullData` is part of the declared contract but the
/// engine reports null violations through `Schema` (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "Type1:Non-StringInHeaderError")]
    NonStringInHeader,
    #[serde(rename = "Type2:DuplicateHeaderError")]
    DuplicateHeader,
    #[serde(rename = "Type3:NoTimeStampColumnError")]
    NoTimeStampColumn,
    #[serde(rename = "Type4:ColumnCountError")]
    ColumnCount,
    #[serde(rename = "Type5:NullDataError")]
    NullData,
    #[serde(rename = "Type6:SchemaError")]
    Schema,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NonStringInHeader => "Type1:Non-StringInHeaderError",
            ErrorKind::DuplicateHeader => "Type2:DuplicateHeaderError",
            ErrorKind::NoTimeStampColumn => "Type3:NoTimeStampColumnError",
            ErrorKind::ColumnCount => "Type4:ColumnCountError",
            ErrorKind::NullData => "Type5:NullDataError",
            ErrorKind::Schema => "Type6:SchemaError",
        }
    }
}

/// Where a finding was observed. Shape depends on the kind: header findings
/// carry a column, width findings a row, cell findings both, and the
/// document-level timestamp finding neither (serialized as `{}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

impl Location {
    pub fn document() -> Self {
        Self::default()
    }

    pub fn column(name: impl Into<String>) -> Self {
        Self {
            row: None,
            column: Some(name.into()),
        }
    }

    pub fn row(index: usize) -> Self {
        Self {
            row: Some(index),
            column: None,
        }
    }

    pub fn cell(row: usize, column: impl Into<String>) -> Self {
        Self {
            row: Some(row),
            column: Some(column.into()),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "Type")]
    pub kind: ErrorKind,
    #[serde(rename = "Location")]
    pub location: Location,
    #[serde(rename = "Info")]
    pub info: String,
}

impl Finding {
    pub fn new(kind: ErrorKind, location: Location, info: impl Into<String>) -> Self {
        Self {
            kind,
            location,
            info: info.into(),
        }
    }
}

/// One inferred column type, in header column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(rename = "Column")]
    pub column: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub pattern: String,
}

/// Complete output of one validation run: findings plus inferred types, both
/// in discovery order. An empty findings list is the clean case, not a
/// distinct state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub findings: Vec<Finding>,
    pub types: Vec<TypeRecord>,
}

impl ValidationOutcome {
    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }

    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.findings.iter().filter(|f| f.kind == kind).count()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
