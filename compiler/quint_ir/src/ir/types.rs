//! Types and rows.

use crate::QuintId;

/// A type node.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Type {
    pub id: QuintId,
    pub kind: TypeKind,
}

/// Type variants.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Int,
    Bool,
    Str,
    /// Type variable (lowercase name).
    Var(String),
    /// Reference to a type definition (uppercase name).
    Const(String),
    Set(Box<Type>),
    List(Box<Type>),
    Fun { arg: Box<Type>, res: Box<Type> },
    Oper { args: Vec<Type>, res: Box<Type> },
    /// Tuple; fields are named by position, `"0"`, `"1"`, ...
    Tuple(Row),
    Record(Row),
    /// Sum type; one field per variant label, carrying the payload type.
    Sum(Row),
}

impl Type {
    pub fn new(id: QuintId, kind: TypeKind) -> Self {
        Type { id, kind }
    }

    /// The unit type, an empty closed record.
    pub fn unit(id: QuintId) -> Self {
        Self::new(id, TypeKind::Record(Row::empty()))
    }

    /// Type of a bare name reference: a variable when the name starts with a
    /// lowercase letter, a type constant otherwise.
    pub fn from_name(id: QuintId, name: impl Into<String>) -> Self {
        let name = name.into();
        if starts_lowercase(&name) {
            Self::new(id, TypeKind::Var(name))
        } else {
            Self::new(id, TypeKind::Const(name))
        }
    }

    /// Row of a tuple, record or sum type.
    pub fn row(&self) -> Option<&Row> {
        match &self.kind {
            TypeKind::Tuple(row) | TypeKind::Record(row) | TypeKind::Sum(row) => Some(row),
            _ => None,
        }
    }
}

/// Check whether a name starts with a lowercase letter.
pub fn starts_lowercase(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

/// A named field of a row.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowField {
    pub name: String,
    pub ty: Type,
}

impl RowField {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        RowField {
            name: name.into(),
            ty,
        }
    }
}

/// What follows the explicit fields of a row.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowTail {
    /// Closed row.
    #[default]
    Empty,
    /// Open row, extended by the named row variable.
    Var(String),
}

/// Ordered, uniquely named fields plus a tail.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub fields: Vec<RowField>,
    pub tail: RowTail,
}

impl Row {
    /// The empty closed row.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A row consisting only of a row variable.
    pub fn var(name: impl Into<String>) -> Self {
        Row {
            fields: Vec::new(),
            tail: RowTail::Var(name.into()),
        }
    }

    /// A closed row with the given fields.
    pub fn closed(fields: Vec<RowField>) -> Self {
        Row {
            fields,
            tail: RowTail::Empty,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.tail, RowTail::Var(_))
    }

    /// Field by name.
    pub fn field(&self, name: &str) -> Option<&RowField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
