//! The semantic type IR: what a declared name or typed expression *is*, as
//! opposed to `snlc_par::ast::TypeName`, which is only the syntax that named
//! it. One algebraic type replaces the source system's dynamically-dispatched
//! type-class family; `size`/`base` are ordinary pattern matches instead of
//! virtual calls.

use snlc_util::Symbol;

/// A field inside a [`Type::Record`]: name, type, and the byte offset the
/// field starts at within the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: Symbol,
    pub ty: Type,
    pub offset: i64,
}

/// One formal parameter in a [`Type::Proc`] signature.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcParam {
    pub name: Symbol,
    pub ty: Type,
    pub is_var: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Integer,
    Char,
    Boolean,
    /// Error sentinel: an absorbing element that never generates a second
    /// error once produced. Size 0.
    Unknown,
    Alias {
        name: Symbol,
        underlying: Box<Type>,
    },
    Array {
        low: i64,
        high: i64,
        elem: Box<Type>,
    },
    Record {
        fields: Vec<Field>,
    },
    /// A procedure's signature. Carries no storage size of its own.
    Proc {
        params: Vec<ProcParam>,
    },
    /// Marker for the program-name entry; carries no storage size.
    Program,
}

impl Type {
    /// Storage size in the declaring scope's offset units. Delegates through
    /// aliases; zero for anything that isn't storable (`Unknown`, `Proc`,
    /// `Program`, or a malformed array/record).
    pub fn size(&self) -> i64 {
        match self {
            Type::Integer | Type::Char | Type::Boolean => 1,
            Type::Unknown | Type::Proc { .. } | Type::Program => 0,
            Type::Alias { underlying, .. } => underlying.size(),
            Type::Array { low, high, elem } => {
                if low <= high {
                    (high - low + 1) * elem.size()
                } else {
                    0
                }
            }
            Type::Record { fields } => fields.iter().map(|f| f.ty.size()).sum(),
        }
    }

    /// Strips aliases recursively, exposing the underlying structural type.
    pub fn base(&self) -> &Type {
        match self {
            Type::Alias { underlying, .. } => underlying.base(),
            other => other,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.base(), Type::Unknown)
    }

    /// Whether values of this type may legally be read, written, or held in
    /// a variable: `Unknown`, `Proc`, `Program`, and zero-size aggregates are
    /// excluded.
    pub fn is_storable(&self) -> bool {
        !matches!(self.base(), Type::Unknown | Type::Proc { .. } | Type::Program) && self.size() > 0
    }
}

/// Structural equality over `base()` forms: aliases are transparent, arrays
/// compare bounds and element type, records compare fields pairwise by name,
/// type, and offset.
pub fn base_eq(a: &Type, b: &Type) -> bool {
    match (a.base(), b.base()) {
        (Type::Integer, Type::Integer) => true,
        (Type::Char, Type::Char) => true,
        (Type::Boolean, Type::Boolean) => true,
        (Type::Unknown, Type::Unknown) => true,
        (Type::Program, Type::Program) => true,
        (Type::Array { low: l1, high: h1, elem: e1 }, Type::Array { low: l2, high: h2, elem: e2 }) => {
            l1 == l2 && h1 == h2 && base_eq(e1, e2)
        }
        (Type::Record { fields: f1 }, Type::Record { fields: f2 }) => {
            f1.len() == f2.len()
                && f1.iter().zip(f2.iter()).all(|(a, b)| {
                    a.name == b.name && a.offset == b.offset && base_eq(&a.ty, &b.ty)
                })
        }
        _ => false,
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Integer => write!(f, "integer"),
            Type::Char => write!(f, "char"),
            Type::Boolean => write!(f, "boolean"),
            Type::Unknown => write!(f, "unknown"),
            Type::Alias { name, underlying } => write!(f, "{}->{}", name.as_str(), underlying),
            Type::Array { low, high, elem } => write!(f, "array[{low}..{high}] of {elem}"),
            Type::Record { fields } => {
                write!(f, "record(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}@{}", field.name.as_str(), field.ty, field.offset)?;
                }
                write!(f, ")")
            }
            Type::Proc { params } => {
                write!(f, "procedure(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if p.is_var {
                        write!(f, "var ")?;
                    }
                    write!(f, "{}: {}", p.name.as_str(), p.ty)?;
                }
                write!(f, ")")
            }
            Type::Program => write!(f, "program"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_size_with_equal_bounds_is_one_element() {
        let ty = Type::Array {
            low: 3,
            high: 3,
            elem: Box::new(Type::Integer),
        };
        assert_eq!(ty.size(), 1);
    }

    #[test]
    fn array_size_with_high_below_low_is_zero() {
        let ty = Type::Array {
            low: 5,
            high: 2,
            elem: Box::new(Type::Integer),
        };
        assert_eq!(ty.size(), 0);
    }

    #[test]
    fn empty_record_has_size_zero_and_equals_another_empty_record() {
        let a = Type::Record { fields: vec![] };
        let b = Type::Record { fields: vec![] };
        assert_eq!(a.size(), 0);
        assert!(base_eq(&a, &b));
    }

    #[test]
    fn alias_is_transparent_for_equality_and_size() {
        let mut interner = snlc_util::Interner::new();
        let alias = Type::Alias {
            name: interner.intern("t"),
            underlying: Box::new(Type::Integer),
        };
        assert!(base_eq(&alias, &Type::Integer));
        assert_eq!(alias.size(), 1);
    }
}
