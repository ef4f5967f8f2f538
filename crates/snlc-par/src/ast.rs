//! The SNL abstract syntax tree.
//!
//! One enum variant per grammar tag, typed payload fields, a [`Span`] on
//! every node. Replaces the tag-and-free-form-value tree of the language
//! this parser was modeled on with an ordinary algebraic data type: a
//! `match` without a wildcard arm is the tree walk's exhaustiveness check.

use snlc_util::{Span, Symbol};

/// Whether a declaration group names value parameters, reference (`var`)
/// parameters, or isn't a parameter group at all (plain `VarDecls`/record
/// fields, where the distinction doesn't apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    Value,
    Var,
}

/// A single `TypeName IdList` declaration group — shared by `VarDecls`,
/// `RecordT` fields, and `ParamList` groups. `mode` is `Some` only for
/// parameter groups, where it distinguishes `val` from `var`.
#[derive(Debug, Clone)]
pub struct Decl {
    pub mode: Option<ParamMode>,
    pub ty: TypeName,
    pub names: Vec<(Symbol, Span)>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum TypeName {
    Integer(Span),
    Char(Span),
    Named(Symbol, Span),
    Array {
        low: i64,
        high: i64,
        elem: Box<TypeName>,
        span: Span,
    },
    Record {
        fields: Vec<Decl>,
        span: Span,
    },
}

impl TypeName {
    pub fn span(&self) -> Span {
        match self {
            TypeName::Integer(s)
            | TypeName::Char(s)
            | TypeName::Named(_, s)
            | TypeName::Array { span: s, .. }
            | TypeName::Record { span: s, .. } => *s,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeDecls {
    pub decls: Vec<Decl>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VarDecls {
    pub groups: Vec<Decl>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ParamList {
    pub groups: Vec<Decl>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ProcDecl {
    pub name: Symbol,
    pub name_span: Span,
    pub params: Option<ParamList>,
    pub type_decls: Option<TypeDecls>,
    pub var_decls: Option<VarDecls>,
    pub body: StmtList,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ProgHead {
    pub name: Symbol,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Program {
    pub head: ProgHead,
    pub type_decls: Option<TypeDecls>,
    pub var_decls: Option<VarDecls>,
    pub proc_decls: Vec<ProcDecl>,
    pub body: StmtList,
    pub span: Span,
}

/// An identifier used as a value reference (as opposed to the bare `Symbol`
/// used for declaration names, which never needs its own typed expression).
#[derive(Debug, Clone)]
pub struct IdRef {
    pub name: Symbol,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Eq,
}

impl BinOpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Lt => "<",
            BinOpKind::Eq => "=",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Expr {
    IntConst(i64, Span),
    IdRef(IdRef),
    ArrayAccess {
        base: Box<Expr>,
        index: Box<Expr>,
        span: Span,
    },
    FieldAccess {
        base: Box<Expr>,
        field: Symbol,
        field_span: Span,
        span: Span,
    },
    BinOp {
        op: BinOpKind,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::IntConst(_, s) => *s,
            Expr::IdRef(r) => r.span,
            Expr::ArrayAccess { span, .. }
            | Expr::FieldAccess { span, .. }
            | Expr::BinOp { span, .. } => *span,
        }
    }

    /// Whether this expression denotes an addressable place (`IdRef`,
    /// `ArrayAccess`, or `FieldAccess`) as opposed to a pure value like a
    /// `BinOp` or `IntConst`. Used by the analyzer to reject non-places as
    /// `var`-parameter actuals.
    pub fn is_place(&self) -> bool {
        matches!(self, Expr::IdRef(_) | Expr::ArrayAccess { .. } | Expr::FieldAccess { .. })
    }
}

#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub target: Expr,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub cond: Box<Expr>,
    pub then_branch: StmtList,
    pub else_branch: StmtList,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub cond: Box<Expr>,
    pub body: StmtList,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReadStmt {
    pub target: IdRef,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WriteStmt {
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct CallStmt {
    pub name: Symbol,
    pub name_span: Span,
    pub args: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Assign(AssignStmt),
    If(IfStmt),
    While(WhileStmt),
    Read(ReadStmt),
    Write(WriteStmt),
    Call(CallStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Assign(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::Read(s) => s.span,
            Stmt::Write(s) => s.span,
            Stmt::Call(s) => s.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StmtList {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl StmtList {
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}
