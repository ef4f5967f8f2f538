//! The semantic analyzer: walks a parsed [`Program`], populating a
//! [`SymbolTable`] with types and storage offsets and collecting errors.
//!
//! Mirrors the control flow of the tree-walking analyzer this crate is
//! modeled on — pre-walk, then a single recursive descent — but as
//! exhaustive pattern matches over `snlc_par`'s typed AST instead of a
//! tag-dispatched handler lookup.

use snlc_par::{
    AssignStmt, BinOpKind, CallStmt, Decl, Expr, IdRef, IfStmt, ParamList, ParamMode, ProcDecl,
    Program, ReadStmt, Stmt, StmtList, TypeDecls, TypeName, VarDecls, WhileStmt, WriteStmt,
};
use snlc_util::Interner;

use crate::scope::{SymbolKind, SymbolTable};
use crate::types::{base_eq, Field, ProcParam, Type};

/// `typeOf`'s access parameter: whether an expression is being evaluated for
/// its value or for the storage location it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Value,
    Address,
}

pub struct SemanticAnalyzer {
    table: SymbolTable,
    errors: Vec<String>,
    listing: Vec<String>,
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
            errors: Vec::new(),
            listing: Vec::new(),
        }
    }

    /// Runs the analyzer over `program` to completion, consuming `self`.
    /// `interner` is needed only to mint the three predefined type names.
    pub fn run(mut self, program: &Program, interner: &mut Interner) -> (SymbolTable, Vec<String>, Vec<String>) {
        self.listing.push("--- Beginning of semantic analysis ---".to_string());
        self.init_predefined_types(interner);
        self.snapshot("predefined types");

        self.handle_program(program);

        self.snapshot("end of analysis");
        if self.errors.is_empty() {
            self.listing.push("completed without errors".to_string());
        } else {
            self.listing.push(format!("{} semantic errors", self.errors.len()));
        }
        (self.table, self.errors, self.listing)
    }

    fn snapshot(&mut self, label: &str) {
        self.listing.push(format!("--- scope snapshot: {label} ---"));
        self.listing.push(self.table.snapshot());
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(format!("error: {}", message.into()));
    }

    fn init_predefined_types(&mut self, interner: &mut Interner) {
        let integer = interner.intern("integer");
        self.table.insert(integer, SymbolKind::Type, Type::Integer, 0);
        let char_ = interner.intern("char");
        self.table.insert(char_, SymbolKind::Type, Type::Char, 0);
        let boolean = interner.intern("boolean");
        self.table.insert(boolean, SymbolKind::Type, Type::Boolean, 0);
    }

    /// The program name is inserted at level 0 like the predefined types,
    /// but its own declarations and body live one level deeper — unlike the
    /// source analyzer this crate is modeled on, which keeps them at level 0
    /// alongside the predefined types. See DESIGN.md for the reasoning.
    fn handle_program(&mut self, program: &Program) {
        self.table.insert(program.head.name, SymbolKind::Program, Type::Program, 0);
        self.table.enter_scope();

        if let Some(type_decls) = &program.type_decls {
            self.handle_type_decls(type_decls);
        }
        if let Some(var_decls) = &program.var_decls {
            self.handle_var_decls(var_decls);
        }
        for proc in &program.proc_decls {
            self.handle_proc_decl(proc);
        }
        self.check_stmt_list(&program.body);
    }

    fn handle_type_decls(&mut self, decls: &TypeDecls) {
        for decl in &decls.decls {
            for (name, _span) in &decl.names {
                if self.table.is_declared_in_current_scope(*name) {
                    self.error(format!("redeclared type {}", name.as_str()));
                    continue;
                }
                let resolved = self.resolve_type_name(&decl.ty);
                if resolved.is_unknown() {
                    self.error(format!("unresolved type {}", name.as_str()));
                    continue;
                }
                let alias = Type::Alias {
                    name: *name,
                    underlying: Box::new(resolved),
                };
                self.table.insert(*name, SymbolKind::Type, alias, 0);
            }
        }
        self.snapshot("after TypeDecls");
    }

    fn handle_var_decls(&mut self, decls: &VarDecls) {
        for group in &decls.groups {
            let ty = self.resolve_type_name(&group.ty);
            if ty.is_unknown() {
                continue;
            }
            if matches!(ty.base(), Type::Proc { .. } | Type::Program) || ty.size() == 0 {
                self.error(format!("cannot declare variable of type {ty}"));
                continue;
            }
            for (name, _span) in &group.names {
                if self.table.is_declared_in_current_scope(*name) {
                    self.error(format!("redeclared variable {}", name.as_str()));
                    continue;
                }
                let offset = self.table.allocate(ty.size());
                self.table.insert(*name, SymbolKind::Variable, ty.clone(), offset);
            }
        }
        self.snapshot("after VarDecls");
    }

    fn handle_proc_decl(&mut self, proc: &ProcDecl) {
        if self.table.is_declared_in_current_scope(proc.name) {
            self.error(format!("redeclared procedure {}", proc.name.as_str()));
            return;
        }
        let index = self
            .table
            .insert(proc.name, SymbolKind::Procedure, Type::Proc { params: Vec::new() }, 0);

        self.table.enter_scope();
        let params = self.handle_param_list(proc.params.as_ref());
        self.table.set_type(index, Type::Proc { params });
        self.snapshot(&format!("after parameters of procedure {}", proc.name.as_str()));

        if let Some(type_decls) = &proc.type_decls {
            self.handle_type_decls(type_decls);
        }
        if let Some(var_decls) = &proc.var_decls {
            self.handle_var_decls(var_decls);
        }
        self.check_stmt_list(&proc.body);

        self.snapshot(&format!("before popping scope of procedure {}", proc.name.as_str()));
        self.table.exit_scope();
    }

    fn handle_param_list(&mut self, params: Option<&ParamList>) -> Vec<ProcParam> {
        let mut signature = Vec::new();
        let Some(params) = params else {
            return signature;
        };
        for group in &params.groups {
            let is_var = group.mode == Some(ParamMode::Var);
            let ty = self.resolve_type_name(&group.ty);
            for (name, _span) in &group.names {
                if self.table.is_declared_in_current_scope(*name) {
                    self.error(format!("redeclared parameter {}", name.as_str()));
                    continue;
                }
                if ty.is_unknown() {
                    continue;
                }
                if !is_var && ty.size() == 0 {
                    self.error(format!("cannot declare parameter {} of size-zero type {ty}", name.as_str()));
                    continue;
                }
                let size = if is_var { 1 } else { ty.size() };
                let offset = self.table.allocate(size);
                let kind = if is_var { SymbolKind::VarParam } else { SymbolKind::ValueParam };
                self.table.insert(*name, kind, ty.clone(), offset);
                signature.push(ProcParam {
                    name: *name,
                    ty: ty.clone(),
                    is_var,
                });
            }
        }
        signature
    }

    fn resolve_type_name(&mut self, ty: &TypeName) -> Type {
        match ty {
            TypeName::Integer(_) => Type::Integer,
            TypeName::Char(_) => Type::Char,
            TypeName::Named(name, _) => match self.table.find(*name).cloned() {
                Some(entry) if entry.kind == SymbolKind::Type => entry.ty,
                Some(_) => {
                    self.error(format!("{} is not a type", name.as_str()));
                    Type::Unknown
                }
                None => {
                    self.error(format!("undeclared type {}", name.as_str()));
                    Type::Unknown
                }
            },
            TypeName::Array { low, high, elem, .. } => {
                if low > high {
                    self.error(format!("array bounds {low}..{high} are invalid: low exceeds high"));
                    return Type::Unknown;
                }
                let elem_ty = self.resolve_type_name(elem);
                if elem_ty.is_unknown() {
                    return Type::Unknown;
                }
                Type::Array {
                    low: *low,
                    high: *high,
                    elem: Box::new(elem_ty),
                }
            }
            TypeName::Record { fields, .. } => self.resolve_record_type(fields),
        }
    }

    fn resolve_record_type(&mut self, groups: &[Decl]) -> Type {
        self.table.enter_scope();
        let mut fields = Vec::new();
        let mut offset = 0i64;
        for group in groups {
            let field_ty = self.resolve_type_name(&group.ty);
            for (name, _span) in &group.names {
                if field_ty.is_unknown() {
                    continue;
                }
                if field_ty.size() == 0 {
                    self.error(format!("record field {} has zero-size type {field_ty}", name.as_str()));
                    continue;
                }
                if self.table.is_declared_in_current_scope(*name) {
                    self.error(format!("redeclared field {}", name.as_str()));
                    continue;
                }
                self.table.insert(*name, SymbolKind::Field, field_ty.clone(), offset);
                fields.push(Field {
                    name: *name,
                    ty: field_ty.clone(),
                    offset,
                });
                offset += field_ty.size();
            }
        }
        self.table.exit_scope();
        Type::Record { fields }
    }

    fn type_of(&mut self, expr: &Expr, access: Access) -> Type {
        match expr {
            Expr::IntConst(_, _) => Type::Integer,
            Expr::IdRef(id) => self.type_of_ident(id, access),
            Expr::ArrayAccess { base, index, .. } => {
                let base_ty = self.type_of(base, Access::Value);
                let index_ty = self.type_of(index, Access::Value);
                if base_ty.is_unknown() {
                    return Type::Unknown;
                }
                let elem = match base_ty.base() {
                    Type::Array { elem, .. } => (**elem).clone(),
                    _ => {
                        self.error(format!("array access on non-array type {base_ty}"));
                        return Type::Unknown;
                    }
                };
                if !index_ty.is_unknown() && !matches!(index_ty.base(), Type::Integer) {
                    self.error("array index must be integer");
                }
                elem
            }
            Expr::FieldAccess { base, field, .. } => {
                let base_ty = self.type_of(base, access);
                if base_ty.is_unknown() {
                    return Type::Unknown;
                }
                match base_ty.base() {
                    Type::Record { fields } => match fields.iter().find(|f| f.name == *field) {
                        Some(f) => f.ty.clone(),
                        None => {
                            self.error(format!("record has no field {}", field.as_str()));
                            Type::Unknown
                        }
                    },
                    _ => {
                        self.error(format!("field access on non-record type {base_ty}"));
                        Type::Unknown
                    }
                }
            }
            Expr::BinOp { op, lhs, rhs, .. } => self.type_of_binop(*op, lhs, rhs),
        }
    }

    fn type_of_ident(&mut self, id: &IdRef, access: Access) -> Type {
        let Some(entry) = self.table.find(id.name).cloned() else {
            self.error(format!("undeclared identifier {}", id.name.as_str()));
            return Type::Unknown;
        };
        match entry.kind {
            SymbolKind::Variable | SymbolKind::ValueParam | SymbolKind::VarParam | SymbolKind::Field => {}
            _ => {
                self.error(format!("{} is not a variable, parameter, or field", id.name.as_str()));
                return Type::Unknown;
            }
        }
        if access == Access::Address && entry.kind == SymbolKind::ValueParam {
            self.error(format!("cannot take address of value parameter {}", id.name.as_str()));
        }
        entry.ty
    }

    fn type_of_binop(&mut self, op: BinOpKind, lhs: &Expr, rhs: &Expr) -> Type {
        let l = self.type_of(lhs, Access::Value);
        let r = self.type_of(rhs, Access::Value);
        if l.is_unknown() || r.is_unknown() {
            return Type::Unknown;
        }
        match op {
            BinOpKind::Add | BinOpKind::Sub | BinOpKind::Mul | BinOpKind::Div => {
                if matches!(l.base(), Type::Integer) && matches!(r.base(), Type::Integer) {
                    Type::Integer
                } else {
                    self.error(format!("arithmetic operator {} requires integer operands", op.as_str()));
                    Type::Unknown
                }
            }
            BinOpKind::Lt | BinOpKind::Eq => {
                let comparable = matches!(
                    (l.base(), r.base()),
                    (Type::Integer, Type::Integer) | (Type::Char, Type::Char)
                );
                if comparable {
                    Type::Boolean
                } else {
                    self.error(format!(
                        "comparison operator {} requires matching integer or char operands",
                        op.as_str()
                    ));
                    Type::Unknown
                }
            }
        }
    }

    fn check_stmt_list(&mut self, stmts: &StmtList) {
        for stmt in &stmts.stmts {
            self.check_stmt(stmt);
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assign(s) => self.check_assign(s),
            Stmt::If(s) => self.check_if(s),
            Stmt::While(s) => self.check_while(s),
            Stmt::Read(s) => self.check_read(s),
            Stmt::Write(s) => self.check_write(s),
            Stmt::Call(s) => self.check_call(s),
        }
    }

    fn check_assign(&mut self, stmt: &AssignStmt) {
        let lhs = self.type_of(&stmt.target, Access::Address);
        let rhs = self.type_of(&stmt.value, Access::Value);
        if lhs.is_unknown() || rhs.is_unknown() {
            return;
        }
        if !base_eq(&lhs, &rhs) {
            self.error("type mismatch in assignment");
        }
    }

    fn check_if(&mut self, stmt: &IfStmt) {
        let cond = self.type_of(&stmt.cond, Access::Value);
        if !cond.is_unknown() && !matches!(cond.base(), Type::Boolean) {
            self.error("If condition must be Boolean");
        }
        self.check_stmt_list(&stmt.then_branch);
        self.check_stmt_list(&stmt.else_branch);
    }

    fn check_while(&mut self, stmt: &WhileStmt) {
        let cond = self.type_of(&stmt.cond, Access::Value);
        if !cond.is_unknown() && !matches!(cond.base(), Type::Boolean) {
            self.error("While condition must be Boolean");
        }
        self.check_stmt_list(&stmt.body);
    }

    fn check_read(&mut self, stmt: &ReadStmt) {
        let ty = self.type_of_ident(&stmt.target, Access::Address);
        if !ty.is_unknown() && !matches!(ty.base(), Type::Integer | Type::Char) {
            self.error("read target must be integer or char");
        }
    }

    fn check_write(&mut self, stmt: &WriteStmt) {
        let ty = self.type_of(&stmt.value, Access::Value);
        if !ty.is_unknown() && !matches!(ty.base(), Type::Integer | Type::Char) {
            self.error("write value must be integer or char");
        }
    }

    fn check_call(&mut self, stmt: &CallStmt) {
        let entry = match self.table.find(stmt.name).cloned() {
            Some(entry) => entry,
            None => {
                self.error(format!("undeclared procedure {}", stmt.name.as_str()));
                for arg in &stmt.args {
                    self.type_of(arg, Access::Value);
                }
                return;
            }
        };
        let params = match (&entry.kind, &entry.ty) {
            (SymbolKind::Procedure, Type::Proc { params }) => params.clone(),
            (SymbolKind::Procedure, _) => {
                self.error("internal error: malformed procedure signature");
                return;
            }
            _ => {
                self.error(format!("{} is not a procedure", stmt.name.as_str()));
                for arg in &stmt.args {
                    self.type_of(arg, Access::Value);
                }
                return;
            }
        };

        if params.len() != stmt.args.len() {
            self.error(format!(
                "procedure {} expects {} arguments, got {}",
                stmt.name.as_str(),
                params.len(),
                stmt.args.len()
            ));
        }

        for (i, arg) in stmt.args.iter().enumerate() {
            let Some(formal) = params.get(i) else {
                self.type_of(arg, Access::Value);
                continue;
            };
            let access = if formal.is_var { Access::Address } else { Access::Value };
            let actual_ty = self.type_of(arg, access);
            if formal.is_var && !arg.is_place() {
                self.error("cannot take address of a non-variable expression for var parameter");
            }
            if !actual_ty.is_unknown() && !base_eq(&formal.ty, &actual_ty) {
                self.error(format!(
                    "argument {} to procedure {} has wrong type",
                    i + 1,
                    stmt.name.as_str()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(source: &str) -> (SymbolTable, Vec<String>, Vec<String>) {
        let (program, mut interner) = snlc_par::parse(source).expect("parses");
        SemanticAnalyzer::new().run(&program, &mut interner)
    }

    #[test]
    fn simple_declarations_get_sequential_offsets() {
        let (table, errors, _) = analyze("program p var integer x,y; begin x:=1; y:=x+2 end.");
        assert!(errors.is_empty(), "{errors:?}");
        let x = table.entries().iter().find(|e| e.name.as_str() == "x").unwrap();
        let y = table.entries().iter().find(|e| e.name.as_str() == "y").unwrap();
        assert_eq!(x.level, 1);
        assert_eq!(x.offset, 0);
        assert_eq!(y.offset, 1);
    }

    #[test]
    fn assigning_a_char_to_an_integer_is_a_type_mismatch() {
        let (_, errors, _) = analyze("program p var integer x; char c; begin x:=c end.");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("type mismatch in assignment"));
    }

    #[test]
    fn type_alias_is_transparent_for_assignment() {
        let (_, errors, _) = analyze("program p type t=integer; var t a,b; begin a:=b end.");
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn nested_procedures_each_start_their_offsets_at_zero() {
        let source = "program p \
                       procedure q(integer a); var integer z; begin z:=a end; \
                       procedure r(integer a); var integer z; begin z:=a end; \
                       begin end.";
        let (table, errors, _) = analyze(source);
        assert!(errors.is_empty(), "{errors:?}");
        let zs: Vec<_> = table.entries().iter().filter(|e| e.name.as_str() == "z").collect();
        assert_eq!(zs.len(), 2);
        assert!(zs.iter().all(|z| z.offset == 1));
    }
}
