//! Renders the AST in the fixed depth-first preorder textual form: one
//! node per line, two-space indent per depth, `tag[ value]` where the
//! value field is present only for nodes that carry one.

use snlc_util::Symbol;

use crate::ast::*;

pub fn render_ast(program: &Program) -> String {
    let mut out = String::new();
    render_program(&mut out, program, 0);
    out
}

fn line(out: &mut String, depth: usize, tag: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(tag);
    out.push('\n');
}

fn line_val(out: &mut String, depth: usize, tag: &str, value: impl std::fmt::Display) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(tag);
    out.push_str("[ ");
    out.push_str(&value.to_string());
    out.push(']');
    out.push('\n');
}

fn render_program(out: &mut String, program: &Program, depth: usize) {
    line(out, depth, "Program");
    line_val(out, depth + 1, "ProgHead", program.head.name.as_str());
    if let Some(td) = &program.type_decls {
        render_type_decls(out, td, depth + 1);
    }
    if let Some(vd) = &program.var_decls {
        render_var_decls(out, vd, depth + 1);
    }
    for pd in &program.proc_decls {
        render_proc_decl(out, pd, depth + 1);
    }
    render_stmt_list(out, &program.body, depth + 1);
}

fn render_type_decls(out: &mut String, decls: &TypeDecls, depth: usize) {
    line(out, depth, "TypeDecls");
    for d in &decls.decls {
        render_decl(out, d, depth + 1);
    }
}

fn render_var_decls(out: &mut String, decls: &VarDecls, depth: usize) {
    line(out, depth, "VarDecls");
    for d in &decls.groups {
        render_decl(out, d, depth + 1);
    }
}

fn render_proc_decl(out: &mut String, proc: &ProcDecl, depth: usize) {
    line_val(out, depth, "ProcDecl", proc.name.as_str());
    if let Some(params) = &proc.params {
        render_param_list(out, params, depth + 1);
    }
    if let Some(td) = &proc.type_decls {
        render_type_decls(out, td, depth + 1);
    }
    if let Some(vd) = &proc.var_decls {
        render_var_decls(out, vd, depth + 1);
    }
    render_stmt_list(out, &proc.body, depth + 1);
}

fn render_param_list(out: &mut String, params: &ParamList, depth: usize) {
    line(out, depth, "ParamList");
    for d in &params.groups {
        render_decl(out, d, depth + 1);
    }
}

fn render_decl(out: &mut String, decl: &Decl, depth: usize) {
    match decl.mode {
        Some(ParamMode::Value) => line_val(out, depth, "Decl", "val"),
        Some(ParamMode::Var) => line_val(out, depth, "Decl", "var"),
        None => line(out, depth, "Decl"),
    }
    render_type_name(out, &decl.ty, depth + 1);
    for (name, _) in &decl.names {
        render_name(out, *name, depth + 1);
    }
}

fn render_name(out: &mut String, name: Symbol, depth: usize) {
    line_val(out, depth, "Id", name.as_str());
}

fn render_type_name(out: &mut String, ty: &TypeName, depth: usize) {
    match ty {
        TypeName::Integer(_) => line(out, depth, "IntegerT"),
        TypeName::Char(_) => line(out, depth, "CharT"),
        TypeName::Named(name, _) => line_val(out, depth, "NamedT", name.as_str()),
        TypeName::Array {
            low, high, elem, ..
        } => {
            line_val(out, depth, "ArrayT", format!("{low}..{high}"));
            render_type_name(out, elem, depth + 1);
        }
        TypeName::Record { fields, .. } => {
            line(out, depth, "RecordT");
            for field in fields {
                render_decl(out, field, depth + 1);
            }
        }
    }
}

fn render_stmt_list(out: &mut String, stmts: &StmtList, depth: usize) {
    line(out, depth, "StmtList");
    for stmt in &stmts.stmts {
        render_stmt(out, stmt, depth + 1);
    }
}

fn render_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    match stmt {
        Stmt::Assign(s) => {
            line(out, depth, "AssignStmt");
            render_expr(out, &s.target, depth + 1);
            render_expr(out, &s.value, depth + 1);
        }
        Stmt::If(s) => {
            line(out, depth, "IfStmt");
            render_expr(out, &s.cond, depth + 1);
            render_stmt_list(out, &s.then_branch, depth + 1);
            render_stmt_list(out, &s.else_branch, depth + 1);
        }
        Stmt::While(s) => {
            line(out, depth, "WhileStmt");
            render_expr(out, &s.cond, depth + 1);
            render_stmt_list(out, &s.body, depth + 1);
        }
        Stmt::Read(s) => {
            line(out, depth, "ReadStmt");
            render_name(out, s.target.name, depth + 1);
        }
        Stmt::Write(s) => {
            line(out, depth, "WriteStmt");
            render_expr(out, &s.value, depth + 1);
        }
        Stmt::Call(s) => {
            line(out, depth, "CallStmt");
            line_val(out, depth + 1, "ProcId", s.name.as_str());
            line(out, depth + 1, "ArgList");
            for arg in &s.args {
                render_expr(out, arg, depth + 2);
            }
        }
    }
}

fn render_expr(out: &mut String, expr: &Expr, depth: usize) {
    match expr {
        Expr::IntConst(v, _) => line_val(out, depth, "IntConst", v),
        Expr::IdRef(r) => line_val(out, depth, "IdRef", r.name.as_str()),
        Expr::ArrayAccess { base, index, .. } => {
            line(out, depth, "ArrayAccess");
            render_expr(out, base, depth + 1);
            render_expr(out, index, depth + 1);
        }
        Expr::FieldAccess { base, field, .. } => {
            line(out, depth, "FieldAccess");
            render_expr(out, base, depth + 1);
            render_name(out, *field, depth + 1);
        }
        Expr::BinOp { op, lhs, rhs, .. } => {
            line_val(out, depth, "BinOp", op.as_str());
            render_expr(out, lhs, depth + 1);
            render_expr(out, rhs, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_minimal_program() {
        let (program, _) = crate::parse("program p begin end.").unwrap();
        let text = render_ast(&program);
        assert!(text.starts_with("Program\n"));
        assert!(text.contains("ProgHead[ p]"));
        assert!(text.contains("StmtList"));
    }

    #[test]
    fn indentation_is_two_spaces_per_depth() {
        let (program, _) = crate::parse("program p var integer x; begin x:=1 end.").unwrap();
        let text = render_ast(&program);
        let assign_line = text.lines().find(|l| l.contains("AssignStmt")).unwrap();
        assert!(assign_line.starts_with("    AssignStmt"));
    }
}
