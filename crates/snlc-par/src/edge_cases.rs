//! Edge case tests for the SNL parser.

#[cfg(test)]
mod tests {
    use crate::{parse, ParseFailure, Stmt};

    #[test]
    fn empty_source_is_a_syntax_error() {
        // The grammar's `Program` is never optional: even an empty file
        // must fail expecting `'program'`, not silently produce nothing.
        assert!(parse("").is_err());
    }

    #[test]
    fn nested_if_requires_nonempty_branches() {
        let err = parse("program p begin if 1 = 1 then if 1 = 1 then fi fi end.");
        assert!(matches!(err, Err(ParseFailure::Syntax(_))));
    }

    #[test]
    fn if_without_else_synthesizes_empty_else_branch() {
        let (program, _) =
            parse("program p var integer x; begin if x = x then x:=1 fi end.").unwrap();
        match &program.body.stmts[0] {
            Stmt::If(s) => assert!(s.else_branch.is_empty()),
            other => panic!("expected IfStmt, got {other:?}"),
        }
    }

    #[test]
    fn procedure_with_no_parameters() {
        let (program, _) =
            parse("program p procedure q(); var integer z; begin z:=1 end; begin end.").unwrap();
        assert!(program.proc_decls[0].params.is_none());
    }

    #[test]
    fn var_parameter_mode_is_recorded() {
        let (program, _) =
            parse("program p procedure q(var integer a); begin a:=1 end; begin end.").unwrap();
        let params = program.proc_decls[0].params.as_ref().unwrap();
        assert_eq!(params.groups[0].mode, Some(crate::ParamMode::Var));
    }

    #[test]
    fn value_parameter_mode_is_recorded() {
        let (program, _) =
            parse("program p procedure q(integer a); begin a:=1 end; begin end.").unwrap();
        let params = program.proc_decls[0].params.as_ref().unwrap();
        assert_eq!(params.groups[0].mode, Some(crate::ParamMode::Value));
    }

    #[test]
    fn nested_procedures_parse_independently() {
        let source = "program p \
                       procedure q(); var integer z; begin z:=1 end; \
                       procedure r(); var integer z; begin z:=2 end; \
                       begin end.";
        let (program, _) = parse(source).unwrap();
        assert_eq!(program.proc_decls.len(), 2);
    }

    #[test]
    fn array_bounds_must_be_int_consts() {
        let err = parse("program p type t = array[x..9] of integer; begin end.");
        assert!(err.is_err());
    }

    #[test]
    fn record_field_access_chains_with_array_index() {
        let source = r#"
program p
type pair = record integer a; integer b; end;
type pairs = array[0..3] of pair;
var pairs xs;
begin
  xs[0].a := 1
end.
"#;
        let (program, _) = parse(source).unwrap();
        assert_eq!(program.body.stmts.len(), 1);
    }

    #[test]
    fn call_target_with_arguments() {
        let (program, _) =
            parse("program p procedure q(integer a); begin a:=a end; begin q(1+2) end.").unwrap();
        assert_eq!(program.body.stmts.len(), 1);
    }

    #[test]
    fn trailing_dot_is_mandatory() {
        let err = parse("program p begin end");
        assert!(matches!(err, Err(ParseFailure::Syntax(_))));
    }
}
