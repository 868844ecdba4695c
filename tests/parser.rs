use brt::{
    ast::{Expr, Node, Stmt},
    config::{Config, ErrorMode},
    error::{Error, ParseError},
    parse_source,
};
use pretty_assertions::assert_eq;

fn printed(src: &str) -> Vec<String> {
    parse_source(src.as_bytes(), &Config::default()).unwrap_or_else(|e| panic!("{e}"))
                                                    .iter()
                                                    .filter_map(Node::expr)
                                                    .map(ToString::to_string)
                                                    .collect()
}

fn parse_errors(src: &str, mode: ErrorMode) -> Vec<ParseError> {
    match parse_source(src.as_bytes(), &Config::default().with_error_mode(mode)) {
        Err(Error::Parse(errors)) => errors,
        other => panic!("Expected parse errors, got: {other:?}"),
    }
}

#[test]
fn precedence_forms() {
    assert_eq!(printed("1 + 2 * 3"), ["(+ 1 (* 2 3))"]);
    assert_eq!(printed("(1 + 2) * 3"), ["(* (group (+ 1 2)) 3)"]);
    assert_eq!(printed("1 < 2 == true"), ["(== (< 1 2) true)"]);
    assert_eq!(printed("6 / 3 % 2"), ["(/ 6 (% 3 2))"]);
    assert_eq!(printed("-1 + 2"), ["(+ (- 1) 2)"]);
    assert_eq!(printed("!!yes"), ["(! (! yes))"]);
}

#[test]
fn same_level_operators_nest_to_the_right() {
    assert_eq!(printed("1 - 2 - 3"), ["(- 1 (- 2 3))"]);
    assert_eq!(printed("1 - 2 + 3"), ["(- 1 (+ 2 3))"]);
    assert_eq!(printed("a == b != c"), ["(== a (!= b c))"]);
}

#[test]
fn logical_operators_bind_tightest() {
    assert_eq!(printed("1 < a && b"), ["(< 1 (&& a b))"]);
    assert_eq!(printed("a || b && c"), ["(|| a (&& b c))"]);
}

#[test]
fn literals_print_their_canonical_text() {
    assert_eq!(printed("\"hi there\" 42 2.50 bet nada"),
               ["hi there", "42", "2.50", "true", "nil"]);
}

#[test]
fn statements_print_their_operand() {
    assert_eq!(printed("print 1 + 2; var x = 3; x = x * 2; if x > 1 {} f(1, x);"),
               ["(+ 1 2)", "3", "(* x 2)", "(> x 1)"]);
}

#[test]
fn calls_nest_inside_expressions() {
    assert_eq!(printed("add(1, mul(2, 3)) + 4"), ["(+ (call add 1 (call mul 2 3)) 4)"]);
}

#[test]
fn if_statements_collect_every_clause() {
    let nodes = parse_source(b"if a print 1; elif b print 2; else if c print 3; else print 4;",
                             &Config::default()).unwrap();
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        Node::Stmt(Stmt::If { else_ifs,
                              else_branch,
                              .. }) => {
            assert_eq!(else_ifs.len(), 2);
            assert!(else_branch.is_some());
        },
        other => panic!("Expected an if statement, got {other:?}"),
    }
}

#[test]
fn blocks_end_with_a_close_marker() {
    let nodes = parse_source(b"{ print 1;\n}", &Config::default()).unwrap();
    match &nodes[0] {
        Node::Stmt(Stmt::Block { nodes, .. }) => {
            assert!(matches!(nodes.last(), Some(Node::Stmt(Stmt::CloseBlock { line: 2 }))));
        },
        other => panic!("Expected a block, got {other:?}"),
    }
}

#[test]
fn for_clauses_are_optional() {
    let nodes = parse_source(b"for (;;) { return; }", &Config::default()).unwrap();
    assert!(matches!(&nodes[0],
                     Node::Stmt(Stmt::For { init: None,
                                            cond: None,
                                            update: None,
                                            .. })));
}

#[test]
fn missing_var_initializer_is_nil() {
    let nodes = parse_source(b"var x;", &Config::default()).unwrap();
    assert!(matches!(&nodes[0],
                     Node::Stmt(Stmt::VarDeclare { init: Expr::Literal { .. }, .. })));
    assert_eq!(nodes[0].expr().unwrap().to_string(), "nil");
}

#[test]
fn error_messages_name_the_offending_token() {
    let errors = parse_errors("print 1\nprint 2;", ErrorMode::FailFast);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "[line 2] Error at 'print': missing ';'");

    let errors = parse_errors("var 5 = 1;", ErrorMode::FailFast);
    assert_eq!(errors[0].to_string(), "[line 1] Error at '5': invalid variable name");

    let errors = parse_errors("var x = ;", ErrorMode::FailFast);
    assert_eq!(errors[0].to_string(),
               "[line 1] Error at '=': expression after assignment expected");

    let errors = parse_errors("print (1;", ErrorMode::FailFast);
    assert_eq!(errors[0].to_string(), "[line 1] Error at ';': missing ')'");

    let errors = parse_errors("print 1 +", ErrorMode::FailFast);
    assert_eq!(errors[0].to_string(), "[line 1] Error at '+': expression expected");
}

#[test]
fn operands_must_share_the_operator_line() {
    let errors = parse_errors("print 1 +\n2;", ErrorMode::FailFast);
    assert!(matches!(errors[0], ParseError::ExpressionExpected { line: 1, .. }));
}

#[test]
fn else_without_if_is_rejected() {
    let errors = parse_errors("else print 1;", ErrorMode::FailFast);
    assert!(matches!(errors[0], ParseError::MissingIfBranch { .. }));
}

#[test]
fn duplicate_functions_are_rejected_in_enclosing_blocks() {
    let errors = parse_errors("fun f() {} { fun f() {} }", ErrorMode::FailFast);
    assert_eq!(errors[0].to_string(), "[line 1] Error at 'f': identifier already exists");

    // Sibling blocks do not see each other.
    assert!(parse_source(b"{ fun g() {} } { fun g() {} }", &Config::default()).is_ok());
}

#[test]
fn duplicate_functions_are_rejected_before_the_outer_declaration() {
    let errors = parse_errors("{ fun f() {} }\nfun f() {}", ErrorMode::FailFast);
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], ParseError::IdentifierAlreadyExists { at, line: 1 } if at == "f"));

    let errors = parse_errors("fun outer() { fun f() {} } fun f() {}", ErrorMode::FailFast);
    assert!(matches!(errors[0], ParseError::IdentifierAlreadyExists { .. }));

    let errors = parse_errors("fun f() {} fun f() {}", ErrorMode::FailFast);
    assert!(matches!(errors[0], ParseError::IdentifierAlreadyExists { .. }));
}

#[test]
fn deeply_nested_groupings_are_rejected() {
    let src = format!("print {};", "(".repeat(10_000));
    let errors = parse_errors(&src, ErrorMode::FailFast);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ParseError::TooDeeplyNested { line: 1, .. }));
    assert_eq!(errors[0].to_string(), "[line 1] Error at '(': expression nested too deeply");
}

#[test]
fn nesting_limit_is_configurable() {
    let config = Config::default().with_max_nesting_depth(8);
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert!(parse_source(nested(6).as_bytes(), &config).is_ok());
    assert!(matches!(parse_source(nested(8).as_bytes(), &config),
                     Err(Error::Parse(ref errors)) if matches!(errors[0], ParseError::TooDeeplyNested { .. })));

    let negations = format!("{}1", "-".repeat(20));
    assert!(matches!(parse_source(negations.as_bytes(), &config),
                     Err(Error::Parse(ref errors)) if matches!(errors[0], ParseError::TooDeeplyNested { .. })));

    let blocks = format!("{}{}", "{".repeat(20), "}".repeat(20));
    assert!(matches!(parse_source(blocks.as_bytes(), &config),
                     Err(Error::Parse(ref errors)) if matches!(errors[0], ParseError::TooDeeplyNested { .. })));
}

#[test]
fn statements_are_not_operands() {
    let errors = parse_errors("print var x = 1;;", ErrorMode::FailFast);
    assert!(matches!(errors[0], ParseError::ExpressionExpected { .. }));
}

#[test]
fn too_many_arguments() {
    let args = vec!["1"; 256].join(", ");
    let errors = parse_errors(&format!("f({args});"), ErrorMode::FailFast);
    assert!(matches!(errors[0], ParseError::TooManyArguments { .. }));

    let args = vec!["1"; 255].join(", ");
    assert!(parse_source(format!("f({args});").as_bytes(), &Config::default()).is_ok());
}

#[test]
fn collect_mode_reports_every_error() {
    let errors = parse_errors("var = 1;\nprint (2;\nprint 3;", ErrorMode::CollectAll);
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(messages,
               ["[line 1] Error at '=': invalid variable name",
                "[line 2] Error at ';': missing ')'"]);
}

#[test]
fn fail_fast_stops_at_the_first_error() {
    let errors = parse_errors("var = 1;\nprint (2;", ErrorMode::FailFast);
    assert_eq!(errors.len(), 1);
}

#[test]
fn ast_serializes_to_json() {
    let nodes = parse_source(b"print 1;", &Config::default()).unwrap();
    let json = serde_json::to_value(&nodes).unwrap();
    assert_eq!(json[0]["Stmt"]["Print"]["expr"]["Literal"]["kind"], "NUMBER");
    assert_eq!(json[0]["Stmt"]["Print"]["line"], 1);
}
