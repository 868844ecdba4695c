use std::fs;

use brt::{
    config::{Config, FunctionScope},
    error::{Error, RuntimeError},
    run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_examples_match_their_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "brt"))
    {
        let path = entry.path();
        let source = fs::read(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let mut out = Vec::new();
        if let Err(e) = run(&source, &mut out, Config::default()) {
            panic!("Script {path:?} failed:\nError: {e}");
        }
        assert_eq!(String::from_utf8_lossy(&out), expected, "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn output_with(src: &str, config: Config) -> String {
    let mut out = Vec::new();
    if let Err(e) = run(src.as_bytes(), &mut out, config) {
        panic!("Script failed: {e}\n{src}");
    }
    String::from_utf8(out).unwrap()
}

fn assert_success(src: &str, expected: &str) {
    assert_eq!(output_with(src, Config::default()), expected);
}

fn assert_failure(src: &str) -> Error {
    match run(src.as_bytes(), std::io::sink(), Config::default()) {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match assert_failure(src) {
        Error::Runtime(e) => e,
        other => panic!("Expected a runtime error, got: {other}"),
    }
}

#[test]
fn declarations_and_arithmetic() {
    assert_success("var x = 3; var y = 4; print x + y;", "7\n");
    assert_success("print 10 / 4;", "2.5\n");
    assert_success("print 7 % 4;", "3\n");
    assert_success("print 2 * 3 + 1;", "7\n");
    assert_success("print -2 + 5;", "3\n");
    assert_success("var nothing; print nothing;", "nil\n");
}

#[test]
fn arithmetic_is_right_associative() {
    // 1 - (2 - 3)
    assert_success("print 1 - 2 - 3;", "2\n");
    // 8 / (4 / 2)
    assert_success("print 8 / 4 / 2;", "4\n");
}

#[test]
fn strings_concatenate() {
    assert_success("var who = \"world\"; print \"hello \" + who;", "hello world\n");
    assert_success("print \"a\" ++ \"b\";", "ab\n");
}

#[test]
fn comparisons_and_logic() {
    assert_success("print 1 < 2;", "true\n");
    assert_success("print 2 <= 1;", "false\n");
    assert_success("print \"a\" == \"a\";", "true\n");
    assert_success("print nil != nil;", "false\n");
    assert_success("print true && false;", "false\n");
    assert_success("print (1 > 2) || (3 > 2);", "true\n");
    assert_success("print !true;", "false\n");
    assert_success("print !nil;", "true\n");
    assert_success("print !\"text\";", "true\n");
}

#[test]
fn keyword_aliases() {
    assert_success("yo x = bet; hmm x yap \"yes\"; nah yap \"no\";", "yes\n");
    assert_success("yo n = 0; vibin n < 2 { yap n; n++; }", "0\n1\n");
    assert_success("VAR shout = CAP; PRINT shout;", "false\n");
    assert_success("yap nada;", "nil\n");
}

#[test]
fn if_chains() {
    let src = "var n = 2;
               if n == 1 print \"one\";
               elif n == 2 print \"two\";
               else print \"many\";";
    assert_success(src, "two\n");

    let src = "var n = 3;
               if n == 1 { print \"one\"; } else if n == 3 { print \"three\"; }";
    assert_success(src, "three\n");

    assert_success("if false print 1; else print 2;", "2\n");
    assert_success("if false print 1;", "");
}

#[test]
fn loops() {
    assert_success("var i = 0; while i < 3 { print i; i++; }", "0\n1\n2\n");
    assert_success("while false { print 1; }", "");
    assert_success("for (var i = 3; i > 0; i--) print i;", "3\n2\n1\n");

    let src = "var total = 0;
               for (var i = 1; i <= 4; i++) { total = total + i; }
               print total;";
    assert_success(src, "10\n");
}

#[test]
fn for_initializer_is_scoped_to_the_loop() {
    let err = runtime_failure("for (var i = 0; i < 1; i++) {} print i;");
    assert!(matches!(err, RuntimeError::UndefinedIdentifier { ref name, .. } if name == "i"));
}

#[test]
fn blocks_shadow_and_reassign() {
    assert_success("var a = 1; { var a = 2; print a; } print a;", "2\n1\n");
    assert_success("var a = 1; { a = 2; } print a;", "2\n");
    assert_success("var a = 1; { { a = a + 5; } } print a;", "6\n");
}

#[test]
fn functions() {
    let src = "fun add(a, b) { return a + b; }
               print add(1, 2);";
    assert_success(src, "3\n");

    let src = "fun fib(n) { if n < 2 return n; return fib(n - 1) + fib(n - 2); }
               print fib(10);";
    assert_success(src, "55\n");

    let src = "fun greet(name) { print \"hi \" + name; }
               greet(\"bo\");";
    assert_success(src, "hi bo\n");
}

#[test]
fn functions_are_hoisted() {
    let src = "print twice(2);
               fun twice(n) { return n * 2; }";
    assert_success(src, "4\n");

    let src = "{ print inner(); fun inner() { return \"in\"; } }";
    assert_success(src, "in\n");
}

#[test]
fn return_without_value_is_nil() {
    assert_success("fun f() { return; } print f();", "nil\n");
    assert_success("fun f() { print 1; return } print f();", "1\nnil\n");
    assert_success("fun f() { } print f();", "nil\n");
}

#[test]
fn return_stops_the_function() {
    let src = "fun f() {
                   var i = 0;
                   while true { i++; if i == 3 return i; }
               }
               print f();";
    assert_success(src, "3\n");
}

#[test]
fn top_level_return_stops_the_program() {
    assert_success("print 1; return; print 2;", "1\n");
}

#[test]
fn increment_and_decrement() {
    assert_success("var n = 1; n++; n++; n--; print n;", "2\n");
    assert_success("var n = 0; { n++; } print n;", "1\n");
}

#[test]
fn functions_see_their_declaration_scope() {
    let src = "var x = \"global\";
               fun show() { print x; }
               fun test() { var x = \"local\"; show(); }
               test();";
    assert_success(src, "global\n");

    let src = "fun outer() {
                   var count = 10;
                   fun bump() { count = count + 1; }
                   bump(); bump();
                   return count;
               }
               print outer();";
    assert_success(src, "12\n");
}

#[test]
fn call_site_scope_sees_caller_locals() {
    let src = "var x = \"global\";
               fun show() { print x; }
               fun test() { var x = \"local\"; show(); }
               test();";
    let config = Config::default().with_function_scope(FunctionScope::CallSite);
    assert_eq!(output_with(src, config), "local\n");
}

#[test]
fn arguments_are_evaluated_in_the_caller() {
    let src = "fun id(v) { return v; }
               var v = 5;
               print id(v + 1);";
    assert_success(src, "6\n");
}

#[test]
fn vibe_check_is_a_number() {
    assert_success("print vibeCheck() > 0;", "true\n");
}

#[test]
fn comments_are_ignored() {
    assert_success("// leading comment\nprint 1; // trailing\n", "1\n");
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut out = Vec::<u8>::new();
    assert!(run(b"print 1; print missing;", &mut out, Config::default()).is_err());
    assert_eq!(out, b"1\n");
}

#[test]
fn runtime_failures() {
    assert!(matches!(runtime_failure("var a = 1; var a = 2;"),
                     RuntimeError::IdentifierAlreadyExists { line: 1, .. }));
    assert!(matches!(runtime_failure("y = 3;"), RuntimeError::UndefinedIdentifier { .. }));
    assert!(matches!(runtime_failure("print z;"), RuntimeError::UndefinedIdentifier { .. }));
    assert!(matches!(runtime_failure("print \"a\" + 1;"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_failure("print 1 == \"1\";"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_failure("print -\"a\";"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_failure("print 1 && true;"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_failure("if 1 print 1;"), RuntimeError::ExpectedBoolean { .. }));
    assert!(matches!(runtime_failure("while nil {}"), RuntimeError::ExpectedBoolean { .. }));
    assert!(matches!(runtime_failure("var s = \"a\"; s++;"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_failure("n++;"), RuntimeError::UndefinedIdentifier { .. }));
    assert!(matches!(runtime_failure("nope();"), RuntimeError::UndefinedIdentifier { .. }));
    assert!(matches!(runtime_failure("fun f(a) {} f();"),
                     RuntimeError::ArgumentCountMismatch { expected: 1,
                                                           found: 0,
                                                           .. }));
}

#[test]
fn runtime_error_messages() {
    assert_eq!(runtime_failure("print \"a\" + 1;").to_string(),
               "[line 1] Error at '+': operands must be of type string");
    assert_eq!(runtime_failure("\n\nprint q;").to_string(),
               "[line 3] Error at 'q': undefined identifier");
    assert_eq!(runtime_failure("print nil != false;").to_string(),
               "[line 1] Error at '!=': operands must be of the same type");
}

#[test]
fn unbounded_recursion_is_a_stack_overflow() {
    let src = "fun down(n) { return down(n + 1); } down(0);";
    let config = Config::default().with_max_call_depth(32);

    match run(src.as_bytes(), std::io::sink(), config) {
        Err(Error::Runtime(RuntimeError::StackOverflow { limit, .. })) => assert_eq!(limit, 32),
        other => panic!("Expected a stack overflow, got: {other:?}"),
    }
}

#[test]
fn recursion_within_the_limit_succeeds() {
    let src = "fun count(n) { if n == 0 return 0; return 1 + count(n - 1); } print count(20);";
    let config = Config::default().with_max_call_depth(21);
    assert_eq!(output_with(src, config), "20\n");
}

#[test]
fn syntax_errors_exit_with_data_error() {
    assert_eq!(assert_failure("print 1").exit_code(), 65);
    assert_eq!(assert_failure("var = 2;").exit_code(), 65);
    assert_eq!(assert_failure("print \"open;").exit_code(), 65);
    assert_eq!(assert_failure("print 1 | 2;").exit_code(), 65);
    assert_eq!(assert_failure("{ print 1;").exit_code(), 65);
    assert_eq!(assert_failure("fun f() {} fun f() {}").exit_code(), 65);
    assert_eq!(assert_failure("print nope;").exit_code(), 1);
}

#[test]
fn duplicate_functions_fail_to_parse_in_either_order() {
    let inner_first = "{ fun f() { return 1; } print f(); } fun f() { return 2; } print f();";
    let outer_first = "fun f() { return 2; } { fun f() { return 1; } print f(); }";

    for src in [inner_first, outer_first] {
        let err = assert_failure(src);
        assert_eq!(err.exit_code(), 65, "{src}");
        assert_eq!(err.to_string(), "[line 1] Error at 'f': identifier already exists");
    }
}

#[test]
fn deep_nesting_is_a_parse_error() {
    let src = format!("print {}1{};", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(assert_failure(&src).exit_code(), 65);

    let src = format!("print {}1{};", "(".repeat(200), ")".repeat(200));
    assert_success(&src, "1\n");
}

#[test]
fn long_operator_chains_evaluate() {
    let src = format!("print {}1;", "1 + ".repeat(2_000));
    assert_success(&src, "2001\n");
}
