use calcline::{
    Error, evaluate,
    error::{ErrorKind, ParseError},
    interpreter::evaluator::core::Context,
};
use pretty_assertions::assert_eq;

fn eval_in(context: &mut Context, src: &str) -> Result<f64, Error> {
    evaluate(src, context).map(|result| result.value)
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src, &mut Context::new()) {
        Ok(result) => assert_eq!(result.value, expected, "wrong value for '{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    match evaluate(src, &mut Context::new()) {
        Ok(result) => assert!((result.value - expected).abs() < 1e-9,
                              "'{src}' gave {}, expected about {expected}",
                              result.value),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_output(context: &mut Context, src: &str, expected: &str) {
    match evaluate(src, context) {
        Ok(result) => assert_eq!(result.to_string(), expected),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_kind(context: &mut Context, src: &str, kind: ErrorKind) {
    match evaluate(src, context) {
        Ok(result) => panic!("'{src}' succeeded with {result} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "wrong error for '{src}': {e}"),
    }
}

#[test]
fn precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3^2", 18.0);
    assert_value("1+7mod4", 4.0);
    assert_value("10-2*3+1", 5.0);
}

#[test]
fn operators_are_left_associative() {
    assert_value("8-3-2", 3.0);
    assert_value("20/2/5", 2.0);
    assert_value("2^3^2", 64.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("2^(3^2)", 512.0);
    assert_value("100mod7mod4", 2.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 2 +\t3 * 4 ", 14.0);
    assert_value("1 0 + 1", 11.0);
    assert_value("7 mod 4", 3.0);
}

#[test]
fn unary_minus() {
    assert_value("-1-1+-2", -4.0);
    assert_value("3*-1", -3.0);
    assert_value("-(2+3)*2", -10.0);
    assert_value("2^-1", 0.5);
    assert_value("-sqrt(16)+1", -3.0);

    let mut context = Context::new();
    context.set_variable("x", 5.0);
    assert_eq!(eval_in(&mut context, "-x*2").unwrap(), -10.0);
    assert_eq!(eval_in(&mut context, "x-(-2)").unwrap(), 7.0);
}

#[test]
fn double_minus_is_a_syntax_error() {
    let mut context = Context::new();
    assert_kind(&mut context, "x--2", ErrorKind::Syntax);

    context.set_variable("x", 1.0);
    let err = evaluate("x--2", &mut context).unwrap_err();
    assert_eq!(err,
               Error::Parse(ParseError::DoubleNegation { position: 2,
                                                         fragment: "x--2".to_string(), }));
}

#[test]
fn builtin_functions() {
    assert_value("sqrt(16)", 4.0);
    assert_value("pow(2,10)", 1024.0);
    assert_value("floor(2.7)+ceil(2.1)", 5.0);
    assert_value("round(2.5)", 2.0);
    assert_value("round(3.5)", 4.0);
    assert_close("sin(30)", 0.5);
    assert_close("cos(60)", 0.5);
    assert_close("tan(45)", 1.0);
    assert_close("asin(1)", 90.0);
    assert_close("acos(0)", 90.0);
    assert_close("atan(1)", 45.0);
    assert_close("root(8,3)", 2.0);
    assert_value("sqrt(9)*(1+2)", 9.0);
    assert_value("sqrt((3+1)*4)", 4.0);
}

#[test]
fn wrong_argument_counts() {
    let mut context = Context::new();
    assert_kind(&mut context, "pow(2)", ErrorKind::Arity);
    assert_kind(&mut context, "sqrt(1,2)", ErrorKind::Arity);

    let err = evaluate("1+pow(2)", &mut context).unwrap_err();
    assert_eq!(err.to_string(),
               "Not enough arguments in pow(2): 'pow' takes 2, found 1.");
}

#[test]
fn arguments_are_split_on_every_comma() {
    let mut context = Context::new();
    assert_kind(&mut context, "pow(pow(2,2),3)", ErrorKind::Syntax);

    // Naming the inner result works around it.
    assert_output(&mut context, "a=pow(2,2)", "a=4");
    assert_output(&mut context, "pow(a,3)", "pow(a,3)=64");
}

#[test]
fn variables_persist_across_lines() {
    let mut context = Context::new();
    assert_output(&mut context, "x = 2", "x=2");
    assert_output(&mut context, "x * 3", "x*3=6");
    assert_output(&mut context, "x = x + 1", "x=3");
    assert_output(&mut context, "x * 3", "x*3=9");
    assert_kind(&mut context, "y * 2", ErrorKind::UndefinedVariable);
}

#[test]
fn unknown_names_fail_when_evaluated() {
    let mut context = Context::new();
    let err = evaluate("z=y+1", &mut context).unwrap_err();
    assert_eq!(err.to_string(), "Variable with name 'y' was not defined.");
    assert!(!context.variables.contains("z"));

    context.set_variable("y", 1.0);
    assert_eq!(eval_in(&mut context, "y+1").unwrap(), 2.0);
    context.variables.remove("y");
    assert_kind(&mut context, "y", ErrorKind::UndefinedVariable);

    assert_kind(&mut context, "foo(1)", ErrorKind::UnknownFunction);
    let err = evaluate("2*log(10)", &mut context).unwrap_err();
    assert_eq!(err.to_string(), "No 'log' function exists in log(10).");
}

#[test]
fn unknown_names_next_to_mod_are_undefined() {
    let mut context = Context::new();
    context.set_variable("x", 7.0);

    for line in ["y*2", "y mod 2", "x mod y", "ymod2", "2 mod y mod x"] {
        let err = evaluate(line, &mut context).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedVariable, "wrong error for '{line}': {err}");
        assert_eq!(err.to_string(), "Variable with name 'y' was not defined.");
    }

    assert_kind(&mut context, "x mod foo(1)", ErrorKind::UnknownFunction);
    assert_output(&mut context, "y = 3", "y=3");
    assert_output(&mut context, "x mod y", "xmody=1");
}

#[test]
fn read_only_lines_are_idempotent() {
    let mut context = Context::with_constants();
    eval_in(&mut context, "r=2").unwrap();
    let before = context.variables.clone();

    let first = evaluate("PI*r^2", &mut context).unwrap();
    let second = evaluate("PI*r^2", &mut context).unwrap();

    assert_eq!(first, second);
    assert_eq!(context.variables, before);
}

#[test]
fn failed_assignment_stores_nothing() {
    let mut context = Context::new();
    assert_kind(&mut context, "x=pow(1)", ErrorKind::Arity);
    assert_kind(&mut context, "x=1+", ErrorKind::Structural);
    assert!(context.variables.is_empty());

    eval_in(&mut context, "x=1").unwrap();
    assert_kind(&mut context, "x=sqrt(1,1)", ErrorKind::Arity);
    assert_eq!(context.variables.get("x"), Some(1.0));
}

#[test]
fn rendering_reproduces_plain_lines() {
    let mut context = Context::new();
    context.set_variable("x", 2.0);

    for line in ["2+3*4", "sqrt(16)*(1+2)", "xmod3", "pow(x,2)/(x-1)", "1.5^2"] {
        let result = evaluate(line, &mut context).unwrap();
        assert_eq!(result.expression, line);
    }
}

#[test]
fn shorter_names_shadow_longer_ones() {
    let mut context = Context::new();
    assert_output(&mut context, "a=1", "a=1");
    assert_output(&mut context, "ab=2", "ab=2");
    assert_kind(&mut context, "ab", ErrorKind::Syntax);
    assert_eq!(context.variables.get("ab"), Some(2.0));
}

#[test]
fn ieee_arithmetic() {
    let mut context = Context::new();
    assert_output(&mut context, "1/0", "1/0=Infinity");
    assert_output(&mut context, "-1/0", "-1/0=-Infinity");
    assert_output(&mut context, "0/0", "0/0=NaN");
    assert_value("5 mod -3", 2.0);
    assert_value("-5 mod 3", -2.0);
}

#[test]
fn syntax_errors() {
    let mut context = Context::new();
    for line in ["2$3", "1..2", "1.", "(1+2", "1+2)", "x=y=1", "1x=2", "=1"] {
        assert_kind(&mut context, line, ErrorKind::Syntax);
    }
}

#[test]
fn structural_errors() {
    let mut context = Context::new();
    for line in ["", "1+", "*2", "()", "2(3)", "1+*2"] {
        assert_kind(&mut context, line, ErrorKind::Structural);
    }
}

#[test]
fn evaluation_display() {
    let mut context = Context::new();
    assert_output(&mut context, "1 + 2", "1+2=3");
    assert_output(&mut context, "3*-(1+1)", "3*(0-(1+1))=-6");
    assert_output(&mut context, "0.5*3", "0.5*3=1.5");
}
