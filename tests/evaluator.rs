use prattle::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{ErrorKind, EvalError},
    interpreter::{
        environment::Environment,
        evaluator::{Evaluator, evaluate},
        parser::DEFAULT_MAX_DEPTH,
    },
};

fn num(value: f64) -> Expr {
    Expr::Number(value)
}

fn var(name: &str) -> Expr {
    Expr::Variable(name.to_string())
}

#[test]
fn literals_and_variables() {
    let mut env = Environment::new();
    env.assign("pi", 3.5);

    assert_eq!(evaluate(&num(2.5), &mut env), Ok(2.5));
    assert_eq!(evaluate(&var("pi"), &mut env), Ok(3.5));
    assert_eq!(evaluate(&var("tau"), &mut env),
               Err(EvalError::UndefinedVariable { name: "tau".to_string() }));
}

#[test]
fn unary_operators() {
    let mut env = Environment::new();

    assert_eq!(evaluate(&Expr::unary(UnaryOperator::Negate, num(4.0)), &mut env), Ok(-4.0));
    assert_eq!(evaluate(&Expr::unary(UnaryOperator::Plus, num(4.0)), &mut env), Ok(4.0));
}

#[test]
fn binary_operators() {
    let mut env = Environment::new();
    let eval = |op, l, r, env: &mut Environment| evaluate(&Expr::binary(op, num(l), num(r)), env);

    assert_eq!(eval(BinaryOperator::Add, 2.0, 3.0, &mut env), Ok(5.0));
    assert_eq!(eval(BinaryOperator::Sub, 2.0, 3.0, &mut env), Ok(-1.0));
    assert_eq!(eval(BinaryOperator::Mul, 2.0, 3.0, &mut env), Ok(6.0));
    assert_eq!(eval(BinaryOperator::Div, 3.0, 2.0, &mut env), Ok(1.5));
    assert_eq!(eval(BinaryOperator::Pow, 2.0, 0.5, &mut env), Ok(2.0_f64.sqrt()));
}

#[test]
fn division_by_exact_zero() {
    let mut env = Environment::new();

    assert_eq!(evaluate(&Expr::binary(BinaryOperator::Div, num(1.0), num(0.0)), &mut env),
               Err(EvalError::DivisionByZero));
    assert_eq!(evaluate(&Expr::binary(BinaryOperator::Div, num(0.0), num(-0.0)), &mut env),
               Err(EvalError::DivisionByZero));
    assert_eq!(evaluate(&Expr::binary(BinaryOperator::Div, num(-0.0), num(4.0)), &mut env),
               Ok(-0.0));
}

#[test]
fn power_outside_the_reals_is_a_domain_error() {
    let mut env = Environment::new();

    assert_eq!(evaluate(&Expr::binary(BinaryOperator::Pow, num(-8.0), num(0.5)), &mut env),
               Err(EvalError::MathDomain { operation: "-8 ^ 0.5".to_string() }));
    assert_eq!(evaluate(&Expr::binary(BinaryOperator::Pow, num(10.0), num(400.0)), &mut env).map_err(|e| e.kind()),
               Err(ErrorKind::MathDomain));
    assert_eq!(evaluate(&Expr::binary(BinaryOperator::Pow, num(-8.0), num(2.0)), &mut env),
               Ok(64.0));
}

#[test]
fn builtin_functions() {
    let mut env = Environment::new();

    assert_eq!(evaluate(&Expr::call("sqrt", num(16.0)), &mut env), Ok(4.0));
    assert_eq!(evaluate(&Expr::call("log", num(1.0)), &mut env), Ok(0.0));
    assert_eq!(evaluate(&Expr::call("sin", num(0.0)), &mut env), Ok(0.0));
    assert_eq!(evaluate(&Expr::call("cos", num(0.0)), &mut env), Ok(1.0));
    assert_eq!(evaluate(&Expr::call("exp", num(0.0)), &mut env), Ok(1.0));

    let e = evaluate(&Expr::call("exp", num(1.0)), &mut env).unwrap();
    assert!((e - std::f64::consts::E).abs() < 1e-12);
}

#[test]
fn function_results_outside_the_domain() {
    let mut env = Environment::new();

    assert_eq!(evaluate(&Expr::call("sqrt", num(-1.0)), &mut env),
               Err(EvalError::MathDomain { operation: "sqrt(-1)".to_string() }));
    assert_eq!(evaluate(&Expr::call("log", num(0.0)), &mut env),
               Err(EvalError::MathDomain { operation: "log(0)".to_string() }));
    assert_eq!(evaluate(&Expr::call("log", num(-2.0)), &mut env).map_err(|e| e.kind()),
               Err(ErrorKind::MathDomain));
    assert_eq!(evaluate(&Expr::call("exp", num(1000.0)), &mut env).map_err(|e| e.kind()),
               Err(ErrorKind::MathDomain));
}

#[test]
fn unknown_function_is_unsupported() {
    let mut env = Environment::new();

    assert_eq!(evaluate(&Expr::call("tan", num(1.0)), &mut env),
               Err(EvalError::UnsupportedFunction { name: "tan".to_string() }));
}

#[test]
fn unknown_function_does_not_evaluate_its_argument() {
    let mut env = Environment::new();
    let expr = Expr::call("tan", Expr::assignment("x", num(1.0)));

    assert!(evaluate(&expr, &mut env).is_err());
    assert_eq!(env.get("x"), None);
}

#[test]
fn assignment_stores_and_yields_the_value() {
    let mut env = Environment::new();
    let expr = Expr::assignment("x", Expr::binary(BinaryOperator::Add, num(2.0), num(3.0)));

    assert_eq!(evaluate(&expr, &mut env), Ok(5.0));
    assert_eq!(env.get("x"), Some(5.0));

    assert_eq!(evaluate(&Expr::assignment("x", num(7.0)), &mut env), Ok(7.0));
    assert_eq!(env.get("x"), Some(7.0));
    assert_eq!(env.len(), 1);
}

#[test]
fn failed_assignment_binds_nothing() {
    let mut env = Environment::new();
    let expr = Expr::assignment("x", Expr::binary(BinaryOperator::Div, num(1.0), num(0.0)));

    assert_eq!(evaluate(&expr, &mut env), Err(EvalError::DivisionByZero));
    assert_eq!(env.get("x"), None);
    assert!(env.is_empty());
}

#[test]
fn failed_reassignment_keeps_the_old_value() {
    let mut env = Environment::new();
    env.assign("x", 1.0);

    let expr = Expr::assignment("x", var("missing"));

    assert!(evaluate(&expr, &mut env).is_err());
    assert_eq!(env.get("x"), Some(1.0));
}

#[test]
fn left_operand_is_evaluated_first() {
    let mut env = Environment::new();
    let expr = Expr::binary(BinaryOperator::Sub,
                            Expr::assignment("x", num(1.0)),
                            Expr::assignment("x", num(2.0)));

    assert_eq!(evaluate(&expr, &mut env), Ok(-1.0));
    assert_eq!(env.get("x"), Some(2.0));
}

#[test]
fn deep_trees_are_rejected() {
    let mut env = Environment::new();
    let mut expr = num(1.0);
    for _ in 0..DEFAULT_MAX_DEPTH {
        expr = Expr::unary(UnaryOperator::Negate, expr);
    }

    assert_eq!(expr.depth(), DEFAULT_MAX_DEPTH + 1);
    assert_eq!(evaluate(&expr, &mut env),
               Err(EvalError::ExpressionTooComplex { max_depth: DEFAULT_MAX_DEPTH }));
}

#[test]
fn custom_depth_limit() {
    let mut env = Environment::new();
    let expr = Expr::unary(UnaryOperator::Negate, Expr::unary(UnaryOperator::Negate, num(3.0)));

    assert_eq!(Evaluator::new(&mut env).with_max_depth(3).eval(&expr), Ok(3.0));
    assert_eq!(Evaluator::new(&mut env).with_max_depth(2).eval(&expr),
               Err(EvalError::ExpressionTooComplex { max_depth: 2 }));
}

#[test]
fn environment_bindings_are_sorted_and_clearable() {
    let mut env = Environment::new();
    env.assign("zeta", 1.0);
    env.assign("alpha", 2.0);
    env.assign("mid", 3.0);

    assert_eq!(env.bindings(), vec![("alpha", 2.0), ("mid", 3.0), ("zeta", 1.0)]);

    env.clear();
    assert!(env.is_empty());
    assert_eq!(env.get("alpha"), None);
}
