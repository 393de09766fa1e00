//! Small end to end runs with known outcomes.

use anyhow::Error;

use clausal::syntax::{parse_clauses, parse_term};
use clausal::{
    check_refutation, decide_strs, normalize, refute, unify_terms, Expr, PropClause, PropLit,
    Refutation, Substitution, Term, Verdict,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn implication_to_cnf() -> Result<(), Error> {
    init_logging();

    let clauses = normalize(&Expr::implies(Expr::var("p"), Expr::var("q")))?;

    let expected: PropClause = vec![PropLit::negative("p"), PropLit::positive("q")]
        .into_iter()
        .collect();
    assert_eq!(clauses, vec![expected]);

    Ok(())
}

#[test]
fn dpll_unit_then_branch() -> Result<(), Error> {
    init_logging();

    let verdict = decide_strs(vec![vec!["p", "q"], vec!["~p"]])?;

    let model = verdict.model().cloned().unwrap_or_default();
    assert!(verdict.is_sat());
    assert_eq!(model.value("p"), Some(false));
    assert_eq!(model.value("q"), Some(true));

    Ok(())
}

#[test]
fn dpll_contradiction() -> Result<(), Error> {
    init_logging();

    assert_eq!(decide_strs(vec![vec!["p"], vec!["~p"]])?, Verdict::Unsat);
    Ok(())
}

#[test]
fn unify_compounds() -> Result<(), Error> {
    init_logging();

    let subst = unify_terms(
        &parse_term("f(x,y)")?,
        &parse_term("f(a,b)")?,
        Substitution::new(),
    );

    let expected: Substitution = vec![
        ("x".to_owned(), Term::var("a")),
        ("y".to_owned(), Term::var("b")),
    ]
    .into_iter()
    .collect();
    assert_eq!(subst, Some(expected));

    Ok(())
}

#[test]
fn resolution_refutes_in_one_step() -> Result<(), Error> {
    init_logging();

    let clauses = parse_clauses(vec![vec!["P(x)"], vec!["~P(a)"]])?;

    let refutation = refute(&clauses, 1000);
    let trace = refutation.trace().cloned().unwrap_or_default();

    assert!(refutation.is_unsat());
    assert_eq!(trace.len(), 1);
    check_refutation(&clauses, &trace)?;

    Ok(())
}

#[test]
fn resolution_saturates() -> Result<(), Error> {
    init_logging();

    let clauses = parse_clauses(vec![vec!["P(x)"], vec!["Q(a)"]])?;
    assert_eq!(refute(&clauses, 1), Refutation::Saturated);
    Ok(())
}
