use primekit::*;

fn single_prime(minterms: &[i64], num_variables: i64) -> Result<Implicant, PrimekitError> {
    let primes = prime_implicants(minterms.iter().copied(), num_variables)?;
    assert_eq!(primes.len(), 1);
    Ok(primes.into_iter().next().unwrap())
}

#[test]
fn lowest_minterm() -> Result<(), PrimekitError> {
    let p = single_prime(&[0], 4)?;
    assert_eq!(p.expression_str(), "[ 0 0 0 0 ]");
    assert_eq!(p.minterm_str(), "Min(0)");
    Ok(())
}

#[test]
fn highest_minterm() -> Result<(), PrimekitError> {
    let p = single_prime(&[15], 4)?;
    assert_eq!(p.expression_str(), "[ 1 1 1 1 ]");
    assert_eq!(p.minterm_str(), "Min(15)");
    Ok(())
}

#[test]
fn adjacent_minterms() -> Result<(), PrimekitError> {
    let p = single_prime(&[0, 1], 4)?;
    assert_eq!(p.expression_str(), "[ 0 0 0 - ]");
    assert_eq!(p.minterm_str(), "Min(0, 1)");
    Ok(())
}

#[test]
fn distant_minterms() -> Result<(), PrimekitError> {
    let a = Implicant::new(0, 4)?;
    let b = Implicant::new(15, 4)?;
    assert!(!a.reduces_with(&b));

    let primes = prime_implicants([0, 15], 4)?;
    let found: Vec<String> = primes.iter().map(|p| p.minterm_str()).collect();
    assert_eq!(found, vec!["Min(0)", "Min(15)"]);
    assert!(primes.iter().all(|p| !p.is_reduced()));
    Ok(())
}

#[test]
fn invalid_minterm() {
    assert_eq!(
        Implicant::new(33, 3),
        Err(PrimekitError::InvalidMinterm {
            minterm: 33,
            num_variables: 3
        })
    );
    assert!(matches!(
        prime_implicants([1, 33], 3),
        Err(PrimekitError::InvalidMinterm { minterm: 33, .. })
    ));
}

#[test]
fn invalid_variable_count() {
    assert_eq!(
        Implicant::new(0, -1),
        Err(PrimekitError::InvalidVariableCount(-1))
    );
    assert!(matches!(
        Reducer::new([0], -1),
        Err(PrimekitError::InvalidVariableCount(-1))
    ));
}

#[test]
fn repeated_minterms() -> Result<(), PrimekitError> {
    let p = single_prime(&[1, 0, 1, 0], 2)?;
    assert_eq!(p.minterm_str(), "Min(0, 1)");
    assert_eq!(p.expression_str(), "[ 0 - ]");
    Ok(())
}

#[test]
fn merge_coverage_is_commutative() -> Result<(), PrimekitError> {
    let all: Vec<Implicant> = (0..16).map(|m| Implicant::new(m, 4)).collect::<Result<_, _>>()?;
    for a in &all {
        for b in &all {
            if !a.reduces_with(b) {
                continue;
            }
            let ab = Implicant::merge(a, b)?;
            let ba = Implicant::merge(b, a)?;
            let mut s1 = ab.minterms().to_vec();
            let mut s2 = ba.minterms().to_vec();
            s1.sort();
            s2.sort();
            assert_eq!(s1, s2);
            assert_eq!(ab.pattern(), ba.pattern());
            assert_eq!(ab.size(), 2);
        }
    }
    Ok(())
}

#[test]
fn every_minterm_is_covered() -> Result<(), PrimekitError> {
    let problem: Problem = "5: Min(0, 1, 2, 5, 6, 7, 8, 9, 10, 14, 17, 21, 23, 28, 31)".parse()?;
    let primes = problem.solve()?;
    for m in &problem.minterms {
        assert!(primes.covers(*m as u64));
    }
    for m in 0..32u64 {
        if !problem.minterms.contains(&(m as i64)) {
            assert!(!primes.covers(m));
        }
    }
    Ok(())
}
