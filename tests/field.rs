use cryptal_curves::CurveError;
use cryptal_curves::field::{
    PrimeField, RealField, Ring, is_prime, is_quadratic_residue, mod_inverse, mod_pow, mod_sqrt,
    reduce,
};

fn sorted(mut v: Vec<i64>) -> Vec<i64> {
    v.sort_unstable();
    v
}

#[test]
fn reduce_is_always_non_negative() {
    assert_eq!(reduce(-7, 223), 216);
    assert_eq!(reduce(-1, 5), 4);
    assert_eq!(reduce(10, 5), 0);
    assert_eq!(reduce(12, 5), 2);
    assert_eq!(reduce(-230, 223), 216);
}

#[test]
fn mod_inverse_known_values() {
    assert_eq!(mod_inverse(3, 11).unwrap(), 4);
    assert_eq!(mod_inverse(-3, 11).unwrap(), 7);
    assert_eq!(mod_inverse(1, 223).unwrap(), 1);
}

#[test]
fn mod_inverse_of_every_non_zero_residue() {
    let p = 223;

    for a in 1..p {
        let inv = mod_inverse(a, p).unwrap();
        assert_eq!(a * inv % p, 1, "inverse of {a}");
    }
}

#[test]
fn mod_inverse_fails_without_common_unit() {
    assert_eq!(
        mod_inverse(6, 9),
        Err(CurveError::NoInverse {
            value: 6,
            modulus: 9
        })
    );
    assert!(mod_inverse(0, 7).is_err());
    assert!(mod_inverse(7, 217).is_err());
}

#[test]
fn mod_pow_known_values() {
    assert_eq!(mod_pow(3, 200, 13), 9);
    assert_eq!(mod_pow(2, 10, 1000), 24);
    assert_eq!(mod_pow(5, 0, 7), 1);
    assert_eq!(mod_pow(7, 5, 1), 0);
    assert_eq!(mod_pow(-2, 3, 11), 3);
}

#[test]
fn mod_pow_fermat() {
    for a in 1..97 {
        assert_eq!(mod_pow(a, 96, 97), 1);
    }
}

#[test]
fn mod_sqrt_closed_form_branch() {
    // 223 ≡ 3 (mod 4)
    assert_eq!(sorted(mod_sqrt(100, 223)), vec![10, 213]);
    assert!(mod_sqrt(44, 223).is_empty());
}

#[test]
fn mod_sqrt_tonelli_shanks_branch() {
    assert_eq!(sorted(mod_sqrt(10, 13)), vec![6, 7]);
    assert_eq!(sorted(mod_sqrt(2, 17)), vec![6, 11]);
    assert_eq!(sorted(mod_sqrt(5, 41)), vec![13, 28]);
    assert_eq!(sorted(mod_sqrt(25, 97)), vec![5, 92]);
    assert!(mod_sqrt(3, 17).is_empty());
    assert!(mod_sqrt(5, 97).is_empty());
}

#[test]
fn mod_sqrt_degenerate_cases() {
    assert_eq!(mod_sqrt(0, 13), vec![0]);
    assert_eq!(mod_sqrt(26, 13), vec![0]);
    assert_eq!(mod_sqrt(1, 2), vec![1]);
    assert_eq!(mod_sqrt(0, 2), vec![0]);
    assert_eq!(mod_sqrt(3, 2), vec![1]);
}

#[test]
fn mod_sqrt_roots_square_back_and_residues_match() {
    for p in [3, 5, 7, 11, 13, 17, 41, 97, 223, 257, 7681] {
        let mut residues = 0;

        for n in 1..p {
            let roots = mod_sqrt(n, p);

            assert_eq!(
                roots.is_empty(),
                !is_quadratic_residue(n, p),
                "n = {n}, p = {p}"
            );

            if !roots.is_empty() {
                residues += 1;

                assert_eq!(roots.len(), 2);
                assert_eq!(roots[0] + roots[1], p);
                assert_ne!(roots[0], roots[1]);

                for r in roots {
                    assert_eq!(r * r % p, n, "root {r} of {n} mod {p}");
                }
            }
        }

        assert_eq!(residues, (p - 1) / 2, "p = {p}");
    }
}

#[test]
fn primality() {
    let primes: Vec<i64> = (0..60).filter(|&n| is_prime(n)).collect();
    assert_eq!(
        primes,
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
    );

    assert!(is_prime(223));
    assert!(!is_prime(217));
    assert!(!is_prime(221));
}

#[test]
fn prime_field_ring_operations() {
    let f = PrimeField::new(17).unwrap();

    assert_eq!(f.element(-1), 16);
    assert_eq!(f.add(16, 5), 4);
    assert_eq!(f.sub(3, 5), 15);
    assert_eq!(f.mul(6, 6), 2);
    assert_eq!(f.neg(4), 13);
    assert_eq!(f.div(1, 3).unwrap(), 6);
    assert!(f.div(1, 0).is_err());
    assert!(f.equals(-1, 16));
    assert!(f.is_zero(34));
}

#[test]
fn prime_field_rejects_tiny_modulus() {
    assert!(PrimeField::new(1).is_err());
    assert!(PrimeField::new(-5).is_err());
}

#[test]
fn real_field_tolerance_and_division() {
    let r = RealField::default();

    assert!(r.equals(0.1 + 0.2, 0.3));
    assert!(!r.equals(1.0, 1.001));
    assert!(r.is_zero(1e-12));
    assert_eq!(r.div(1.0, 4.0).unwrap(), 0.25);
    assert!(matches!(r.div(1.0, 0.0), Err(CurveError::Domain(_))));

    assert_eq!(r.sqrt(4.0), vec![2.0, -2.0]);
    assert_eq!(r.sqrt(0.0), vec![0.0]);
    assert!(r.sqrt(-1.0).is_empty());
}
