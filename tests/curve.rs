use cryptal_curves::CurveError;
use cryptal_curves::config::SamplingLimits;
use cryptal_curves::curve::{Curve, Domain, FieldCurve, Point, RealCurve};
use cryptal_curves::enumerate::all_points;
use cryptal_curves::field::{PrimeField, RealField};

fn default_curve() -> FieldCurve {
    Curve::from_integers(PrimeField::new(223).unwrap(), -7, 10)
}

fn secp_like() -> FieldCurve {
    Curve::from_integers(PrimeField::new(223).unwrap(), 0, 7)
}

fn textbook() -> FieldCurve {
    Curve::from_integers(PrimeField::new(17).unwrap(), 2, 2)
}

fn real_default() -> RealCurve {
    Curve::from_integers(RealField::default(), -7, 10)
}

#[test]
fn coefficients_are_reduced() {
    let curve = default_curve();

    assert_eq!(curve.a(), 216);
    assert_eq!(curve.b(), 10);
    assert_eq!(curve.ring().modulus(), 223);
}

#[test]
fn membership() {
    let curve = secp_like();

    assert!(curve.is_on_curve(&Point::affine(192, 105)));
    assert!(curve.is_on_curve(&Point::affine(17, 56)));
    assert!(curve.is_on_curve(&Point::affine(47, 71)));
    assert!(!curve.is_on_curve(&Point::affine(200, 119)));
    assert!(curve.is_on_curve(&Point::Infinity));
}

#[test]
fn chord_addition() {
    let curve = secp_like();

    let sum = curve
        .add(&Point::affine(192, 105), &Point::affine(17, 56))
        .unwrap();

    assert_eq!(sum, Point::affine(170, 142));
    assert!(curve.is_on_curve(&sum));
}

#[test]
fn tangent_doubling() {
    let curve = secp_like();
    let g = Point::affine(47, 71);

    assert_eq!(curve.double(&g).unwrap(), Point::affine(36, 111));
    assert_eq!(curve.scalar_mul(3, &g).unwrap(), Point::affine(15, 137));
}

#[test]
fn identity_and_inverse() {
    let curve = textbook();
    let p = Point::affine(5, 1);

    assert_eq!(curve.add(&Point::Infinity, &p).unwrap(), p);
    assert_eq!(curve.add(&p, &Point::Infinity).unwrap(), p);
    assert_eq!(curve.negate(&p), Point::affine(5, 16));
    assert_eq!(curve.add(&p, &curve.negate(&p)).unwrap(), Point::Infinity);
    assert_eq!(curve.negate(&Point::Infinity), Point::Infinity);
}

#[test]
fn group_laws_hold_for_every_point() {
    for curve in [textbook(), secp_like()] {
        let points = all_points(&curve, &SamplingLimits::default()).unwrap();
        let p = curve.ring().modulus();

        for a in &points {
            assert_eq!(curve.add(a, &Point::Infinity).unwrap(), *a);
            assert_eq!(curve.add(&Point::Infinity, a).unwrap(), *a);
            assert_eq!(curve.add(a, &curve.negate(a)).unwrap(), Point::Infinity);

            if let Some((x, y)) = a.coordinates() {
                if y != 0 {
                    let mirrored = Point::affine(x, p - y);
                    assert_eq!(curve.add(a, &mirrored).unwrap(), Point::Infinity);
                }
            }

            for b in &points {
                let sum = curve.add(a, b).unwrap();

                assert!(curve.is_on_curve(&sum), "{a} + {b} = {sum}");
                assert_eq!(sum, curve.add(b, a).unwrap(), "{a} + {b}");
            }
        }
    }
}

#[test]
fn doubling_a_point_of_order_two() {
    let curve = default_curve();
    let p = Point::affine(215, 0);

    assert!(curve.is_on_curve(&p));
    assert_eq!(curve.double(&p).unwrap(), Point::Infinity);
}

#[test]
fn unreduced_inputs_are_accepted() {
    let curve = textbook();

    let sum = curve
        .add(&Point::affine(5 + 17, 1 - 17), &Point::affine(6, 3))
        .unwrap();

    assert_eq!(sum, Point::affine(10, 6));
}

#[test]
fn textbook_multiples() {
    let curve = textbook();
    let g = Point::affine(5, 1);

    let expected = [
        (2, Point::affine(6, 3)),
        (3, Point::affine(10, 6)),
        (7, Point::affine(0, 6)),
        (8, Point::affine(13, 7)),
        (10, Point::affine(7, 11)),
        (12, Point::affine(0, 11)),
        (18, Point::affine(5, 16)),
        (19, Point::Infinity),
    ];

    for (k, point) in expected {
        assert_eq!(curve.scalar_mul(k, &g).unwrap(), point, "{k}·G");
    }
}

#[test]
fn scalar_mul_is_not_reduced_by_the_order() {
    let curve = textbook();
    let g = Point::affine(5, 1);

    assert_eq!(curve.scalar_mul(0, &g).unwrap(), Point::Infinity);
    assert_eq!(curve.scalar_mul(1, &g).unwrap(), g);
    assert_eq!(curve.scalar_mul(20, &g).unwrap(), g);
    assert_eq!(curve.scalar_mul(38, &g).unwrap(), Point::Infinity);
    assert_eq!(curve.scalar_mul(5, &Point::Infinity).unwrap(), Point::Infinity);
}

#[test]
fn scalar_mul_matches_repeated_addition() {
    let curve = default_curve();
    let g = Point::affine(47, 71);

    let mut acc = Point::Infinity;
    for k in 0..240u64 {
        assert_eq!(curve.scalar_mul(k, &g).unwrap(), acc, "k = {k}");
        acc = curve.add(&acc, &g).unwrap();
    }
}

#[test]
fn default_generator_is_off_the_curve() {
    let curve = default_curve();
    let g = Point::affine(47, 71);

    assert!(!curve.is_on_curve(&g));
    assert_eq!(curve.double(&g).unwrap(), Point::affine(72, 1));
    assert_eq!(curve.scalar_mul(3, &g).unwrap(), Point::affine(94, 16));
    assert_eq!(curve.scalar_mul(10, &g).unwrap(), Point::affine(153, 146));
    assert_eq!(curve.scalar_mul(227, &g).unwrap(), Point::affine(153, 146));
    assert_eq!(curve.scalar_mul(217, &g).unwrap(), Point::Infinity);
}

#[test]
fn multiples_stop_at_infinity() {
    let curve = textbook();
    let g = Point::affine(5, 1);

    let all = curve.multiples(&g, 100).unwrap();
    assert_eq!(all.len(), 19);
    assert_eq!(all[0], g);
    assert_eq!(all[18], Point::Infinity);

    let some = curve.multiples(&g, 4).unwrap();
    assert_eq!(some.len(), 4);
    assert_eq!(some[3], Point::affine(3, 1));
}

#[test]
fn singularity() {
    let ring = PrimeField::new(223).unwrap();

    assert!(Curve::from_integers(ring, 0, 0).is_singular());
    assert!(Curve::from_integers(ring, -3, 2).is_singular());
    assert!(!default_curve().is_singular());

    assert!(Curve::from_integers(RealField::default(), -3, 2).is_singular());
    assert!(!real_default().is_singular());
}

#[test]
fn real_addition() {
    let curve = real_default();
    let p = Point::affine(1.0, 2.0);
    let q = Point::affine(2.0, 2.0);

    let sum = curve.add(&p, &q).unwrap();
    assert!(curve.points_equal(&sum, &Point::affine(-3.0, -2.0)));
    assert!(curve.is_on_curve(&sum));
}

#[test]
fn real_doubling_and_inverse() {
    let curve = real_default();
    let p = Point::affine(1.0, 2.0);

    let doubled = curve.double(&p).unwrap();
    assert!(curve.points_equal(&doubled, &Point::affine(-1.0, -4.0)));

    let vertical = curve.add(&p, &Point::affine(1.0, -2.0)).unwrap();
    assert_eq!(vertical, Point::Infinity);
}

#[test]
fn real_group_law_is_associative_within_tolerance() {
    let curve = real_default();
    let p = Point::affine(1.0, 2.0);
    let q = Point::affine(2.0, 2.0);
    let r = Point::affine(-1.0, 4.0);

    let left = curve.add(&curve.add(&p, &q).unwrap(), &r).unwrap();
    let right = curve.add(&p, &curve.add(&q, &r).unwrap()).unwrap();

    assert!(curve.points_equal(&left, &right));
}

#[test]
fn domain_construction() {
    let domain = Domain::new(textbook(), Point::affine(5 + 17, 1), 19).unwrap();

    assert_eq!(*domain.generator(), Point::affine(5, 1));
    assert_eq!(domain.order(), 19);
    assert_eq!(domain.modulus(), 17);
    assert_eq!(domain.mul_generator(2).unwrap(), Point::affine(6, 3));
}

#[test]
fn domain_rejects_degenerate_inputs() {
    assert!(matches!(
        Domain::new(textbook(), Point::Infinity, 19),
        Err(CurveError::InvalidParameters(_))
    ));
    assert!(matches!(
        Domain::new(textbook(), Point::affine(5, 1), 1),
        Err(CurveError::InvalidParameters(_))
    ));
    assert!(matches!(
        Domain::new(textbook(), Point::affine(5, 1), 1 << 63),
        Err(CurveError::InvalidParameters(_))
    ));
    assert!(Domain::new(textbook(), Point::affine(5, 1), i64::MAX as u64).is_ok());
}

#[test]
fn point_accessors_and_display() {
    let p = Point::affine(3, 4);

    assert_eq!(p.coordinates(), Some((3, 4)));
    assert_eq!(p.x(), Some(3));
    assert_eq!(p.y(), Some(4));
    assert_eq!(p.to_string(), "(3, 4)");

    let inf: Point<i64> = Point::Infinity;
    assert!(inf.is_infinity());
    assert_eq!(inf.coordinates(), None);
    assert_eq!(inf.to_string(), "∞");
}
