use approx::assert_relative_eq;
use liqmodel::params::{validate, LiquidityModelParams, VALIDATION};
use liqmodel::ratio::{target_ratio, target_ratio_for};
use liqmodel::sampler::{domain_floor, sample_curve, LOG_TVL_FLOOR};
use liqmodel::triggers::triggers_for;
use liqmodel::verifier::verify_curve;
use liqmodel::{evaluate, Bps, ValidatedParams};
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = ValidatedParams> {
    let v = VALIDATION;
    (
        v.min_ratio_bp.min..=v.min_ratio_bp.max,
        v.tvl_factor_bp.min..=v.tvl_factor_bp.max,
        v.tvl_exponent_bp.min..=v.tvl_exponent_bp.max,
        v.low_offset_bp.min..=v.low_offset_bp.max,
        v.high_offset_bp.min..=v.high_offset_bp.max,
    )
        .prop_map(|(b, f, e, lo, hi)| {
            validate(&LiquidityModelParams {
                min_ratio_bp: b,
                tvl_factor_bp: f,
                tvl_exponent_bp: e,
                low_offset_bp: lo,
                high_offset_bp: hi,
            })
        })
}

#[test]
fn reference_point_at_one_million() {
    let p = ValidatedParams::default();
    let ev = evaluate(&p, 1_000_000.0);
    // 500 + 9500 * 100001^-0.05
    assert_relative_eq!(ev.target.value(), 5842.239918201045, max_relative = 1e-6);
    assert_relative_eq!(ev.triggers.low_trigger.value(), 4673.791934560836, max_relative = 1e-6);
    assert_relative_eq!(ev.triggers.high_trigger.value(), 7010.687901841254, max_relative = 1e-6);
}

#[test]
fn zero_tvl_gives_full_reserve_and_symmetric_band() {
    let ev = evaluate(&ValidatedParams::default(), 0.0);
    assert_eq!(ev.target, Bps(10_000.0));
    assert_relative_eq!(ev.triggers.low_trigger.value(), 8000.0, max_relative = 1e-12);
    assert_relative_eq!(ev.triggers.high_trigger.value(), 12000.0, max_relative = 1e-12);
}

// Negative TVL is not meaningful; it is sanitised to zero rather than rejected.
#[test]
fn negative_tvl_is_treated_as_zero() {
    let p = ValidatedParams::default();
    assert_eq!(target_ratio_for(&p, -5_000.0), target_ratio_for(&p, 0.0));
    assert_eq!(target_ratio_for(&p, f64::NEG_INFINITY), Bps::ONE);
}

#[test]
fn high_trigger_may_exceed_one_hundred_percent() {
    let p = ValidatedParams::default();
    let t = triggers_for(&p, target_ratio_for(&p, 0.0));
    assert!(t.high_trigger > Bps::ONE);
}

#[test]
fn log_curve_is_geometric_over_dashboard_domain() {
    let curve = sample_curve(&ValidatedParams::default(), 1e9, 100, true).unwrap();
    assert_eq!(curve.len(), 100);
    assert_eq!(curve[0].tvl, LOG_TVL_FLOOR);
    assert_eq!(curve[99].tvl, 1e9);
    let expected = (1e9_f64 / LOG_TVL_FLOOR).powf(1.0 / 99.0);
    for w in curve.windows(2) {
        assert!(w[1].tvl > w[0].tvl);
        assert_relative_eq!(w[1].tvl / w[0].tvl, expected, max_relative = 1e-9);
    }
    let rep = verify_curve(&curve).unwrap();
    assert!(rep.ok());
    assert!(rep.step_ratio_spread().unwrap() < 1e-9);
}

proptest! {
    #[test]
    fn zero_tvl_is_exactly_bps(p in params_strategy()) {
        prop_assert_eq!(target_ratio_for(&p, 0.0), Bps(10_000.0));
    }

    #[test]
    fn ratio_non_increasing_in_tvl(
        p in params_strategy(),
        t1 in 0.0f64..1e10,
        t2 in 0.0f64..1e10,
    ) {
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        prop_assert!(target_ratio_for(&p, hi) <= target_ratio_for(&p, lo));
    }

    #[test]
    fn ratio_approaches_floor(p in params_strategy(), t in 1.0f64..1e6) {
        let floor = p.min_ratio().value();
        let mut prev = f64::INFINITY;
        for k in 0..6 {
            let r = target_ratio_for(&p, t * 10f64.powi(k)).value();
            let gap = r - floor;
            prop_assert!(gap >= 0.0);
            prop_assert!(gap <= prev);
            prev = gap;
        }
    }

    #[test]
    fn ratio_increasing_in_floor(
        p in params_strategy(),
        db in 1i64..1000,
        t in 1.0f64..1e9,
    ) {
        let b = p.min_ratio();
        let r1 = target_ratio(t, b, p.tvl_factor(), p.tvl_exponent());
        let r2 = target_ratio(t, b + Bps::from_int(db), p.tvl_factor(), p.tvl_exponent());
        prop_assert!(r2 > r1);
    }

    #[test]
    fn band_brackets_target(p in params_strategy(), t in 0.0f64..1e10) {
        let ev = evaluate(&p, t);
        prop_assert!(ev.triggers.low_trigger >= Bps::ZERO);
        prop_assert!(ev.triggers.low_trigger <= ev.target);
        prop_assert!(ev.target <= ev.triggers.high_trigger);
    }

    #[test]
    fn sampling_shape(
        p in params_strategy(),
        max_tvl in 1.0f64..1e12,
        n in 2usize..400,
        log in any::<bool>(),
    ) {
        let curve = sample_curve(&p, max_tvl, n, log).unwrap();
        prop_assert_eq!(curve.len(), n);
        prop_assert_eq!(curve[0].tvl, domain_floor(max_tvl, log));
        prop_assert_eq!(curve[n - 1].tvl, max_tvl);
        let rep = verify_curve(&curve).unwrap();
        prop_assert!(rep.tvl_increasing);
        prop_assert!(rep.target_monotone);
        prop_assert!(rep.band_ordered);
    }

    #[test]
    fn evaluation_is_bit_identical(p in params_strategy(), t in 0.0f64..1e10) {
        let a = evaluate(&p, t);
        let b = evaluate(&p, t);
        prop_assert_eq!(a.target.value().to_bits(), b.target.value().to_bits());
        prop_assert_eq!(
            a.triggers.high_trigger.value().to_bits(),
            b.triggers.high_trigger.value().to_bits()
        );
        let c1 = sample_curve(&p, 1e9, 50, true).unwrap();
        let c2 = sample_curve(&p, 1e9, 50, true).unwrap();
        prop_assert_eq!(c1, c2);
    }
}
