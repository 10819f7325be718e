// Property tests for the logistic distribution identities.

#[cfg(feature = "probability_distributions")]
mod logistic_property_tests {
    use logistic_kernels::kernels::scientific::softplus::softplus;
    use logistic_kernels::{Logistic, Tensor};
    use proptest::prelude::*;

    const PI_OVER_SQRT3: f64 = 1.8137993642342178;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_cdf_plus_survival_is_one(
            loc in -100.0f64..100.0,
            scale in 0.01f64..50.0,
            x in -1000.0f64..1000.0,
        ) {
            let d = Logistic::from_scalars(loc, scale).unwrap();
            let v = Tensor::scalar(x);
            let c = d.cdf(&v, None, None).unwrap().item().unwrap();
            let s = d.survival_function(&v, None, None).unwrap().item().unwrap();
            prop_assert!((c + s - 1.0).abs() < 1e-12, "cdf {} + sf {} != 1", c, s);
        }

        #[test]
        fn prop_log_cdf_matches_cdf(
            loc in -10.0f64..10.0,
            scale in 0.1f64..10.0,
            x in -30.0f64..30.0,
        ) {
            let d = Logistic::from_scalars(loc, scale).unwrap();
            let v = Tensor::scalar(x);
            let c = d.cdf(&v, None, None).unwrap().item().unwrap();
            let lc = d.log_cdf(&v, None, None).unwrap().item().unwrap();
            let s = d.survival_function(&v, None, None).unwrap().item().unwrap();
            let ls = d.log_survival(&v, None, None).unwrap().item().unwrap();
            // Past the softplus threshold the tail branches are first-order, so the
            // relative error is bounded by e^{threshold} rather than by rounding
            prop_assert!((lc.exp() - c).abs() <= 1e-6 * c);
            prop_assert!((ls.exp() - s).abs() <= 1e-6 * s);
        }

        #[test]
        fn prop_log_functions_finite(
            loc in -1e3f64..1e3,
            scale in 1e-3f64..1e3,
            x in -1e6f64..1e6,
        ) {
            let d = Logistic::from_scalars(loc, scale).unwrap();
            let v = Tensor::scalar(x);
            prop_assert!(d.log_prob(&v, None, None).unwrap().item().unwrap().is_finite());
            prop_assert!(d.log_cdf(&v, None, None).unwrap().item().unwrap().is_finite());
            prop_assert!(d.log_survival(&v, None, None).unwrap().item().unwrap().is_finite());
        }

        #[test]
        fn prop_softplus_finite_and_regimes(x in -1e30f64..1e30) {
            let y = softplus(&[x]).unwrap()[0];
            prop_assert!(y.is_finite());
            prop_assert!(y >= 0.0);
            if x > 15.0 {
                prop_assert_eq!(y, x);
            }
        }

        #[test]
        fn prop_softplus_f32_finite(x in -1e30f32..1e30) {
            let y = softplus(&[x]).unwrap()[0];
            prop_assert!(y.is_finite());
        }

        #[test]
        fn prop_summary_statistics(loc in -1e3f64..1e3, scale in 1e-3f64..1e3) {
            let d = Logistic::from_scalars(loc, scale).unwrap();
            prop_assert_eq!(d.mean(None, None).unwrap().item(), Some(loc));
            prop_assert_eq!(d.mode(None, None).unwrap().item(), Some(loc));
            let sd = d.sd(None, None).unwrap().item().unwrap();
            prop_assert!((sd - scale * PI_OVER_SQRT3).abs() <= 1e-14 * sd);
            let h = d.entropy(None, None).unwrap().item().unwrap();
            prop_assert!((h - (scale.ln() + 2.0)).abs() <= 1e-14 * h.abs().max(1.0));
        }

        #[test]
        fn prop_quantile_inverts_cdf(
            loc in -10.0f64..10.0,
            scale in 0.1f64..10.0,
            p in 0.001f64..0.999,
        ) {
            let d = Logistic::from_scalars(loc, scale).unwrap();
            let q = d.quantile(&Tensor::scalar(p), None, None).unwrap();
            let back = d.cdf(&q, None, None).unwrap().item().unwrap();
            prop_assert!((back - p).abs() < 1e-12);
        }
    }
}
