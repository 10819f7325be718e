// Statistical and shape checks for logistic sampling with fixed seeds.

mod util;

#[cfg(feature = "probability_distributions")]
mod logistic_sampling_tests {
    use super::util::{assert_close, sample_moments};
    use logistic_kernels::{KernelError, Logistic, Sampler, Tensor};

    const PI_OVER_SQRT3: f64 = 1.8137993642342178;

    #[test]
    fn standard_sample_moments() {
        let d = Logistic::from_scalars(0.0_f64, 1.0).unwrap().with_seed(20250821);
        let mut sampler = d.sampler();
        let n = 200_000;
        let x = d.sample(&mut sampler, &[n], None, None).unwrap();
        assert_eq!(x.shape(), &[n]);
        assert!(x.all_finite());
        let (mean, sd) = sample_moments(x.as_slice());
        // standard error of the mean is sd / sqrt(n) ≈ 0.004
        assert!(mean.abs() < 0.03, "mean = {mean}");
        assert!((sd - PI_OVER_SQRT3).abs() < 0.03, "sd = {sd}");
    }

    #[test]
    fn shifted_scaled_sample_moments() {
        let d = Logistic::from_scalars(5.0_f64, 0.25).unwrap();
        let mut sampler = Sampler::seeded(99);
        let x = d.sample(&mut sampler, &[100_000], None, None).unwrap();
        let (mean, sd) = sample_moments(x.as_slice());
        assert!((mean - 5.0).abs() < 0.01, "mean = {mean}");
        assert!((sd - 0.25 * PI_OVER_SQRT3).abs() < 0.01, "sd = {sd}");
    }

    #[test]
    fn sample_median_matches_location() {
        let d = Logistic::from_scalars(-2.0_f64, 3.0).unwrap();
        let mut sampler = Sampler::seeded(1234);
        let x = d.sample(&mut sampler, &[50_001], None, None).unwrap();
        let below = x.as_slice().iter().filter(|&&v| v < -2.0).count() as f64;
        assert_close(below / 50_001.0, 0.5, 0.01);
    }

    #[test]
    fn f32_sample_moments() {
        let d = Logistic::from_scalars(0.0_f32, 2.0).unwrap();
        let mut sampler = Sampler::seeded(7);
        let x = d.sample(&mut sampler, &[100_000], None, None).unwrap();
        assert!(x.all_finite());
        let (mean, sd) = sample_moments(x.as_slice());
        assert!(mean.abs() < 0.05, "mean = {mean}");
        assert!((sd - 2.0 * PI_OVER_SQRT3).abs() < 0.05, "sd = {sd}");
    }

    #[test]
    fn same_seed_same_draws() {
        let d = Logistic::from_scalars(1.0_f64, 2.0).unwrap().with_seed(42);
        let a = d.sample(&mut d.sampler(), &[64], None, None).unwrap();
        let b = d.sample(&mut d.sampler(), &[64], None, None).unwrap();
        assert_eq!(a, b);

        let mut s = Sampler::seeded(42);
        let c = d.sample(&mut s, &[64], None, None).unwrap();
        assert_eq!(a, c);
        let e = d.sample(&mut s, &[64], None, None).unwrap();
        assert_ne!(c, e);
    }

    #[test]
    fn scalar_request_with_scalar_batch_is_zero_dimensional() {
        let d = Logistic::from_scalars(0.0_f64, 1.0).unwrap();
        let mut s = Sampler::seeded(0);
        let x = d.sample(&mut s, &[], None, None).unwrap();
        assert!(x.is_scalar());
        assert_eq!(x.shape(), &[] as &[usize]);
    }

    #[test]
    fn requested_shape_prepends_batch_shape() {
        let loc = Tensor::from_vec(vec![0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0], &[2, 3]).unwrap();
        let scale = Tensor::from_slice(&[1.0_f64, 2.0, 3.0]);
        let d = Logistic::new(loc, scale).unwrap();
        let mut s = Sampler::seeded(3);

        let x = d.sample(&mut s, &[], None, None).unwrap();
        assert_eq!(x.shape(), &[2, 3]);

        let x = d.sample(&mut s, &[5], None, None).unwrap();
        assert_eq!(x.shape(), &[5, 2, 3]);
    }

    #[test]
    fn sample_with_overrides() {
        let d = Logistic::<f64>::unparameterised();
        let mut s = Sampler::seeded(8);
        let loc = Tensor::from_slice(&[100.0, -100.0]);
        let scale = Tensor::scalar(1e-3);
        let x = d.sample(&mut s, &[3], Some(&loc), Some(&scale)).unwrap();
        assert_eq!(x.shape(), &[3, 2]);
        for row in x.as_slice().chunks(2) {
            assert!((row[0] - 100.0).abs() < 0.1);
            assert!((row[1] + 100.0).abs() < 0.1);
        }

        assert!(matches!(
            d.sample(&mut s, &[3], None, None),
            Err(KernelError::MissingParameter(_))
        ));
        let bad = Tensor::scalar(0.0);
        assert!(matches!(
            d.sample(&mut s, &[3], Some(&loc), Some(&bad)),
            Err(KernelError::InvalidArguments(_))
        ));
    }

    #[test]
    fn zero_sized_request() {
        let d = Logistic::from_scalars(0.0_f64, 1.0).unwrap();
        let mut s = Sampler::seeded(2);
        let x = d.sample(&mut s, &[0, 4], None, None).unwrap();
        assert_eq!(x.shape(), &[0, 4]);
        assert!(x.is_empty());
    }
}
