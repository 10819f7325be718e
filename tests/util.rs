#![allow(unused)]

use logistic_kernels::Tensor;

/// Relative-or-absolute closeness: `|a - e| <= tol * max(1, |e|)`.
/// NaN and infinities must match exactly.
pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    let scale = 1.0_f64.max(e.abs());
    let ok = (a - e).abs() <= tol * scale;
    assert!(ok, "mismatch: got {a}, expect {e} (tol={tol})");
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        if ei.is_infinite() {
            assert!(
                ai.is_infinite() && ai.is_sign_positive() == ei.is_sign_positive(),
                "idx {i}: expected {ei}, got {ai}"
            );
            continue;
        }
        let scale = 1.0_f64.max(ei.abs());
        let ok = (ai - ei).abs() <= tol * scale;
        assert!(ok, "idx {i}: got {ai}, expect {ei} (tol={tol})");
    }
}

/// Shape equality plus `assert_slice_close` on the elements.
pub fn assert_tensor_close(t: &Tensor<f64>, shape: &[usize], e: &[f64], tol: f64) {
    assert_eq!(t.shape(), shape, "shape mismatch");
    assert_slice_close(t.as_slice(), e, tol);
}

/// Sample mean and unbiased sample standard deviation.
pub fn sample_moments<T: Copy + Into<f64>>(x: &[T]) -> (f64, f64) {
    let n = x.len() as f64;
    let mean = x.iter().map(|&v| v.into()).sum::<f64>() / n;
    let var = x
        .iter()
        .map(|&v| (v.into() - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    (mean, var.sqrt())
}
