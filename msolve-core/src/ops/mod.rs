//! Step-annotated matrix operations
//!
//! Every operation validates its operands, computes a fresh result and
//! records a human-readable derivation. Cell positions in the traces are
//! 1-based.

mod cofactor;
mod elementwise;
mod product;

pub use cofactor::{determinant, invert, SINGULAR_EPSILON};
pub use elementwise::{add, subtract};
pub use product::{multiply, transpose};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
        let rows = (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(-9..=9) as f64).collect())
            .collect::<Vec<Vec<f64>>>();
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_elementwise_properties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let (rows, cols) = (rng.gen_range(1..=6), rng.gen_range(1..=6));
            let a = random_matrix(&mut rng, rows, cols);
            let b = random_matrix(&mut rng, rows, cols);

            let sum = add(&a, &b).unwrap().result;
            let diff = subtract(&a, &b).unwrap().result;
            for i in 0..rows {
                for j in 0..cols {
                    assert_eq!(sum[(i, j)], a[(i, j)] + b[(i, j)]);
                    assert_eq!(diff[(i, j)], a[(i, j)] - b[(i, j)]);
                }
            }
        }
    }

    #[test]
    fn test_transpose_and_identity_properties() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let (rows, cols) = (rng.gen_range(1..=6), rng.gen_range(1..=6));
            let a = random_matrix(&mut rng, rows, cols);

            assert_eq!(transpose(&transpose(&a).result).result, a);

            let identity = Matrix::identity(cols).unwrap();
            assert_eq!(multiply(&a, &identity).unwrap().result, a);
        }
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut checked = 0;
        while checked < 50 {
            let n = rng.gen_range(1..=6);
            let a = random_matrix(&mut rng, n, n);
            let Some(inverse) = invert(&a).unwrap().result else {
                continue;
            };
            let product = multiply(&a, &inverse).unwrap().result;
            assert!(product.approx_eq(&Matrix::identity(n).unwrap(), 1e-7));
            checked += 1;
        }
    }

    #[test]
    fn test_singular_inverse_matches_zero_determinant() {
        let a = Matrix::from_rows(alloc::vec![
            alloc::vec![1.0, 2.0, 3.0],
            alloc::vec![2.0, 4.0, 6.0],
            alloc::vec![0.0, 1.0, 5.0],
        ])
        .unwrap();
        assert_eq!(determinant(&a).unwrap().result, 0.0);
        assert_eq!(invert(&a).unwrap().result, None);
    }
}
