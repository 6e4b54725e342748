#[cfg(test)]
mod _tests_scalar_vectors {
    use super::super::{LatticeVector, B4, C3, D7, G6, S6};
    use nalgebra::Vector3;
    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOL: f64 = 1e-9;

    fn cube() -> G6 {
        G6::new([1.0, 1.0, 1.0, 0.0, 0.0, 0.0])
    }

    fn triclinic() -> G6 {
        G6::new([100.0, 121.0, 144.0, 45.0, 20.0, -11.0])
    }

    fn invalid() -> G6 {
        G6::new([-1.0, 1.0, 1.0, 0.0, 0.0, 0.0])
    }

    fn assert_g6_close(actual: &G6, expected: &G6) {
        for i in 0..6 {
            assert!(
                (actual[i] - expected[i]).abs() < TOL,
                "component {i}: expected {}, got {}",
                expected[i],
                actual[i]
            );
        }
    }

    // ==================== S6 ====================

    #[test]
    fn test_s6_of_cube() {
        let s6 = S6::from_g6(&cube());
        assert_eq!(s6.values(), [0.0, 0.0, 0.0, -1.0, -1.0, -1.0]);
        assert!(s6.is_valid());
    }

    #[test]
    fn test_s6_round_trip() {
        let g6 = triclinic();
        assert_g6_close(&S6::from(&g6).to_g6(), &g6);
    }

    #[test]
    fn test_s6_validity() {
        assert!(!S6::new([f64::NAN, 0.0, 0.0, -1.0, -1.0, -1.0]).is_valid());
        assert!(!S6::from_g6(&invalid()).is_valid());
        // Positive scalars are allowed; they just mean the cell is unreduced
        assert!(S6::new([1.0, -2.0, -3.0, -4.0, -5.0, -6.0]).is_valid());
    }

    #[test]
    fn test_random_s6_bounds() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let s6 = S6::random(&mut rng, 4.0);
            assert!(s6.is_valid());
            for value in s6.values() {
                assert!((-3.2..0.8).contains(&value));
            }
        }
    }

    // ==================== D7 ====================

    #[test]
    fn test_d7_of_cube() {
        let d7 = D7::from_g6(&cube());
        assert_eq!(d7.values(), [1.0, 1.0, 1.0, 3.0, 2.0, 2.0, 2.0]);
        assert!(d7.is_valid());
        assert_eq!(d7[3], 3.0);
    }

    #[test]
    fn test_d7_round_trip() {
        let g6 = triclinic();
        assert_g6_close(&D7::from(&g6).to_g6(), &g6);
    }

    #[test]
    fn test_d7_needs_positive_edges() {
        assert!(!D7::new([1.0, 1.0, 0.0, 3.0, 2.0, 2.0, 2.0]).is_valid());
        assert!(!D7::new([1.0, 1.0, 1.0, -3.0, 2.0, 2.0, 2.0]).is_valid());
        assert!(!D7::from_g6(&invalid()).is_valid());
    }

    // ==================== C3 ====================

    #[test]
    fn test_c3_of_cube() {
        let c3 = C3::from(&cube());
        assert_eq!(c3.values(), [Complex64::new(0.0, -1.0); 3]);
        assert!((c3.norm() - 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_c3_round_trip() {
        let s6 = S6::from_g6(&triclinic());
        let c3 = C3::from_s6(&s6);
        assert_eq!(c3.to_s6(), s6);
        assert!((c3.norm() - s6.norm()).abs() < 1e-12);
        assert_g6_close(&G6::from(&c3), &triclinic());
    }

    #[test]
    fn test_c3_validity() {
        assert!(!C3::from(&invalid()).is_valid());
        assert!(!C3::new([Complex64::new(f64::NAN, 0.0); 3]).is_valid());
    }

    // ==================== B4 ====================

    #[test]
    fn test_b4_of_cube() {
        let b4 = B4::from_g6(&G6::new([4.0, 4.0, 4.0, 0.0, 0.0, 0.0]));
        assert!(b4.is_valid());
        let [a, b, c, d] = b4.vectors();
        assert_eq!(*a, Vector3::new(2.0, 0.0, 0.0));
        assert!((b - Vector3::new(0.0, 2.0, 0.0)).norm() < 1e-12);
        assert!((c - Vector3::new(0.0, 0.0, 2.0)).norm() < 1e-12);
        assert!((a + b + c + d).norm() < 1e-12);
    }

    #[test]
    fn test_b4_round_trip() {
        let g6 = triclinic();
        let b4 = B4::from(&g6);
        assert!(b4.vectors()[2].z > 0.0);
        assert_g6_close(&G6::from(&b4), &g6);
    }

    #[test]
    fn test_coplanar_b4_is_invalid() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        let c = Vector3::new(1.0, 1.0, 0.0);
        let b4 = B4::new([a, b, c, -(a + b + c)]);
        assert!(!b4.is_valid());
        assert!(!b4.to_g6().is_valid());
    }

    #[test]
    fn test_invalid_g6_gives_zero_b4() {
        let b4 = B4::from_g6(&invalid());
        assert!(!b4.is_valid());
        assert_eq!(b4.norm(), 0.0);
    }

    #[test]
    fn test_b4_distance() {
        let small = B4::from_g6(&cube());
        let large = B4::from_g6(&G6::new([4.0, 4.0, 4.0, 0.0, 0.0, 0.0]));
        assert_eq!(small.distance(&small), 0.0);
        assert!((small.distance(&large) - 6.0_f64.sqrt()).abs() < 1e-12);
        assert!((small.distance(&large) - large.distance(&small)).abs() < 1e-15);
    }

    // ==================== Common interface ====================

    #[test]
    fn test_every_encoding_reproduces_the_metric() {
        let g6 = triclinic();
        let encodings: Vec<Box<dyn LatticeVector>> = vec![
            Box::new(g6),
            Box::new(S6::from(&g6)),
            Box::new(D7::from(&g6)),
            Box::new(C3::from(&g6)),
            Box::new(B4::from(&g6)),
        ];
        for encoding in &encodings {
            assert!(encoding.is_valid());
            assert_g6_close(&encoding.to_g6(), &g6);
        }
    }

    #[test]
    fn test_invalid_metric_propagates_through_every_encoding() {
        let g6 = invalid();
        let encodings: Vec<Box<dyn LatticeVector>> = vec![
            Box::new(S6::from(&g6)),
            Box::new(D7::from(&g6)),
            Box::new(C3::from(&g6)),
            Box::new(B4::from(&g6)),
        ];
        for encoding in &encodings {
            assert!(!encoding.is_valid());
            assert!(!encoding.to_g6().is_valid());
        }
    }
}
