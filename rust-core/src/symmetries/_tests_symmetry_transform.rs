#[cfg(test)]
mod _tests_symmetry_transform {
    use super::super::lattice_centering::LatticeCentering;
    use super::super::symmetry_transform::{g6_matrix_from_basis, StandardCentering, SymmetryTransform};
    use crate::error::CellError;
    use crate::vectors::G6;
    use nalgebra::{Matrix3, Matrix6};

    #[test]
    fn test_parse_symbols() {
        assert_eq!(LatticeCentering::from_symbol("P").unwrap(), LatticeCentering::Primitive);
        assert_eq!(LatticeCentering::from_symbol("f").unwrap(), LatticeCentering::FaceCentered);
        assert_eq!(LatticeCentering::from_symbol(" I4/mmm").unwrap(), LatticeCentering::BodyCentered);
        assert_eq!("R".parse::<LatticeCentering>().unwrap(), LatticeCentering::Rhombohedral);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            LatticeCentering::from_symbol(""),
            Err(CellError::UnknownCentering(String::new()))
        );
        assert_eq!(
            LatticeCentering::from_symbol("X"),
            Err(CellError::UnknownCentering("X".to_string()))
        );
        assert_eq!(LatticeCentering::from_char('z'), None);
    }

    #[test]
    fn test_symbol_round_trip() {
        for centering in LatticeCentering::ALL {
            assert_eq!(LatticeCentering::from_char(centering.symbol()), Some(centering));
            assert_eq!(centering.to_string().parse::<LatticeCentering>().unwrap(), centering);
        }
    }

    #[test]
    fn test_basis_determinant_is_inverse_multiplicity() {
        for centering in LatticeCentering::ALL {
            let det = centering.primitive_basis().determinant().abs();
            assert!(
                (det - 1.0 / centering.multiplicity() as f64).abs() < 1e-12,
                "{centering}: det {det}"
            );
        }
    }

    #[test]
    fn test_identity_basis_lifts_to_identity() {
        assert_eq!(g6_matrix_from_basis(&Matrix3::identity()), Matrix6::identity());
    }

    #[test]
    #[rustfmt::skip]
    fn test_axis_swap_lifts_to_g6_permutation() {
        let swap = Matrix3::new(
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        );
        let g6 = G6::new([4.0, 9.0, 16.0, 1.0, 2.0, 3.0]);
        let swapped = g6_matrix_from_basis(&swap) * g6.as_vector();
        assert_eq!(swapped.as_slice(), &[9.0, 4.0, 16.0, 2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_standard_transform_is_consistent() {
        let g6 = G6::new([100.0, 121.0, 144.0, 45.0, 20.0, -11.0]);
        for centering in LatticeCentering::ALL {
            let transform = StandardCentering.transform(&g6, centering);
            assert_eq!(transform.centering, centering);
            assert_eq!(transform.basis, centering.primitive_basis());
            assert_eq!(transform.g6_matrix, g6_matrix_from_basis(&transform.basis));

            let expected = G6::from_metric_matrix(
                &(transform.basis * g6.metric_matrix() * transform.basis.transpose()),
            );
            for i in 0..6 {
                assert!((transform.primitive[i] - expected[i]).abs() < 1e-9);
            }
            assert!(transform.primitive.is_valid());
        }
    }

    #[test]
    fn test_transform_keeps_invalid_input_invalid() {
        let invalid = G6::new([-1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
        assert!(!invalid.is_valid());
        let transform = StandardCentering.transform(&invalid, LatticeCentering::Primitive);
        assert!(!transform.primitive.is_valid());
    }
}
