#[cfg(test)]
mod _tests_reduction {
    use crate::cell::UnitCell;
    use crate::error::CellError;
    use crate::reduction::{
        axis_permutation_matrix, selling_step_matrix, DeloneReduction, ReductionOracle,
        SellingReduction, SCALAR_EDGES,
    };
    use crate::vectors::S6;
    use nalgebra::Matrix6;

    const TOL: f64 = 1e-9;

    fn unreduced_cells() -> Vec<UnitCell> {
        vec![
            UnitCell::new(1.0, 1.0, 1.0, 60.0, 60.0, 60.0),
            UnitCell::new(10.0, 11.0, 12.0, 70.0, 75.0, 80.0),
            UnitCell::new(5.0, 9.0, 7.0, 50.0, 70.0, 65.0),
        ]
    }

    #[test]
    fn test_scalar_edges_cover_the_tetrahedron() {
        for (index, &(i, j)) in SCALAR_EDGES.iter().enumerate() {
            assert!(i < j && j < 4);
            assert!(!SCALAR_EDGES[index + 1..].contains(&(i, j)));
        }
    }

    #[test]
    fn test_selling_step_is_an_involution() {
        for index in 0..6 {
            let step = selling_step_matrix(index);
            assert_eq!(step * step, Matrix6::identity(), "step {index}");
        }
    }

    #[test]
    #[should_panic]
    fn test_selling_step_rejects_index_past_last_scalar() {
        selling_step_matrix(SCALAR_EDGES.len());
    }

    #[test]
    fn test_selling_step_negates_the_chosen_scalar() {
        let s6 = S6::new([1.0, -2.0, -3.0, -4.0, -5.0, -6.0]);
        let stepped = selling_step_matrix(0) * s6.as_vector();
        assert_eq!(stepped[0], -1.0);
    }

    #[test]
    fn test_cubic_cell_is_already_reduced() {
        let s6 = UnitCell::new(1.0, 1.0, 1.0, 90.0, 90.0, 90.0).to_s6();
        assert!(SellingReduction.is_reduced(&s6));

        let reduction = SellingReduction.reduce(&s6).unwrap();
        assert_eq!(reduction.cycles, 0);
        assert_eq!(reduction.transform, Matrix6::identity());
        assert_eq!(reduction.reduced, s6);
    }

    #[test]
    fn test_selling_reduction_makes_every_scalar_non_positive() {
        for cell in unreduced_cells() {
            let s6 = cell.to_s6();
            assert!(!SellingReduction.is_reduced(&s6), "{cell}");

            let reduction = SellingReduction.reduce(&s6).unwrap();
            assert!(reduction.cycles > 0);
            assert!(SellingReduction.is_reduced(&reduction.reduced));
            for value in reduction.reduced.values() {
                assert!(value <= TOL);
            }
        }
    }

    #[test]
    fn test_reduction_transform_maps_input_to_output() {
        for cell in unreduced_cells() {
            let s6 = cell.to_s6();
            for reduction in [
                SellingReduction.reduce(&s6).unwrap(),
                DeloneReduction::default().reduce(&s6).unwrap(),
            ] {
                let mapped = reduction.transform * s6.as_vector();
                for i in 0..6 {
                    assert!((mapped[i] - reduction.reduced[i]).abs() < TOL);
                }
            }
        }
    }

    #[test]
    fn test_reduction_preserves_volume() {
        for cell in unreduced_cells() {
            let reduced = SellingReduction.reduce_cell(&cell).unwrap();
            assert!(reduced.is_valid());
            assert!((reduced.volume() - cell.volume()).abs() < 1e-8 * cell.volume());
        }
    }

    #[test]
    fn test_delone_reduction_sorts_edges() {
        for cell in unreduced_cells() {
            let reduced = DeloneReduction::default().reduce_cell(&cell).unwrap();
            assert!(reduced.is_valid());
            let [a, b, c] = reduced.lengths();
            assert!(a <= b + TOL && b <= c + TOL, "{reduced}");
            assert!((reduced.volume() - cell.volume()).abs() < 1e-8 * cell.volume());
        }
    }

    #[test]
    fn test_delone_oracle_agrees_with_selling() {
        let delone = DeloneReduction::default();
        for cell in unreduced_cells() {
            let s6 = cell.to_s6();
            assert_eq!(delone.is_reduced(&s6), SellingReduction.is_reduced(&s6));
        }
    }

    #[test]
    fn test_invalid_input_cannot_be_reduced() {
        let s6 = S6::new([f64::NAN, 0.0, 0.0, -1.0, -1.0, -1.0]);
        assert!(!s6.is_valid());
        assert!(!SellingReduction.is_reduced(&s6));
        assert_eq!(SellingReduction.reduce(&s6), Err(CellError::ReductionFailed(0)));
        assert!(DeloneReduction::default().reduce(&s6).is_err());
    }

    #[test]
    fn test_axis_permutation_relabels_cell() {
        let cell = UnitCell::new(10.0, 11.0, 12.0, 80.0, 85.0, 95.0);
        let relabelled = UnitCell::new(11.0, 12.0, 10.0, 85.0, 95.0, 80.0);
        let permuted = axis_permutation_matrix([1, 2, 0]) * cell.to_s6().as_vector();
        let expected = relabelled.to_s6();
        for i in 0..6 {
            assert!((permuted[i] - expected[i]).abs() < TOL);
        }
    }

    #[test]
    fn test_identity_permutation() {
        assert_eq!(axis_permutation_matrix([0, 1, 2]), Matrix6::identity());
    }
}
