//! Tests for stripe pair exchange including boundary handling

#[cfg(test)]
mod tests {
    use ndarray::{Array3, s};
    use std::num::NonZeroUsize;
    use stripeswap::SwapError;
    use stripeswap::spatial::PixelGrid;
    use stripeswap::transform::{Axis, StripeWidth, swap_stripes, swapped_pair_count, transform};

    fn sequential_grid(height: usize, width: usize) -> PixelGrid {
        Array3::from_shape_fn((height, width, 3), |(r, c, ch)| ((r * width + c) * 3 + ch) as u8)
    }

    fn width(value: usize) -> StripeWidth {
        StripeWidth::from(NonZeroUsize::new(value).unwrap())
    }

    // Tests rows are exchanged pairwise with width 1
    // Verified by swapping only the first pair
    #[test]
    fn test_rows_width_one() {
        let grid = sequential_grid(4, 2);
        let result = swap_stripes(&grid, Axis::Rows, width(1));

        assert_eq!(result.slice(s![0, .., ..]), grid.slice(s![1, .., ..]));
        assert_eq!(result.slice(s![1, .., ..]), grid.slice(s![0, .., ..]));
        // Second block of the last pair ends exactly at the axis end
        assert_eq!(result.slice(s![2, .., ..]), grid.slice(s![3, .., ..]));
        assert_eq!(result.slice(s![3, .., ..]), grid.slice(s![2, .., ..]));
    }

    // Tests columns are exchanged pairwise with width 1
    // Verified by slicing along rows instead of columns
    #[test]
    fn test_columns_width_one() {
        let grid = sequential_grid(2, 4);
        let result = swap_stripes(&grid, Axis::Columns, width(1));

        assert_eq!(result.slice(s![.., 0, ..]), grid.slice(s![.., 1, ..]));
        assert_eq!(result.slice(s![.., 1, ..]), grid.slice(s![.., 0, ..]));
        assert_eq!(result.slice(s![.., 2, ..]), grid.slice(s![.., 3, ..]));
        assert_eq!(result.slice(s![.., 3, ..]), grid.slice(s![.., 2, ..]));
    }

    // Tests whole blocks move together when width exceeds 1
    // Verified by exchanging single rows instead of blocks
    #[test]
    fn test_blocks_move_as_units() {
        let grid = sequential_grid(4, 3);
        let result = swap_stripes(&grid, Axis::Rows, width(2));

        assert_eq!(result.slice(s![0..2, .., ..]), grid.slice(s![2..4, .., ..]));
        assert_eq!(result.slice(s![2..4, .., ..]), grid.slice(s![0..2, .., ..]));
    }

    // Tests a single trailing block without partner stays in place
    // Verified by wrapping the trailing block to the front
    #[test]
    fn test_trailing_unpaired_block_untouched() {
        let grid = sequential_grid(5, 2);
        let result = swap_stripes(&grid, Axis::Rows, width(2));

        assert_eq!(result.slice(s![0..2, .., ..]), grid.slice(s![2..4, .., ..]));
        assert_eq!(result.slice(s![2..4, .., ..]), grid.slice(s![0..2, .., ..]));
        assert_eq!(result.slice(s![4, .., ..]), grid.slice(s![4, .., ..]));
    }

    // Tests a pair whose second block would be truncated is not exchanged
    // Verified by allowing partial second blocks
    #[test]
    fn test_truncated_pair_untouched() {
        let grid = sequential_grid(7, 1);
        let result = swap_stripes(&grid, Axis::Rows, width(2));

        assert_eq!(result.slice(s![0..2, .., ..]), grid.slice(s![2..4, .., ..]));
        assert_eq!(result.slice(s![4..7, .., ..]), grid.slice(s![4..7, .., ..]));
    }

    // Tests axis shorter than two stripes is returned unchanged
    // Verified by treating a lone full block as swappable
    #[test]
    fn test_axis_between_one_and_two_stripes() {
        let grid = sequential_grid(3, 4);
        assert_eq!(swap_stripes(&grid, Axis::Rows, width(2)), grid);

        let grid = sequential_grid(4, 6);
        assert_eq!(swap_stripes(&grid, Axis::Columns, width(4)), grid);
    }

    // Tests stripe wider than the axis is a no-op
    // Verified by clamping the stripe width to the axis length
    #[test]
    fn test_stripe_wider_than_axis() {
        let grid = sequential_grid(5, 3);
        let result = swap_stripes(&grid, Axis::Rows, width(10));

        assert_eq!(result, grid);
        assert_ne!(result.as_ptr(), grid.as_ptr());
    }

    // Tests empty grids pass through
    // Verified by computing pairs from the orthogonal axis
    #[test]
    fn test_empty_grid() {
        let grid = PixelGrid::zeros((0, 4, 3));
        assert_eq!(swap_stripes(&grid, Axis::Rows, width(1)), grid);
        assert_eq!(swap_stripes(&grid, Axis::Columns, width(1)), grid);
    }

    // Tests the input grid is left unmodified
    // Verified by swapping in place on the argument
    #[test]
    fn test_input_not_mutated() {
        let grid = sequential_grid(6, 6);
        let snapshot = grid.clone();

        let result = swap_stripes(&grid, Axis::Columns, width(1));

        assert_eq!(grid, snapshot);
        assert_ne!(result, grid);
    }

    // Tests channels of a pixel travel together
    // Verified by swapping along the channel axis
    #[test]
    fn test_channels_preserved() {
        let grid = sequential_grid(2, 2);
        let result = swap_stripes(&grid, Axis::Rows, width(1));

        for col in 0..2 {
            for ch in 0..3 {
                assert_eq!(result[(1, col, ch)], grid[(0, col, ch)]);
                assert_eq!(result[(0, col, ch)], grid[(1, col, ch)]);
            }
        }
    }

    // Tests element types other than u8 are supported
    // Verified by restricting the element type
    #[test]
    fn test_generic_element_type() {
        let grid = Array3::from_shape_fn((2, 1, 1), |(r, _, _)| format!("row{r}"));
        let result = swap_stripes(&grid, Axis::Rows, width(1));

        assert_eq!(result[(0, 0, 0)], "row1");
        assert_eq!(result[(1, 0, 0)], "row0");
    }

    // Tests pair counting follows the full-partner rule
    // Verified by rounding partial pairs up
    #[test]
    fn test_swapped_pair_count() {
        assert_eq!(swapped_pair_count(4, width(1)), 2);
        assert_eq!(swapped_pair_count(5, width(2)), 1);
        assert_eq!(swapped_pair_count(7, width(2)), 1);
        assert_eq!(swapped_pair_count(3, width(2)), 0);
        assert_eq!(swapped_pair_count(0, width(1)), 0);
        assert_eq!(swapped_pair_count(10, width(usize::MAX)), 0);
    }

    // Tests validating entry rejects non-positive widths
    // Verified by accepting zero as a width
    #[test]
    fn test_transform_rejects_non_positive_width() {
        let grid = sequential_grid(4, 4);

        for bad in [0, -1, -10] {
            let err = transform(&grid, Axis::Rows, bad).unwrap_err();
            assert!(
                matches!(err, SwapError::InvalidParameter { parameter: "stripe_width", .. }),
                "width {bad} should be rejected"
            );
        }
    }

    // Tests validating entry matches the infallible transform
    // Verified by ignoring the axis argument
    #[test]
    fn test_transform_matches_swap_stripes() {
        let grid = sequential_grid(4, 6);
        let result = transform(&grid, Axis::Columns, 2).unwrap();

        assert_eq!(result, swap_stripes(&grid, Axis::Columns, width(2)));
    }
}
