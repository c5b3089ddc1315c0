use breakslides::{column_lengths, paginate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_column_lengths_partition(count in 0usize..500, column_max in 1usize..40) {
        let lengths = column_lengths(count, column_max).unwrap();

        prop_assert_eq!(lengths.iter().sum::<usize>(), count);
        prop_assert_eq!(lengths.len(), count.div_ceil(column_max));
        prop_assert!(lengths.iter().all(|&len| len <= column_max));

        if let (Some(max), Some(min)) = (lengths.iter().max(), lengths.iter().min()) {
            prop_assert!(max - min <= 1);
        }
        // Longer columns come first
        prop_assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_paginate_pairs_in_order(count in 0usize..500, column_max in 1usize..40) {
        let lengths = column_lengths(count, column_max).unwrap();
        let slides = paginate(&lengths);

        prop_assert_eq!(slides.len(), lengths.len().div_ceil(2));

        let ranges: Vec<_> = slides.iter().flat_map(|s| s.columns.clone()).collect();
        prop_assert_eq!(ranges.len(), lengths.len());

        let mut next = 0;
        for (range, len) in ranges.iter().zip(&lengths) {
            prop_assert_eq!(range.start, next);
            prop_assert_eq!(range.len(), *len);
            next = range.end;
        }
        prop_assert_eq!(next, count);

        for (index, slide) in slides.iter().enumerate() {
            prop_assert_eq!(slide.index, index);
            prop_assert_eq!(slide.total, slides.len());
            let last = index + 1 == slides.len();
            let expected = if last && lengths.len() % 2 == 1 { 1 } else { 2 };
            prop_assert_eq!(slide.columns.len(), expected);
            prop_assert_eq!(slide.counter().is_some(), slides.len() > 1);
        }
    }
}
