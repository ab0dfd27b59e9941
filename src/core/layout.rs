use crate::domain::model::{Column, Container, LayoutRow};

/// Fixed item capacities of the two print-grid columns. Header and filler
/// rows occupy slots without counting against these.
pub const LEFT_CAPACITY: usize = 25;
pub const RIGHT_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedGrid {
    pub left: Column,
    pub right: Column,
    /// Item rows that did not fit the right column and were dropped from
    /// the printed layout. The caller decides how loudly to report this.
    pub dropped_items: usize,
}

/// Lays the normalized container sequence out into the two fixed-capacity
/// columns: a header row at each container start, one item row per item
/// with a single global serial counter, then filler rows padding each
/// column to its exact capacity.
///
/// Filling is one-way: once the left column's item capacity is exhausted
/// the walk switches to the right column and never returns. If the switch
/// lands exactly on a container boundary, the just-written header would be
/// left orphaned at the bottom of the left column, so it is relocated to
/// the top of the right column instead. Items beyond the right column's
/// capacity are dropped.
pub fn paginate(containers: &[Container]) -> PaginatedGrid {
    let mut left = Column::new(LEFT_CAPACITY);
    let mut right = Column::new(RIGHT_CAPACITY);

    let mut filling_right = false;
    let mut item_count = 0usize;
    let mut serial = 0usize;
    let mut dropped_items = 0usize;

    for container in containers {
        let title = format!("Box {}", container.ordinal);
        // 標題列永遠跟著目前欄位走,不計入容量
        let current = if filling_right { &mut right } else { &mut left };
        current.rows.push(LayoutRow::Header { title });

        for item in &container.items {
            if !filling_right && item_count >= LEFT_CAPACITY {
                filling_right = true;
                item_count = 0;
                // 換欄恰好落在箱子邊界時,把孤立的標題列一併搬過去
                if left.rows.last().is_some_and(LayoutRow::is_header) {
                    if let Some(header) = left.rows.pop() {
                        right.rows.push(header);
                    }
                }
            }

            if filling_right && item_count >= RIGHT_CAPACITY {
                dropped_items += 1;
                continue;
            }

            serial += 1;
            let row = LayoutRow::Item {
                serial,
                name: item.name.clone(),
                qty: item.qty,
                weight: item.weight,
            };
            if filling_right {
                right.rows.push(row);
            } else {
                left.rows.push(row);
            }
            item_count += 1;
        }
    }

    for _ in left.item_count()..LEFT_CAPACITY {
        left.rows.push(LayoutRow::Filler);
    }
    for _ in right.item_count()..RIGHT_CAPACITY {
        right.rows.push(LayoutRow::Filler);
    }

    PaginatedGrid {
        left,
        right,
        dropped_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Item;

    fn boxes(item_counts: &[usize]) -> Vec<Container> {
        item_counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Container {
                ordinal: i + 1,
                weight: 1.0,
                items: (0..count)
                    .map(|j| Item {
                        name: format!("item-{}-{}", i + 1, j + 1),
                        qty: 1,
                        weight: 0.5,
                    })
                    .collect(),
            })
            .collect()
    }

    fn serials(column: &Column) -> Vec<usize> {
        column
            .rows
            .iter()
            .filter_map(|row| match row {
                LayoutRow::Item { serial, .. } => Some(*serial),
                _ => None,
            })
            .collect()
    }

    fn headers(column: &Column) -> Vec<String> {
        column
            .rows
            .iter()
            .filter_map(|row| match row {
                LayoutRow::Header { title } => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_input_yields_all_fillers() {
        let grid = paginate(&[]);
        assert_eq!(grid.left.rows.len(), LEFT_CAPACITY);
        assert_eq!(grid.right.rows.len(), RIGHT_CAPACITY);
        assert_eq!(grid.left.filler_count(), LEFT_CAPACITY);
        assert_eq!(grid.right.filler_count(), RIGHT_CAPACITY);
        assert_eq!(grid.dropped_items, 0);
    }

    #[test]
    fn test_small_input_stays_in_left_column() {
        let grid = paginate(&boxes(&[3, 2]));

        assert_eq!(serials(&grid.left), vec![1, 2, 3, 4, 5]);
        assert_eq!(headers(&grid.left), vec!["Box 1", "Box 2"]);
        assert_eq!(grid.left.filler_count(), LEFT_CAPACITY - 5);
        assert!(serials(&grid.right).is_empty());
        assert!(headers(&grid.right).is_empty());
        assert_eq!(grid.right.filler_count(), RIGHT_CAPACITY);
    }

    #[test]
    fn test_serials_are_contiguous_across_columns() {
        let grid = paginate(&boxes(&[10, 10, 10]));

        let mut all = serials(&grid.left);
        all.extend(serials(&grid.right));
        assert_eq!(all, (1..=30).collect::<Vec<_>>());
        assert_eq!(serials(&grid.left).len(), LEFT_CAPACITY);
        assert_eq!(serials(&grid.right).len(), 5);
    }

    #[test]
    fn test_container_splitting_does_not_duplicate_header() {
        let grid = paginate(&boxes(&[26]));

        assert_eq!(headers(&grid.left), vec!["Box 1"]);
        assert!(headers(&grid.right).is_empty());
        assert_eq!(serials(&grid.left), (1..=25).collect::<Vec<_>>());
        assert_eq!(serials(&grid.right), vec![26]);
        assert_eq!(grid.left.filler_count(), 0);
        assert_eq!(grid.right.filler_count(), RIGHT_CAPACITY - 1);
    }

    #[test]
    fn test_header_relocated_when_split_falls_on_container_boundary() {
        let grid = paginate(&boxes(&[25, 2]));

        // The "Box 2" header would be orphaned at the bottom of the left
        // column; it must open the right column instead.
        assert_eq!(headers(&grid.left), vec!["Box 1"]);
        assert_eq!(headers(&grid.right), vec!["Box 2"]);
        assert!(grid.right.rows[0].is_header());
        assert_eq!(serials(&grid.left), (1..=25).collect::<Vec<_>>());
        assert_eq!(serials(&grid.right), vec![26, 27]);
    }

    #[test]
    fn test_overflow_past_right_capacity_is_dropped() {
        let grid = paginate(&boxes(&[50]));

        assert_eq!(serials(&grid.left).len(), LEFT_CAPACITY);
        assert_eq!(serials(&grid.right).len(), RIGHT_CAPACITY);
        assert_eq!(grid.dropped_items, 5);

        let mut all = serials(&grid.left);
        all.extend(serials(&grid.right));
        assert_eq!(all, (1..=45).collect::<Vec<_>>());
        assert_eq!(grid.left.filler_count(), 0);
        assert_eq!(grid.right.filler_count(), 0);
    }

    #[test]
    fn test_header_still_placed_when_right_column_is_full() {
        // Observed policy: container headers always land in the current
        // column, even when no item of that container fits anymore.
        let grid = paginate(&boxes(&[45, 3]));

        assert_eq!(headers(&grid.right), vec!["Box 2"]);
        assert_eq!(serials(&grid.right).len(), RIGHT_CAPACITY);
        assert_eq!(grid.dropped_items, 3);
    }

    #[test]
    fn test_columns_always_fill_exact_item_capacity() {
        for counts in [vec![], vec![1], vec![25], vec![13, 13], vec![60, 60]] {
            let grid = paginate(&boxes(&counts));
            assert_eq!(
                serials(&grid.left).len() + grid.left.filler_count(),
                LEFT_CAPACITY
            );
            assert_eq!(
                serials(&grid.right).len() + grid.right.filler_count(),
                RIGHT_CAPACITY
            );
        }
    }
}
