/// Pages shown around the selected page.
pub(crate) const PAGE_RANGE_DISPLAYED: u32 = 5;
/// Pages always shown at each end.
pub(crate) const MARGIN_PAGES_DISPLAYED: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PageItem {
    /// Zero-based page index.
    Page(u32),
    /// Gap marker; clicking it jumps to the zero-based index it carries.
    Break(u32),
}

/// Convert a zero-based UI index to the one-based page number the app works with.
pub(crate) fn to_page_number(selected: u32) -> u32 {
    selected.saturating_add(1)
}

/// Zero-based index for a one-based page number; page 0 is treated as page 1.
pub(crate) fn to_selected_index(page: u32) -> u32 {
    page.max(1) - 1
}

/// Page links to render for `total` pages with `selected` (zero-based) active.
///
/// Windowing follows the usual paginate-widget layout: margin pages at both
/// ends, a range centred on the selection (shifted when it hits an edge),
/// and a single break marker for each gap wider than one page.
pub(crate) fn page_window(total: u32, selected: u32, range: u32, margin: u32) -> Vec<PageItem> {
    if total == 0 {
        return vec![];
    }
    let selected = selected.min(total - 1);

    if total <= range {
        return (0..total).map(PageItem::Page).collect();
    }

    let half = f64::from(range) / 2.0;
    let sel = f64::from(selected);
    let (mut left, mut right) = (half, f64::from(range) - half);

    if sel > f64::from(total) - half {
        right = f64::from(total - selected);
        left = f64::from(range) - right;
    } else if sel < half {
        left = sel;
        right = f64::from(range) - left;
    }

    // The first page consumes one slot of the range when it is selected.
    let right = if selected == 0 && range > 1 { right - 1.0 } else { right };

    let mut items: Vec<PageItem> = Vec::new();
    for index in 0..total {
        let page = index + 1;
        let in_margin = page <= margin || page > total - margin;
        let idx = f64::from(index);
        let in_range = idx >= sel - left && idx <= sel + right;

        if in_margin || in_range {
            items.push(PageItem::Page(index));
            continue;
        }

        if !matches!(items.last(), Some(PageItem::Break(_)) | None) {
            let jump = if index < selected {
                selected.saturating_sub(range)
            } else {
                (selected + range).min(total - 1)
            };
            items.push(PageItem::Break(jump));
        }
    }

    // A break hiding a single page is shown as that page instead.
    let mut out = items.clone();
    for (i, item) in items.iter().enumerate() {
        if let (PageItem::Break(_), Some(PageItem::Page(a)), Some(PageItem::Page(b))) =
            (item, i.checked_sub(1).and_then(|p| items.get(p)), items.get(i + 1))
        {
            if b - a <= 2 {
                out[i] = PageItem::Page(a + 1);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[PageItem]) -> Vec<String> {
        items
            .iter()
            .map(|i| match i {
                PageItem::Page(p) => to_page_number(*p).to_string(),
                PageItem::Break(_) => "…".to_string(),
            })
            .collect()
    }

    fn window(total: u32, selected: u32) -> Vec<String> {
        labels(&page_window(
            total,
            selected,
            PAGE_RANGE_DISPLAYED,
            MARGIN_PAGES_DISPLAYED,
        ))
    }

    #[test]
    fn test_zero_based_index_translates_by_one() {
        assert_eq!(to_page_number(0), 1);
        assert_eq!(to_page_number(4), 5);
        assert_eq!(to_selected_index(1), 0);
        assert_eq!(to_selected_index(0), 0);
    }

    #[test]
    fn test_small_totals_show_every_page() {
        assert_eq!(window(1, 0), vec!["1"]);
        assert_eq!(window(5, 2), vec!["1", "2", "3", "4", "5"]);
        assert!(window(0, 0).is_empty());
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(window(10, 0), vec!["1", "2", "3", "4", "5", "…", "10"]);
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            window(20, 10),
            vec!["1", "…", "9", "10", "11", "12", "13", "…", "20"]
        );
    }

    #[test]
    fn test_single_hidden_page_is_shown_instead_of_break() {
        assert_eq!(
            window(10, 4),
            vec!["1", "2", "3", "4", "5", "6", "7", "…", "10"]
        );
        assert_eq!(
            window(10, 5),
            vec!["1", "…", "4", "5", "6", "7", "8", "9", "10"]
        );
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(window(10, 9), vec!["1", "…", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        assert_eq!(window(10, 42), window(10, 9));
    }

    #[test]
    fn test_break_jumps_by_range() {
        let items = page_window(20, 10, PAGE_RANGE_DISPLAYED, MARGIN_PAGES_DISPLAYED);
        let breaks: Vec<u32> = items
            .iter()
            .filter_map(|i| match i {
                PageItem::Break(j) => Some(*j),
                PageItem::Page(_) => None,
            })
            .collect();
        assert_eq!(breaks, vec![5, 15]);
    }
}
